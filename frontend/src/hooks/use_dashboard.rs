use crate::services::chart_canvas::{CanvasChartBackend, CHART_CANVAS_ID};
use crate::services::logging::Logger;
use crate::services::view_model::{ViewModel, YewView};
use domain::{Dashboard, DashboardAction, DashboardConfig, DashboardError, ViewState};
use shared::Company;
use std::rc::Rc;
use yew::prelude::*;

pub type DashboardController = Dashboard<YewView, CanvasChartBackend>;

#[derive(Clone)]
pub struct UseDashboardHandle {
    pub model: ViewModel,
    pub state: ViewState,
    pub dispatch: Callback<DashboardAction>,
    /// Dispatches a parsed control value, or logs why it was rejected
    pub dispatch_parsed: Callback<Result<DashboardAction, DashboardError>>,
}

/// Owns the dashboard controller for the lifetime of the component
#[hook]
pub fn use_dashboard(companies: Rc<Vec<Company>>, config: DashboardConfig) -> UseDashboardHandle {
    let controller = use_mut_ref(move || {
        let mut dashboard = Dashboard::new(
            companies.as_ref().clone(),
            config,
            YewView::default(),
            CanvasChartBackend::new(CHART_CANVAS_ID),
        );
        dashboard.init();
        dashboard
    });

    let model = {
        let controller = controller.clone();
        use_state(move || controller.borrow().view().model().clone())
    };
    let state = {
        let controller = controller.clone();
        use_state(move || controller.borrow().state().clone())
    };

    let dispatch = {
        let controller = controller.clone();
        let model = model.clone();
        let state = state.clone();

        Callback::from(move |action: DashboardAction| {
            let mut dashboard = controller.borrow_mut();
            dashboard.dispatch(action);
            model.set(dashboard.view().model().clone());
            state.set(dashboard.state().clone());
        })
    };

    let dispatch_parsed = {
        let dispatch = dispatch.clone();
        Callback::from(move |parsed: Result<DashboardAction, DashboardError>| match parsed {
            Ok(action) => dispatch.emit(action),
            Err(e) => Logger::warn_with_component("Dashboard", &format!("Ignoring control value: {}", e)),
        })
    };

    UseDashboardHandle {
        model: (*model).clone(),
        state: (*state).clone(),
        dispatch,
        dispatch_parsed,
    }
}
