use crate::services::chart_canvas::CHART_CANVAS_ID;
use domain::DashboardAction;
use shared::{ChartMode, CompanyDetail};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CompanyModalProps {
    pub is_open: bool,
    pub detail: Option<CompanyDetail>,
    pub chart_tab: ChartMode,
    pub on_action: Callback<DashboardAction>,
}

fn stat(label: &str, value: Html) -> Html {
    html! {
        <div class="company-stat">
            <div class="label">{label.to_string()}</div>
            <div class="value">{value}</div>
        </div>
    }
}

/// Always mounted so the chart canvas exists before the first chart is drawn
#[function_component(CompanyModal)]
pub fn company_modal(props: &CompanyModalProps) -> Html {
    let on_backdrop_click = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_action.emit(DashboardAction::ModalClosed);
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(DashboardAction::ModalClosed))
    };

    let title = props.detail.as_ref().map(|d| d.name.clone()).unwrap_or_default();

    html! {
        <div
            id="modalOverlay"
            class={classes!("modal-overlay", props.is_open.then_some("active"))}
            onclick={on_backdrop_click}
        >
            <div class="modal" onclick={on_modal_click}>
                <div class="modal-header">
                    <h2 id="modalTitle">{title}</h2>
                    <button id="modalClose" class="modal-close" onclick={on_close_click}>{"×"}</button>
                </div>

                {if let Some(detail) = &props.detail {
                    let profit_style = if detail.profit_negative {
                        "color: var(--negative)"
                    } else {
                        "color: inherit"
                    };
                    html! {
                        <div id="companyStats" class="company-stats">
                            {stat(&detail.revenue_label, html! { {&detail.revenue_text} })}
                            {stat(&detail.profit_label, html! {
                                <span style={profit_style}>{&detail.profit_text}</span>
                            })}
                            {stat("수익 현황", html! { {detail.status.label()} })}
                            {stat("추세", html! { {detail.trend.label()} })}
                        </div>
                    }
                } else {
                    html! {}
                }}

                <div class="chart-tabs">
                    {for ChartMode::ALL.iter().map(|&mode| {
                        let on_action = props.on_action.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            on_action.emit(DashboardAction::ChartTabSelected(mode));
                        });
                        html! {
                            <button
                                class={classes!("chart-tab", (mode == props.chart_tab).then_some("active"))}
                                data-chart={mode.key()}
                                onclick={onclick}
                            >
                                {mode.label()}
                            </button>
                        }
                    })}
                </div>

                <div class="chart-container">
                    <canvas id={CHART_CANVAS_ID} width="640" height="320"></canvas>
                </div>
            </div>
        </div>
    }
}
