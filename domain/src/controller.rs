//! Dashboard controller: owns the view state and drives every render.
//!
//! UI events are turned into `DashboardAction`s and dispatched here. Each
//! action mutates the private `ViewState` and then explicitly re-renders
//! the affected regions through the `DashboardView`. The query is rerun
//! from the full dataset on every table render.

use crate::chart::{build_chart_spec, ChartBackend, ChartSlot};
use crate::config::DashboardConfig;
use crate::dataset::find_company;
use crate::detail::build_detail;
use crate::error::DashboardError;
use crate::pagination::{paginate, PageWindow};
use crate::query::{run_query, QueryState};
use crate::stats::{StatsService, StatsSummary};
use crate::table::{build_rows, pagination_info};
use crate::view::DashboardView;
use log::{debug, info, warn};
use shared::{ChartMode, Company, FiscalYear, PageSize, ProfitFilter, SortColumn, SortState};

/// A user interaction with the dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    SearchChanged(String),
    ProfitFilterChanged(ProfitFilter),
    ActiveYearChanged(FiscalYear),
    PageSizeChanged(PageSize),
    PreviousPage,
    NextPage,
    HeaderClicked(SortColumn),
    CompanyClicked(String),
    ModalClosed,
    ChartTabSelected(ChartMode),
}

impl DashboardAction {
    /// Action for a profit filter select value ("all", "profit", "loss")
    pub fn profit_filter(value: &str) -> Result<Self, DashboardError> {
        Ok(DashboardAction::ProfitFilterChanged(value.parse()?))
    }

    /// Action for an active year select value ("22", "23", "24")
    pub fn active_year(value: &str) -> Result<Self, DashboardError> {
        Ok(DashboardAction::ActiveYearChanged(value.parse()?))
    }

    /// Action for a page size select value ("20", "all")
    pub fn page_size(value: &str) -> Result<Self, DashboardError> {
        Ok(DashboardAction::PageSizeChanged(value.parse()?))
    }

    /// Action for a header's column key ("rev24", "name", "trend")
    pub fn header(key: &str) -> Result<Self, DashboardError> {
        Ok(DashboardAction::HeaderClicked(key.parse()?))
    }

    /// Action for a chart tab key ("revenue", "profit", "combined")
    pub fn chart_tab(key: &str) -> Result<Self, DashboardError> {
        Ok(DashboardAction::ChartTabSelected(key.parse()?))
    }
}

/// Table view state
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// 1-based; clamped on every table render
    pub current_page: usize,
    pub page_size: PageSize,
    pub query: QueryState,
}

impl ViewState {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            current_page: 1,
            page_size: config.default_page_size,
            query: QueryState {
                active_year: config.default_active_year,
                sort: config.default_sort,
                ..QueryState::default()
            },
        }
    }
}

/// Detail modal state; the company is re-resolved from `title` on tab switches
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModalState {
    pub open: bool,
    pub title: Option<String>,
    pub chart_mode: ChartMode,
}

pub struct Dashboard<V: DashboardView, B: ChartBackend> {
    companies: Vec<Company>,
    config: DashboardConfig,
    state: ViewState,
    modal: ModalState,
    stats: StatsService,
    view: V,
    chart: ChartSlot<B>,
}

impl<V: DashboardView, B: ChartBackend> Dashboard<V, B> {
    pub fn new(companies: Vec<Company>, config: DashboardConfig, view: V, chart_backend: B) -> Self {
        Self {
            state: ViewState::from_config(&config),
            stats: StatsService::with_config(&config),
            modal: ModalState::default(),
            chart: ChartSlot::new(chart_backend),
            companies,
            config,
            view,
        }
    }

    /// First render: stats cards and the table
    pub fn init(&mut self) {
        info!("Initializing dashboard with {} companies", self.companies.len());
        self.render_stats();
        self.render_table();
    }

    pub fn dispatch(&mut self, action: DashboardAction) {
        debug!("Dispatching {:?}", action);
        match action {
            DashboardAction::SearchChanged(term) => self.set_search(term),
            DashboardAction::ProfitFilterChanged(filter) => self.set_profit_filter(filter),
            DashboardAction::ActiveYearChanged(year) => self.set_active_year(year),
            DashboardAction::PageSizeChanged(size) => self.set_page_size(size),
            DashboardAction::PreviousPage => self.previous_page(),
            DashboardAction::NextPage => self.next_page(),
            DashboardAction::HeaderClicked(column) => self.sort_by(column),
            DashboardAction::CompanyClicked(name) => self.open_company(&name),
            DashboardAction::ModalClosed => self.close_modal(),
            DashboardAction::ChartTabSelected(mode) => self.select_chart_mode(mode),
        }
    }

    pub fn set_search(&mut self, term: String) {
        self.state.query.search = term;
        self.state.current_page = 1;
        self.render_table();
    }

    pub fn set_profit_filter(&mut self, filter: ProfitFilter) {
        self.state.query.profit_filter = filter;
        self.state.current_page = 1;
        self.render_table();
    }

    pub fn set_active_year(&mut self, year: FiscalYear) {
        self.state.query.active_year = year;
        self.state.current_page = 1;
        self.render_table();
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        if size == PageSize::Limited(0) {
            warn!("Ignoring zero page size");
            return;
        }
        self.state.page_size = size;
        self.state.current_page = 1;
        self.render_table();
    }

    pub fn previous_page(&mut self) {
        if self.state.current_page <= 1 {
            debug!("Already on the first page");
            return;
        }
        self.state.current_page -= 1;
        self.render_table();
    }

    pub fn next_page(&mut self) {
        if !self.page_window().has_next() {
            debug!("Already on the last page");
            return;
        }
        self.state.current_page += 1;
        self.render_table();
    }

    /// Same column toggles the direction and keeps the page; a new column
    /// takes its default direction and returns to the first page
    pub fn sort_by(&mut self, column: SortColumn) {
        let sort = &mut self.state.query.sort;
        if sort.column == column {
            sort.direction = sort.direction.toggled();
        } else {
            *sort = SortState {
                column,
                direction: column.default_direction(),
            };
            self.state.current_page = 1;
        }
        self.render_table();
    }

    /// Shows the detail modal; unknown names are ignored
    pub fn open_company(&mut self, name: &str) {
        let Some(company) = find_company(&self.companies, name) else {
            debug!("No company named '{}', ignoring", name);
            return;
        };

        let detail = build_detail(company, &self.config.amount_unit);
        let spec = build_chart_spec(company, ChartMode::Revenue);

        self.view.show_modal(detail);
        self.view.set_chart_tab(ChartMode::Revenue);
        self.modal = ModalState {
            open: true,
            title: Some(name.to_string()),
            chart_mode: ChartMode::Revenue,
        };
        self.chart.render(&spec);
    }

    pub fn close_modal(&mut self) {
        self.modal.open = false;
        self.view.hide_modal();
    }

    /// Redraws the chart of the company named in the modal title
    pub fn select_chart_mode(&mut self, mode: ChartMode) {
        self.modal.chart_mode = mode;
        self.view.set_chart_tab(mode);

        let Some(title) = self.modal.title.as_deref() else {
            debug!("No company in the modal, chart tab ignored");
            return;
        };
        let Some(company) = find_company(&self.companies, title) else {
            return;
        };
        let spec = build_chart_spec(company, mode);
        self.chart.render(&spec);
    }

    /// Reruns the query and renders the visible page, pager and sort indicator
    pub fn render_table(&mut self) {
        let filtered = run_query(&self.companies, &self.state.query);
        let window = paginate(filtered.len(), self.state.current_page, self.state.page_size);
        self.state.current_page = window.page;

        debug!(
            "Rendering page {}/{} of {} rows",
            window.page,
            window.display_total_pages(),
            window.total_items
        );

        self.view.set_rows(build_rows(&filtered[window.range()]));
        self.view.set_pagination(pagination_info(&window));
        self.view.set_sort_indicator(self.state.query.sort);
    }

    pub fn render_stats(&mut self) {
        let summary = StatsSummary::compute(&self.companies);
        self.view.set_stats(self.stats.cards(&summary));
    }

    fn page_window(&self) -> PageWindow {
        let filtered = run_query(&self.companies, &self.state.query);
        paginate(filtered.len(), self.state.current_page, self.state.page_size)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn chart(&self) -> &ChartSlot<B> {
        &self.chart
    }
}
