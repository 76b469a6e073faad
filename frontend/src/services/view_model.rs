use domain::DashboardView;
use shared::{ChartMode, CompanyDetail, PaginationInfo, SortState, StatCard, TableRow};

/// Everything the Yew components render, as last written by the controller
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewModel {
    pub rows: Vec<TableRow>,
    pub pagination: PaginationInfo,
    pub sort: SortState,
    pub stats: Vec<StatCard>,
    pub detail: Option<CompanyDetail>,
    pub modal_open: bool,
    pub chart_tab: ChartMode,
}

/// `DashboardView` backed by a `ViewModel` snapshot
#[derive(Debug, Default)]
pub struct YewView {
    model: ViewModel,
}

impl YewView {
    pub fn model(&self) -> &ViewModel {
        &self.model
    }
}

impl DashboardView for YewView {
    fn set_rows(&mut self, rows: Vec<TableRow>) {
        self.model.rows = rows;
    }

    fn set_pagination(&mut self, pagination: PaginationInfo) {
        self.model.pagination = pagination;
    }

    fn set_sort_indicator(&mut self, sort: SortState) {
        self.model.sort = sort;
    }

    fn set_stats(&mut self, cards: Vec<StatCard>) {
        self.model.stats = cards;
    }

    fn show_modal(&mut self, detail: CompanyDetail) {
        self.model.detail = Some(detail);
        self.model.modal_open = true;
    }

    fn hide_modal(&mut self) {
        // detail stays so the closing modal keeps its content
        self.model.modal_open = false;
    }

    fn set_chart_tab(&mut self, mode: ChartMode) {
        self.model.chart_tab = mode;
    }
}
