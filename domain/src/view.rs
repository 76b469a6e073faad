//! Rendering seam between the controller and a UI.

use shared::{ChartMode, CompanyDetail, PaginationInfo, SortState, StatCard, TableRow};

/// Addressable regions the dashboard writes to.
///
/// Implementations only store or draw what they are given; all decisions
/// are made by the controller.
pub trait DashboardView {
    /// Replaces the table body with the rows of the visible page
    fn set_rows(&mut self, rows: Vec<TableRow>);

    fn set_pagination(&mut self, pagination: PaginationInfo);

    /// Marks the active sort column and direction on the headers
    fn set_sort_indicator(&mut self, sort: SortState);

    fn set_stats(&mut self, cards: Vec<StatCard>);

    fn show_modal(&mut self, detail: CompanyDetail);

    fn hide_modal(&mut self);

    /// Highlights the chart tab of the given mode
    fn set_chart_tab(&mut self, mode: ChartMode);
}
