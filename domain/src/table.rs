//! Table rendering logic: rows for the visible page and pagination controls.
//!
//! This module turns query results into display-ready `TableRow`s and
//! `PaginationInfo`. It holds no state; the controller decides which page
//! is visible and hands the slice in.

use crate::formatting::format_cell;
use crate::pagination::PageWindow;
use crate::trend::classify_trend;
use shared::{Company, FiscalYear, PaginationInfo, TableRow};

/// Formats one company as a table row
pub fn build_row(company: &Company) -> TableRow {
    let cells = FiscalYear::ALL
        .iter()
        .flat_map(|&year| [company.revenue(year), company.profit(year)])
        .map(format_cell)
        .collect();

    TableRow {
        name: company.name.clone(),
        cells,
        trend: classify_trend(company),
    }
}

/// Formats the companies of the visible page
pub fn build_rows(page: &[&Company]) -> Vec<TableRow> {
    page.iter().map(|company| build_row(company)).collect()
}

/// Pager state and summary text ("2 / 3 (총 45개)")
pub fn pagination_info(window: &PageWindow) -> PaginationInfo {
    let total_pages = window.display_total_pages();
    PaginationInfo {
        current_page: window.page,
        total_pages,
        total_items: window.total_items,
        summary: format!("{} / {} (총 {}개)", window.page, total_pages, window.total_items),
        has_previous: window.has_previous(),
        has_next: window.has_next(),
    }
}
