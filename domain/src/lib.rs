//! # Dashboard Domain
//!
//! Everything the financial dashboard decides, independent of how it is drawn:
//! - Normalizes the raw dataset into `Company` records at load time
//! - Runs search, profit/loss filtering and sorting over the full dataset
//! - Slices the result into pages and formats table rows
//! - Computes the stats cards and the detail modal content
//! - Describes charts and owns the single live chart instance
//!
//! The `Dashboard` controller ties these together and writes to any
//! `DashboardView`; a `ChartBackend` does the actual drawing.

pub mod chart;
pub mod collation;
pub mod config;
pub mod controller;
pub mod dataset;
pub mod detail;
pub mod error;
pub mod formatting;
pub mod pagination;
pub mod query;
pub mod stats;
pub mod table;
pub mod trend;
pub mod view;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types
pub use chart::{build_chart_spec, ChartBackend, ChartHandle, ChartSlot};
pub use config::DashboardConfig;
pub use controller::{Dashboard, DashboardAction, ModalState, ViewState};
pub use dataset::load_companies;
pub use error::{ChartError, DashboardError};
pub use query::QueryState;
pub use stats::{StatsService, StatsSummary};
pub use view::DashboardView;
