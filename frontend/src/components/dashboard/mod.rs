pub mod company_modal;
pub mod company_table;
pub mod filter_bar;
pub mod pagination;
pub mod stats_grid;

pub use company_modal::CompanyModal;
pub use company_table::CompanyTable;
pub use filter_bar::FilterBar;
pub use pagination::Pagination;
pub use stats_grid::StatsGrid;
