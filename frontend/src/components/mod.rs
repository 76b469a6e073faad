pub mod dashboard;
pub mod header;
