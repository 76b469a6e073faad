//! Dashboard configuration.
//!
//! Every field has a default so a partial JSON document (or none at all)
//! yields a working dashboard.

use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use shared::{FiscalYear, PageSize, SortState};

/// Configuration for the dashboard views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub default_page_size: PageSize,
    /// Options offered by the page-size select, in display order
    pub page_size_options: Vec<PageSize>,
    pub default_sort: SortState,
    /// Year driving the profit/loss filter at start-up
    pub default_active_year: FiscalYear,
    /// Divides total revenue for the stats card (억원 -> 조원)
    pub revenue_display_divisor: f64,
    pub revenue_display_unit: String,
    /// Suffix appended to single figures in the detail modal
    pub amount_unit: String,
    pub debug_logging: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_page_size: PageSize::Limited(20),
            page_size_options: vec![
                PageSize::Limited(10),
                PageSize::Limited(20),
                PageSize::Limited(50),
                PageSize::Limited(100),
                PageSize::All,
            ],
            default_sort: SortState::default(),
            default_active_year: FiscalYear::LATEST,
            revenue_display_divisor: 10_000.0,
            revenue_display_unit: "조원".to_string(),
            amount_unit: "억".to_string(),
            debug_logging: false,
        }
    }
}

impl DashboardConfig {
    /// Decode and validate a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self, DashboardError> {
        let config: DashboardConfig = serde_json::from_str(json).map_err(DashboardError::Config)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.page_size_options.is_empty() {
            return Err(DashboardError::InvalidConfig(
                "page_size_options must not be empty".to_string(),
            ));
        }
        let all_sizes = self
            .page_size_options
            .iter()
            .chain(std::iter::once(&self.default_page_size));
        for size in all_sizes {
            if *size == PageSize::Limited(0) {
                return Err(DashboardError::InvalidConfig(
                    "page sizes must be greater than zero".to_string(),
                ));
            }
        }
        if !self.page_size_options.contains(&self.default_page_size) {
            return Err(DashboardError::InvalidConfig(format!(
                "default_page_size {} is not one of page_size_options",
                self.default_page_size
            )));
        }
        if !self.revenue_display_divisor.is_finite() || self.revenue_display_divisor <= 0.0 {
            return Err(DashboardError::InvalidConfig(format!(
                "revenue_display_divisor must be positive, got {}",
                self.revenue_display_divisor
            )));
        }
        Ok(())
    }
}
