//! Reads the inputs embedded in the host page.

use crate::services::logging::Logger;
use anyhow::{anyhow, Context, Result};
use domain::{load_companies, DashboardConfig};
use shared::Company;

pub const DATASET_ELEMENT_ID: &str = "financial-data";
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Text content of a `<script>` (or any) element, if present
pub fn element_text(id: &str) -> Option<String> {
    gloo::utils::document()
        .get_element_by_id(id)
        .and_then(|element| element.text_content())
}

/// The dataset is required; a missing config element means defaults
pub fn load_inputs() -> Result<(Vec<Company>, DashboardConfig)> {
    let dataset = element_text(DATASET_ELEMENT_ID)
        .ok_or_else(|| anyhow!("No #{} element in the page", DATASET_ELEMENT_ID))?;

    let config = match element_text(CONFIG_ELEMENT_ID) {
        Some(text) if !text.trim().is_empty() => parse_config(&text)?,
        _ => {
            Logger::debug_with_component("PageData", "No dashboard config in the page, using defaults");
            DashboardConfig::default()
        }
    };

    let companies = load_companies(&dataset).context("Failed to load the company dataset")?;
    Ok((companies, config))
}

pub fn parse_config(text: &str) -> Result<DashboardConfig> {
    let config = DashboardConfig::from_json(text).context("Failed to load the dashboard config")?;
    Ok(config)
}
