//! Ingestion of the static company dataset.
//!
//! Raw records are normalized once here; the rest of the crate only sees
//! `Company` values whose figures are `Option<f64>`.

use crate::error::DashboardError;
use crate::formatting::parse_number;
use log::{debug, info};
use shared::{Company, RawCompany};

/// Normalizes one raw record
pub fn normalize_company(raw: &RawCompany) -> Company {
    Company {
        name: raw.name.clone(),
        revenue: [
            parse_number(&raw.rev22),
            parse_number(&raw.rev23),
            parse_number(&raw.rev24),
        ],
        profit: [
            parse_number(&raw.profit22),
            parse_number(&raw.profit23),
            parse_number(&raw.profit24),
        ],
    }
}

pub fn normalize_companies(raw: &[RawCompany]) -> Vec<Company> {
    raw.iter().map(normalize_company).collect()
}

/// Decodes a JSON array of raw company records and normalizes it
pub fn load_companies(json: &str) -> Result<Vec<Company>, DashboardError> {
    let raw: Vec<RawCompany> = serde_json::from_str(json).map_err(DashboardError::Dataset)?;
    let companies = normalize_companies(&raw);

    let incomplete = companies
        .iter()
        .filter(|c| c.revenue.iter().chain(c.profit.iter()).any(Option::is_none))
        .count();
    info!("Loaded {} companies", companies.len());
    debug!("{} companies have at least one absent figure", incomplete);

    Ok(companies)
}

/// First company whose name matches exactly
pub fn find_company<'a>(companies: &'a [Company], name: &str) -> Option<&'a Company> {
    companies.iter().find(|company| company.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"name": "삼성전자", "rev22": "3,022,314", "profit22": "433,766",
         "rev23": "2,589,355", "profit23": "65,670", "rev24": 3008709, "profit24": "327,260"},
        {"name": "Acme", "rev22": "", "profit22": null, "rev23": "-", "profit23": "12", "profit24": "-5"}
    ]"#;

    #[test]
    fn test_load_and_normalize() {
        let companies = load_companies(SAMPLE).unwrap();
        assert_eq!(companies.len(), 2);

        let samsung = &companies[0];
        assert_eq!(samsung.revenue, [Some(3_022_314.0), Some(2_589_355.0), Some(3_008_709.0)]);
        assert_eq!(samsung.profit[2], Some(327_260.0));

        let acme = &companies[1];
        assert_eq!(acme.revenue, [None, None, None]);
        assert_eq!(acme.profit, [None, Some(12.0), Some(-5.0)]);
    }

    #[test]
    fn test_invalid_dataset() {
        assert!(matches!(load_companies("{}"), Err(DashboardError::Dataset(_))));
        assert!(matches!(
            load_companies(r#"[{"rev22": 1}]"#),
            Err(DashboardError::Dataset(_))
        ));
    }

    #[test]
    fn test_unexpected_value_types_are_absent() {
        let companies = load_companies(
            r#"[{"name": "Acme", "rev23": [1, 2], "rev24": 100, "profit23": {"v": 1}, "profit24": true}]"#,
        )
        .unwrap();

        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0].revenue, [None, None, Some(100.0)]);
        assert_eq!(companies[0].profit, [None, None, None]);
    }

    #[test]
    fn test_find_company_exact_match() {
        let companies = load_companies(SAMPLE).unwrap();
        assert_eq!(find_company(&companies, "Acme").map(|c| c.name.as_str()), Some("Acme"));
        assert!(find_company(&companies, "acme").is_none());
        assert!(find_company(&companies, "Nope").is_none());
    }

    #[test]
    fn test_duplicate_names_resolve_to_first() {
        let companies = load_companies(
            r#"[{"name": "Dup", "rev24": 1}, {"name": "Dup", "rev24": 2}]"#,
        )
        .unwrap();
        assert_eq!(find_company(&companies, "Dup").unwrap().revenue[2], Some(1.0));
    }
}
