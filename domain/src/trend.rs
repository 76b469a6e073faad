//! Profit trend classification.

use shared::{Company, FiscalYear, Trend};

/// Compares the latest profit against the prior year's.
///
/// Either value being absent yields `Flat`; absence is not reported separately.
pub fn classify_trend(company: &Company) -> Trend {
    let latest = company.profit(FiscalYear::LATEST);
    let prior = company.profit(FiscalYear::PRIOR);
    match (latest, prior) {
        (Some(latest), Some(prior)) if latest > prior => Trend::Up,
        (Some(latest), Some(prior)) if latest < prior => Trend::Down,
        _ => Trend::Flat,
    }
}

/// Sort rank: up > flat > down
pub fn trend_rank(trend: Trend) -> u8 {
    match trend {
        Trend::Up => 3,
        Trend::Flat => 2,
        Trend::Down => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::company_with_profits;

    #[test]
    fn test_trend_up_and_down() {
        assert_eq!(classify_trend(&company_with_profits("A", [None, Some(1.0), Some(2.0)])), Trend::Up);
        assert_eq!(classify_trend(&company_with_profits("B", [None, Some(2.0), Some(-1.0)])), Trend::Down);
        assert_eq!(classify_trend(&company_with_profits("C", [None, Some(3.0), Some(3.0)])), Trend::Flat);
    }

    #[test]
    fn test_absent_profit_is_flat() {
        assert_eq!(classify_trend(&company_with_profits("A", [Some(1.0), None, Some(5.0)])), Trend::Flat);
        assert_eq!(classify_trend(&company_with_profits("B", [Some(1.0), Some(5.0), None])), Trend::Flat);
        assert_eq!(classify_trend(&company_with_profits("C", [None, None, None])), Trend::Flat);
    }

    #[test]
    fn test_oldest_year_is_ignored() {
        let company = company_with_profits("A", [Some(-100.0), Some(10.0), Some(10.0)]);
        assert_eq!(classify_trend(&company), Trend::Flat);
    }

    #[test]
    fn test_trend_rank_order() {
        assert!(trend_rank(Trend::Up) > trend_rank(Trend::Flat));
        assert!(trend_rank(Trend::Flat) > trend_rank(Trend::Down));
    }
}
