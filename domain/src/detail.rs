//! Key figures shown in the company detail modal.

use crate::formatting::format_with_unit;
use crate::trend::classify_trend;
use shared::{Company, CompanyDetail, FiscalYear, ProfitStatus};

/// Profitability of the latest year; zero profit counts as profit here
pub fn profit_status(company: &Company) -> ProfitStatus {
    match company.profit(FiscalYear::LATEST) {
        None => ProfitStatus::Unknown,
        Some(profit) if profit >= 0.0 => ProfitStatus::Profit,
        Some(_) => ProfitStatus::Loss,
    }
}

pub fn build_detail(company: &Company, amount_unit: &str) -> CompanyDetail {
    let year = FiscalYear::LATEST;
    let profit = company.profit(year);

    CompanyDetail {
        name: company.name.clone(),
        revenue_label: format!("{}년 매출", year.code()),
        revenue_text: format_with_unit(company.revenue(year), amount_unit),
        profit_label: format!("{}년 영업이익", year.code()),
        profit_text: format_with_unit(profit, amount_unit),
        profit_negative: profit.is_some_and(|p| p < 0.0),
        status: profit_status(company),
        trend: classify_trend(company),
    }
}
