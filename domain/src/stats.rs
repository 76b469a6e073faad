//! Summary statistics over the full dataset.
//!
//! Filters never apply here: the cards always describe every company.

use crate::config::DashboardConfig;
use crate::formatting::round_to;
use shared::{Company, FiscalYear, StatCard, StatChange, StatTone};

/// Aggregates behind the stats cards
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub total: usize,
    /// Latest profit present and above zero
    pub profitable: usize,
    /// Latest profit present and below zero
    pub loss_making: usize,
    pub latest_revenue: f64,
    pub prior_revenue: f64,
    /// Revenue change in percent, one decimal; 0 when the prior total is not positive
    pub revenue_change_pct: f64,
}

impl StatsSummary {
    pub fn compute(companies: &[Company]) -> Self {
        let latest_profits = companies.iter().map(|c| c.profit(FiscalYear::LATEST));
        let profitable = latest_profits.clone().filter(|p| p.is_some_and(|v| v > 0.0)).count();
        let loss_making = latest_profits.filter(|p| p.is_some_and(|v| v < 0.0)).count();

        let revenue_total = |year: FiscalYear| -> f64 {
            companies.iter().map(|c| c.revenue(year).unwrap_or(0.0)).sum()
        };
        let latest_revenue = revenue_total(FiscalYear::LATEST);
        let prior_revenue = revenue_total(FiscalYear::PRIOR);

        let revenue_change_pct = if prior_revenue > 0.0 {
            round_to((latest_revenue - prior_revenue) / prior_revenue * 100.0, 1)
        } else {
            0.0
        };

        Self {
            total: companies.len(),
            profitable,
            loss_making,
            latest_revenue,
            prior_revenue,
            revenue_change_pct,
        }
    }

    /// Share of `count` in the total, in percent; 0 for an empty dataset
    pub fn share_pct(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64 * 100.0
        }
    }
}

/// Builds the stats cards from a summary
#[derive(Debug, Clone)]
pub struct StatsService {
    revenue_divisor: f64,
    revenue_unit: String,
}

impl StatsService {
    pub fn new() -> Self {
        Self::with_config(&DashboardConfig::default())
    }

    pub fn with_config(config: &DashboardConfig) -> Self {
        Self {
            revenue_divisor: config.revenue_display_divisor,
            revenue_unit: config.revenue_display_unit.clone(),
        }
    }

    pub fn cards(&self, summary: &StatsSummary) -> Vec<StatCard> {
        let year = FiscalYear::LATEST.code();
        let change_pct = summary.revenue_change_pct;
        let (sign, tone) = if change_pct >= 0.0 {
            ("+", StatTone::Positive)
        } else {
            ("", StatTone::Negative)
        };

        vec![
            StatCard {
                title: "총 기업 수".to_string(),
                value: format!("{}개", summary.total),
                change: None,
            },
            StatCard {
                title: format!("흑자 기업 ({}년)", year),
                value: format!("{}개", summary.profitable),
                change: Some(StatChange {
                    text: format!("{:.1}%", round_to(summary.share_pct(summary.profitable), 1)),
                    tone: StatTone::Positive,
                }),
            },
            StatCard {
                title: format!("적자 기업 ({}년)", year),
                value: format!("{}개", summary.loss_making),
                change: Some(StatChange {
                    text: format!("{:.1}%", round_to(summary.share_pct(summary.loss_making), 1)),
                    tone: StatTone::Negative,
                }),
            },
            StatCard {
                title: format!("총 매출 ({}년)", year),
                value: format!(
                    "{:.0}{}",
                    round_to(summary.latest_revenue / self.revenue_divisor, 0),
                    self.revenue_unit
                ),
                change: Some(StatChange {
                    text: format!("{}{:.1}% YoY", sign, change_pct),
                    tone,
                }),
            },
        ]
    }
}

impl Default for StatsService {
    fn default() -> Self {
        Self::new()
    }
}
