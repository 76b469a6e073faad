//! Query engine: search, profit/loss filter and sort over the full dataset.
//!
//! The query is recomputed from the untouched dataset on every render and
//! returns references into it; nothing is cached or mutated.

use crate::collation::compare_korean;
use crate::trend::{classify_trend, trend_rank};
use serde::{Deserialize, Serialize};
use shared::{Company, FiscalYear, ProfitFilter, SortColumn, SortDirection, SortState};
use std::cmp::Ordering;

/// Filter and sort parameters of the table view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryState {
    /// Case-insensitive substring matched against company names
    pub search: String,
    pub profit_filter: ProfitFilter,
    /// Year whose profit drives `profit_filter`
    pub active_year: FiscalYear,
    pub sort: SortState,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            profit_filter: ProfitFilter::All,
            active_year: FiscalYear::LATEST,
            sort: SortState::default(),
        }
    }
}

/// Filters and orders the dataset
pub fn run_query<'a>(companies: &'a [Company], query: &QueryState) -> Vec<&'a Company> {
    let needle = query.search.to_lowercase();
    let mut filtered: Vec<&Company> = companies
        .iter()
        .filter(|company| matches_search(company, &needle))
        .filter(|company| matches_profit_filter(company, query.profit_filter, query.active_year))
        .collect();

    // stable: equal keys keep dataset order
    filtered.sort_by(|a, b| compare_companies(a, b, query.sort));
    filtered
}

/// `needle` must already be lowercased; empty matches everything
fn matches_search(company: &Company, needle: &str) -> bool {
    needle.is_empty() || company.name.to_lowercase().contains(needle)
}

/// Absent profit never lands in the profit or loss bucket
pub fn matches_profit_filter(company: &Company, filter: ProfitFilter, year: FiscalYear) -> bool {
    let profit = company.profit(year);
    match filter {
        ProfitFilter::All => true,
        ProfitFilter::Profit => profit.is_some_and(|p| p > 0.0),
        ProfitFilter::Loss => profit.is_some_and(|p| p < 0.0),
    }
}

pub fn compare_companies(a: &Company, b: &Company, sort: SortState) -> Ordering {
    let ascending = match sort.column {
        SortColumn::Name => compare_korean(&a.name, &b.name),
        SortColumn::Trend => trend_rank(classify_trend(a)).cmp(&trend_rank(classify_trend(b))),
        column => {
            let left = sort_value(a, column);
            let right = sort_value(b, column);
            left.partial_cmp(&right).unwrap_or(Ordering::Equal)
        }
    };

    match sort.direction {
        SortDirection::Asc => ascending,
        SortDirection::Desc => ascending.reverse(),
    }
}

/// Numeric sort key; absent figures order as zero
fn sort_value(company: &Company, column: SortColumn) -> f64 {
    let value = match column {
        SortColumn::Revenue(year) => company.revenue(year),
        SortColumn::Profit(year) => company.profit(year),
        SortColumn::Name | SortColumn::Trend => None,
    };
    value.unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{company, company_with_profits};

    fn names(result: &[&Company]) -> Vec<String> {
        result.iter().map(|c| c.name.clone()).collect()
    }

    fn query(filter: ProfitFilter, sort: SortState) -> QueryState {
        QueryState {
            profit_filter: filter,
            sort,
            ..QueryState::default()
        }
    }

    fn sort(column: SortColumn, direction: SortDirection) -> SortState {
        SortState { column, direction }
    }

    #[test]
    fn test_profit_filter_buckets() {
        let companies = vec![
            company_with_profits("Acme", [None, None, Some(-5.0)]),
            company_with_profits("Beta", [None, None, Some(10.0)]),
            company_with_profits("Gamma", [None, None, None]),
            company_with_profits("Zero", [None, None, Some(0.0)]),
        ];
        let by_name = sort(SortColumn::Name, SortDirection::Asc);

        let profit = run_query(&companies, &query(ProfitFilter::Profit, by_name));
        assert_eq!(names(&profit), vec!["Beta"]);

        let loss = run_query(&companies, &query(ProfitFilter::Loss, by_name));
        assert_eq!(names(&loss), vec!["Acme"]);

        let all = run_query(&companies, &query(ProfitFilter::All, by_name));
        assert_eq!(names(&all), vec!["Acme", "Beta", "Gamma", "Zero"]);
    }

    #[test]
    fn test_profit_filter_uses_active_year() {
        let companies = vec![company_with_profits("Acme", [Some(7.0), None, Some(-5.0)])];
        let mut state = query(ProfitFilter::Profit, SortState::default());

        assert!(run_query(&companies, &state).is_empty());
        state.active_year = FiscalYear::Y2022;
        assert_eq!(run_query(&companies, &state).len(), 1);
        state.active_year = FiscalYear::Y2023;
        assert!(run_query(&companies, &state).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let companies = vec![
            company_with_profits("Acme", [None, None, None]),
            company_with_profits("Globex", [None, None, None]),
            company_with_profits("삼성전자", [None, None, None]),
        ];
        let mut state = QueryState::default();

        state.search = "ac".to_string();
        assert_eq!(names(&run_query(&companies, &state)), vec!["Acme"]);

        state.search = "LOB".to_string();
        assert_eq!(names(&run_query(&companies, &state)), vec!["Globex"]);

        state.search = "전자".to_string();
        assert_eq!(names(&run_query(&companies, &state)), vec!["삼성전자"]);

        state.search = String::new();
        assert_eq!(run_query(&companies, &state).len(), 3);
    }

    #[test]
    fn test_numeric_sort_treats_absent_as_zero() {
        let companies = vec![
            company("A", [None, None, Some(5.0)], [None; 3]),
            company("B", [None, None, None], [None; 3]),
            company("C", [None, None, Some(-3.0)], [None; 3]),
            company("D", [None, None, Some(100.0)], [None; 3]),
        ];
        let column = SortColumn::Revenue(FiscalYear::Y2024);

        let desc = run_query(&companies, &query(ProfitFilter::All, sort(column, SortDirection::Desc)));
        assert_eq!(names(&desc), vec!["D", "A", "B", "C"]);

        let asc = run_query(&companies, &query(ProfitFilter::All, sort(column, SortDirection::Asc)));
        assert_eq!(names(&asc), vec!["C", "B", "A", "D"]);

        // ordering treats the absent value as zero but the record keeps it absent
        assert_eq!(companies[1].revenue[2], None);
    }

    #[test]
    fn test_trend_sort() {
        let companies = vec![
            company_with_profits("Down", [None, Some(5.0), Some(1.0)]),
            company_with_profits("Up", [None, Some(1.0), Some(5.0)]),
            company_with_profits("Flat", [None, None, Some(5.0)]),
        ];

        let desc = run_query(
            &companies,
            &query(ProfitFilter::All, sort(SortColumn::Trend, SortDirection::Desc)),
        );
        assert_eq!(names(&desc), vec!["Up", "Flat", "Down"]);

        let asc = run_query(
            &companies,
            &query(ProfitFilter::All, sort(SortColumn::Trend, SortDirection::Asc)),
        );
        assert_eq!(names(&asc), vec!["Down", "Flat", "Up"]);
    }

    #[test]
    fn test_ties_keep_dataset_order() {
        let companies = vec![
            company("First", [None, None, Some(1.0)], [None; 3]),
            company("Second", [None, None, Some(1.0)], [None; 3]),
            company("Third", [None, None, Some(1.0)], [None; 3]),
        ];
        let state = query(
            ProfitFilter::All,
            sort(SortColumn::Revenue(FiscalYear::Y2024), SortDirection::Desc),
        );
        assert_eq!(names(&run_query(&companies, &state)), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_name_sort_uses_korean_collation() {
        let companies = vec![
            company_with_profits("SK하이닉스", [None; 3]),
            company_with_profits("기아", [None; 3]),
            company_with_profits("네이버", [None; 3]),
        ];
        let state = query(ProfitFilter::All, sort(SortColumn::Name, SortDirection::Asc));
        assert_eq!(names(&run_query(&companies, &state)), vec!["기아", "네이버", "SK하이닉스"]);
    }
}
