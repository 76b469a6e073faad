//! Fixtures and recording doubles shared by the domain tests.

use crate::chart::{ChartBackend, ChartHandle};
use crate::error::ChartError;
use crate::view::DashboardView;
use shared::{
    ChartMode, ChartSpec, Company, CompanyDetail, PaginationInfo, SortState, StatCard, TableRow,
};
use std::cell::RefCell;
use std::rc::Rc;

pub fn company(name: &str, revenue: [Option<f64>; 3], profit: [Option<f64>; 3]) -> Company {
    Company {
        name: name.to_string(),
        revenue,
        profit,
    }
}

pub fn company_with_profits(name: &str, profit: [Option<f64>; 3]) -> Company {
    company(name, [None; 3], profit)
}

/// "Company 1" .. "Company n"; revenue and profit grow with the number
pub fn numbered_companies(n: usize) -> Vec<Company> {
    (1..=n)
        .map(|i| {
            let value = i as f64 * 100.0;
            company(
                &format!("Company {}", i),
                [Some(value), Some(value), Some(value)],
                [Some(i as f64), Some(i as f64), Some(i as f64)],
            )
        })
        .collect()
}

/// Keeps the last value written to each region
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordingView {
    pub rows: Vec<TableRow>,
    pub pagination: PaginationInfo,
    pub sort: Option<SortState>,
    pub stats: Vec<StatCard>,
    pub detail: Option<CompanyDetail>,
    pub modal_visible: bool,
    pub chart_tab: Option<ChartMode>,
    pub table_renders: usize,
}

impl DashboardView for RecordingView {
    fn set_rows(&mut self, rows: Vec<TableRow>) {
        self.rows = rows;
        self.table_renders += 1;
    }

    fn set_pagination(&mut self, pagination: PaginationInfo) {
        self.pagination = pagination;
    }

    fn set_sort_indicator(&mut self, sort: SortState) {
        self.sort = Some(sort);
    }

    fn set_stats(&mut self, cards: Vec<StatCard>) {
        self.stats = cards;
    }

    fn show_modal(&mut self, detail: CompanyDetail) {
        self.detail = Some(detail);
        self.modal_visible = true;
    }

    fn hide_modal(&mut self) {
        self.modal_visible = false;
    }

    fn set_chart_tab(&mut self, mode: ChartMode) {
        self.chart_tab = Some(mode);
    }
}

#[derive(Debug, Default)]
struct ChartLog {
    created: usize,
    destroyed: usize,
    live: usize,
    max_live: usize,
    fail_next: bool,
    last_spec: Option<ChartSpec>,
}

/// Counts chart lifecycles; clones share the same counters
#[derive(Debug, Clone, Default)]
pub struct RecordingChartBackend {
    log: Rc<RefCell<ChartLog>>,
}

impl RecordingChartBackend {
    pub fn created(&self) -> usize {
        self.log.borrow().created
    }

    pub fn destroyed(&self) -> usize {
        self.log.borrow().destroyed
    }

    pub fn live(&self) -> usize {
        self.log.borrow().live
    }

    pub fn max_live(&self) -> usize {
        self.log.borrow().max_live
    }

    pub fn last_spec(&self) -> Option<ChartSpec> {
        self.log.borrow().last_spec.clone()
    }

    /// Makes the next `create` call fail
    pub fn fail_next(&self) {
        self.log.borrow_mut().fail_next = true;
    }
}

pub struct RecordedChart {
    log: Rc<RefCell<ChartLog>>,
}

impl ChartHandle for RecordedChart {
    fn destroy(self) {
        let mut log = self.log.borrow_mut();
        log.destroyed += 1;
        log.live -= 1;
    }
}

impl ChartBackend for RecordingChartBackend {
    type Handle = RecordedChart;

    fn create(&mut self, spec: &ChartSpec) -> Result<Self::Handle, ChartError> {
        let mut log = self.log.borrow_mut();
        if log.fail_next {
            log.fail_next = false;
            return Err(ChartError::Backend("canvas unavailable".to_string()));
        }
        log.created += 1;
        log.live += 1;
        log.max_live = log.max_live.max(log.live);
        log.last_spec = Some(spec.clone());
        Ok(RecordedChart {
            log: Rc::clone(&self.log),
        })
    }
}
