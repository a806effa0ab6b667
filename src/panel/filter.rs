use std::sync::Mutex;

use crate::error::PanelError;
use crate::model::month::MonthToken;
use crate::model::salary::SalaryStatus;
use crate::panel::PanelContext;
use crate::panel::loader::{Salaries, load};

/// Current month and status selection of the salaries view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalaryFilter {
    pub month: Option<MonthToken>,
    pub status: Option<SalaryStatus>,
}

impl SalaryFilter {
    /// Query pairs for the salary list; unset filters are left out.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(month) = self.month {
            query.push(("month", month.to_string()));
        }
        if let Some(status) = self.status {
            query.push(("status", status.to_string()));
        }
        query
    }
}

/// Parses a selector value; the empty option means "no filter".
pub fn parse_month(raw: &str) -> Result<Option<MonthToken>, PanelError> {
    match raw.trim() {
        "" => Ok(None),
        value => value
            .parse()
            .map(Some)
            .map_err(|e: crate::model::month::InvalidMonth| PanelError::Invalid(e.to_string())),
    }
}

pub fn parse_status(raw: &str) -> Result<Option<SalaryStatus>, PanelError> {
    match raw.trim() {
        "" => Ok(None),
        value => value
            .parse()
            .map(Some)
            .map_err(|_| PanelError::Invalid(format!("`{value}` is not a salary status"))),
    }
}

/// Owns the filter selection; every change reloads the salary table.
#[derive(Default)]
pub struct FilterController {
    filter: Mutex<SalaryFilter>,
}

impl FilterController {
    pub fn current(&self) -> SalaryFilter {
        self.filter.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
    }

    fn update(&self, change: impl FnOnce(&mut SalaryFilter)) -> SalaryFilter {
        let mut filter = self.filter.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        change(&mut filter);
        filter.clone()
    }

    pub async fn set_month(&self, ctx: &PanelContext, raw: &str) -> Result<usize, PanelError> {
        let month = parse_month(raw)?;
        let filter = self.update(|filter| filter.month = month);
        load::<Salaries>(ctx, &filter.query()).await
    }

    pub async fn set_status(&self, ctx: &PanelContext, raw: &str) -> Result<usize, PanelError> {
        let status = parse_status(raw)?;
        let filter = self.update(|filter| filter.status = status);
        load::<Salaries>(ctx, &filter.query()).await
    }

    /// Replaces the whole selection at once and loads it with a single request.
    pub async fn select(&self, ctx: &PanelContext, selection: SalaryFilter) -> Result<usize, PanelError> {
        let filter = self.update(|filter| *filter = selection);
        load::<Salaries>(ctx, &filter.query()).await
    }

    /// Loads with the current selection, unchanged.
    pub async fn reload(&self, ctx: &PanelContext) -> Result<usize, PanelError> {
        load::<Salaries>(ctx, &self.current().query()).await
    }
}
