//! Shelf-life resolution: catalog row to concrete expiration date.

use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogRow;

/// Which storage-condition field pair a shelf life came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShelfLifeSource {
    Refrigerate,
    DopRefrigerate,
    AfterOpening,
}

impl ShelfLifeSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShelfLifeSource::Refrigerate => "refrigerate",
            ShelfLifeSource::DopRefrigerate => "dop_refrigerate",
            ShelfLifeSource::AfterOpening => "after_opening",
        }
    }
}

/// A resolved shelf life, still in the dataset's own unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfLifeInfo {
    /// Duration count as stored in the dataset (e.g. `3` for "3 Weeks").
    pub value: f64,
    /// Unit metric text, absent when the dataset row carries none.
    pub metric: Option<String>,
    pub source: ShelfLifeSource,
}

/// Resolve the first populated shelf-life field pair, in fixed priority
/// order: plain refrigeration, then date-of-purchase refrigeration, then
/// after-opening. `None` when no value field is present.
pub fn resolve(row: &CatalogRow) -> Option<ShelfLifeInfo> {
    let pairs = [
        (
            row.refrigerate_max,
            &row.refrigerate_metric,
            ShelfLifeSource::Refrigerate,
        ),
        (
            row.dop_refrigerate_max,
            &row.dop_refrigerate_metric,
            ShelfLifeSource::DopRefrigerate,
        ),
        (
            row.refrigerate_after_opening_max,
            &row.refrigerate_after_opening_metric,
            ShelfLifeSource::AfterOpening,
        ),
    ];

    pairs.into_iter().find_map(|(value, metric, source)| {
        value.map(|value| ShelfLifeInfo {
            value,
            metric: metric.clone(),
            source,
        })
    })
}

/// Convert a duration count to days using its metric text.
///
/// The metric is matched by case-insensitive substring; unknown metric
/// text is treated as already being days.
pub fn to_days(value: f64, metric: &str) -> f64 {
    let metric = metric.to_lowercase();
    if metric.contains("day") {
        value
    } else if metric.contains("week") {
        value * 7.0
    } else if metric.contains("month") {
        value * 30.0
    } else if metric.contains("year") {
        value * 365.0
    } else {
        value
    }
}

/// Expiration date for a catalog row, relative to `today`.
///
/// `None` when the row has no populated value field or no metric text.
/// Callers building inventory records must substitute their fallback
/// offset so finished items always carry a concrete date.
pub fn expiration_date(row: &CatalogRow, today: NaiveDate) -> Option<NaiveDate> {
    let info = resolve(row)?;
    let metric = info.metric.as_deref()?;
    let days = to_days(info.value, metric);
    if days < 0.0 {
        return None;
    }
    today.checked_add_signed(TimeDelta::days(days.round() as i64))
}
