use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::parser::date::format_service_date;

/// One source row, fields in their original column order
pub type RawRow = Vec<String>;

/// Claims grouped by chart number.
///
/// A `BTreeMap` so every stage and every report walks charts in ascending chart-number order.
pub type ChartMap = BTreeMap<String, Vec<Claim>>;

/// A monetary amount in minor currency units together with its display text.
///
/// The sign of the source text is discarded: "-50.00" and "50.00" both become 5000 cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Amount {
    pub cents: i64,
    pub display: String,
}

impl Amount {
    pub fn new(cents: i64, display: impl Into<String>) -> Self {
        Self {
            cents,
            display: display.into(),
        }
    }
}

/// A single insurance claim line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Claim {
    pub chart_number: String,
    pub case_number: String,
    pub claim_no: String,
    pub date_of_service: NaiveDate,
    pub insurance_paid: Amount,
    pub insurance_name: String,
    pub adjustment_amount: Amount,
    pub facility: String,
    pub sheet: String,
    /// Set only by the duplicate marker
    pub duplicate: bool,
}

impl Claim {
    /// Date of service in its canonical `MM/DD/YYYY` form, also used as the same-day grouping key
    pub fn date_of_service_display(&self) -> String {
        format_service_date(self.date_of_service)
    }
}

/// Total number of claims across all charts
pub fn claim_count(charts: &ChartMap) -> usize {
    charts.values().map(Vec::len).sum()
}

/// Number of claims flagged as duplicate across all charts
pub fn duplicate_count(charts: &ChartMap) -> usize {
    charts
        .values()
        .flat_map(|claims| claims.iter())
        .filter(|claim| claim.duplicate)
        .count()
}

/// Sum of insurance payments over a chart's claims, in minor units
pub fn total_paid(claims: &[Claim]) -> i64 {
    claims.iter().map(|claim| claim.insurance_paid.cents).sum()
}
