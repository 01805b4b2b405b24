//! Record parser: turns raw export rows into claims grouped by chart.

pub mod date;
pub mod money;

use tracing::{debug, instrument};

use crate::constants::{
    ADJUSTMENT_AMOUNT_FIELD, CASE_NUMBER_FIELD, CHART_NUMBER_FIELD, CLAIM_NO_FIELD,
    DATE_OF_SERVICE_FIELD, FACILITY_FIELD, INSURANCE_NAME_FIELD, INSURANCE_PAID_FIELD,
    REQUIRED_FIELDS, SHEET_FIELD,
};
use crate::error::{ReconError, Result};
use crate::types::{Amount, ChartMap, Claim};

/// Build a single claim from a row. `row_number` is 1-based and only used in errors.
pub fn parse_claim<S: AsRef<str>>(row_number: usize, fields: &[S]) -> Result<Claim> {
    if fields.len() < REQUIRED_FIELDS {
        return Err(ReconError::MalformedRow {
            row: row_number,
            found: fields.len(),
            required: REQUIRED_FIELDS,
        });
    }
    let field = |index: usize| fields[index].as_ref();

    let chart_number = field(CHART_NUMBER_FIELD);
    if chart_number.is_empty() {
        return Err(ReconError::EmptyChartNumber { row: row_number });
    }

    let raw_date = field(DATE_OF_SERVICE_FIELD);
    let date_of_service =
        date::parse_service_date(raw_date).map_err(|source| ReconError::InvalidDate {
            row: row_number,
            value: raw_date.to_string(),
            source,
        })?;

    Ok(Claim {
        chart_number: chart_number.to_string(),
        case_number: field(CASE_NUMBER_FIELD).to_string(),
        claim_no: field(CLAIM_NO_FIELD).to_string(),
        date_of_service,
        insurance_paid: amount_field(row_number, "insurance paid", field(INSURANCE_PAID_FIELD))?,
        insurance_name: field(INSURANCE_NAME_FIELD).to_string(),
        adjustment_amount: amount_field(row_number, "adjustment", field(ADJUSTMENT_AMOUNT_FIELD))?,
        facility: field(FACILITY_FIELD).to_string(),
        sheet: field(SHEET_FIELD).to_string(),
        duplicate: false,
    })
}

fn amount_field(row: usize, field: &'static str, value: &str) -> Result<Amount> {
    money::parse_amount(value).map_err(|reason| ReconError::InvalidAmount {
        row,
        field,
        value: value.to_string(),
        reason,
    })
}

/// Parse every row and group the claims by chart number.
///
/// Each chart's list stays sorted ascending by date of service; claims on the same date keep
/// their row order. The first failing row aborts the whole parse.
#[instrument(skip(rows), fields(rows = rows.len()))]
pub fn parse_records<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<ChartMap> {
    let mut charts = ChartMap::new();

    for (index, row) in rows.iter().enumerate() {
        let claim = parse_claim(index + 1, row)?;
        let claims = charts.entry(claim.chart_number.clone()).or_default();

        // Insert after every claim on or before this date, which is what a stable re-sort gives
        let position = claims.partition_point(|c| c.date_of_service <= claim.date_of_service);
        claims.insert(position, claim);
    }

    debug!("Parsed {} rows into {} charts", rows.len(), charts.len());
    Ok(charts)
}
