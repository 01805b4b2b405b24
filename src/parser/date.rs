//! Date-of-service parsing and canonical formatting.

use chrono::NaiveDate;
use thiserror::Error;

use crate::constants::{DISPLAY_DATE_FORMAT, SOURCE_DATE_FORMAT};

#[derive(Error, Debug)]
pub enum DateError {
    #[error("expected M/D/YYYY with a 4-digit year")]
    Layout,

    #[error(transparent)]
    Calendar(#[from] chrono::ParseError),
}

/// Parse a `M/D/YYYY` date; month and day may or may not be zero-padded, the year is 4 digits
pub fn parse_service_date(text: &str) -> Result<NaiveDate, DateError> {
    // chrono's %Y takes any width and a sign, so the layout is checked here
    let parts: Vec<&str> = text.split('/').collect();
    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };
    match parts.as_slice() {
        [month, day, year] if digits(*month, 1, 2) && digits(*day, 1, 2) && digits(*year, 4, 4) => {}
        _ => return Err(DateError::Layout),
    }

    Ok(NaiveDate::parse_from_str(text, SOURCE_DATE_FORMAT)?)
}

/// Render a date as `MM/DD/YYYY`
pub fn format_service_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}
