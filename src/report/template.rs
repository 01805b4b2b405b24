use askama::Template;

use crate::types::{ChartMap, Claim};

/// The single report layout shared by every stage
#[derive(Template)]
#[template(path = "report.html")]
pub struct ReportTemplate<'a> {
    pub title: &'a str,
    pub stage_title: &'a str,
    pub sections: Vec<ChartSection<'a>>,
}

/// One chart and its claims, in list order
pub struct ChartSection<'a> {
    pub chart_number: &'a str,
    pub rows: Vec<ClaimRow<'a>>,
}

pub struct ClaimRow<'a> {
    pub date_of_service: String,
    pub case_number: &'a str,
    pub claim_no: &'a str,
    pub insurance_name: &'a str,
    pub insurance_paid: &'a str,
    pub adjustment_amount: &'a str,
    pub sheet: &'a str,
    pub duplicate: bool,
}

impl<'a> From<&'a Claim> for ClaimRow<'a> {
    fn from(claim: &'a Claim) -> Self {
        Self {
            date_of_service: claim.date_of_service_display(),
            case_number: &claim.case_number,
            claim_no: &claim.claim_no,
            insurance_name: &claim.insurance_name,
            insurance_paid: &claim.insurance_paid.display,
            adjustment_amount: &claim.adjustment_amount.display,
            sheet: &claim.sheet,
            duplicate: claim.duplicate,
        }
    }
}

pub fn sections(charts: &ChartMap) -> Vec<ChartSection<'_>> {
    charts
        .iter()
        .map(|(chart, claims)| ChartSection {
            chart_number: chart,
            rows: claims.iter().map(ClaimRow::from).collect(),
        })
        .collect()
}
