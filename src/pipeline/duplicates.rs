//! Duplicate payment marking.
//!
//! Within a chart, claims sharing a date of service compete for a single legitimate payment.
//! The highest-paid claim of each date is kept as is; every other claim on that date is
//! flagged as a duplicate.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::types::{ChartMap, Claim};

/// Mark duplicate payments in every chart.
///
/// Date groups are keyed by the canonical date string and emitted in order of first appearance,
/// which is ascending date for parser output. Inside a group claims are ordered by descending
/// payment, ties keeping their incoming order.
#[instrument(skip(charts), fields(charts = charts.len()))]
pub fn mark_duplicate_payments(charts: &ChartMap) -> ChartMap {
    charts
        .iter()
        .map(|(chart, claims)| (chart.clone(), mark_chart(claims)))
        .collect()
}

/// Mark duplicates within a single chart's claim list
pub fn mark_chart(claims: &[Claim]) -> Vec<Claim> {
    let mut groups: Vec<Vec<Claim>> = Vec::new();
    let mut group_index: HashMap<String, usize> = HashMap::new();

    for claim in claims {
        let index = *group_index
            .entry(claim.date_of_service_display())
            .or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
        groups[index].push(claim.clone());
    }

    let mut marked = Vec::with_capacity(claims.len());
    for mut group in groups {
        // Stable, so equal payments keep their relative order
        group.sort_by(|a, b| b.insurance_paid.cents.cmp(&a.insurance_paid.cents));
        for (position, mut claim) in group.into_iter().enumerate() {
            claim.duplicate = position > 0;
            marked.push(claim);
        }
    }

    let duplicates = marked.iter().filter(|c| c.duplicate).count();
    if duplicates > 0 {
        debug!("Marked {} of {} claims as duplicate", duplicates, marked.len());
    }
    marked
}
