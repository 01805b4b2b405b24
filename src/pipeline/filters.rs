//! Chart-level filters. Both keep or drop whole charts and never touch the claims they keep.

use tracing::{debug, instrument};

use crate::types::{total_paid, ChartMap};

/// Keep only charts with more than one claim; a lone claim cannot be a duplicate
#[instrument(skip(charts), fields(charts_in = charts.len()))]
pub fn remove_single_claim_charts(charts: &ChartMap) -> ChartMap {
    let kept: ChartMap = charts
        .iter()
        .filter(|(_, claims)| claims.len() > 1)
        .map(|(chart, claims)| (chart.clone(), claims.clone()))
        .collect();

    debug!("Kept {} of {} charts with multiple claims", kept.len(), charts.len());
    kept
}

/// Keep only charts whose insurance payments sum to more than zero
#[instrument(skip(charts), fields(charts_in = charts.len()))]
pub fn remove_zero_sum_charts(charts: &ChartMap) -> ChartMap {
    let kept: ChartMap = charts
        .iter()
        .filter(|(_, claims)| total_paid(claims) > 0)
        .map(|(chart, claims)| (chart.clone(), claims.clone()))
        .collect();

    debug!("Kept {} of {} charts with a positive total", kept.len(), charts.len());
    kept
}
