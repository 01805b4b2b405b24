//! Stage-level properties checked over a spread of generated claim exports.

use std::collections::HashMap;

use claim_recon::parser::parse_records;
use claim_recon::pipeline::{
    mark_duplicate_payments, remove_single_claim_charts, remove_zero_sum_charts, run_stages,
};
use claim_recon::types::total_paid;
use claim_recon::ChartMap;

fn row(chart: &str, claim_no: &str, date: &str, paid: &str) -> Vec<String> {
    let mut fields = vec![String::new(); 16];
    fields[0] = chart.to_string();
    fields[4] = "case".to_string();
    fields[5] = claim_no.to_string();
    fields[6] = date.to_string();
    fields[10] = paid.to_string();
    fields[11] = "Payer".to_string();
    fields[12] = "0.00".to_string();
    fields
}

/// Deterministic pseudo-random exports, varied enough to hit single, zero-sum and same-day charts
fn generated_rows(seed: u64, count: usize) -> Vec<Vec<String>> {
    let mut state = seed;
    let mut next = move |bound: u64| {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 33) % bound
    };

    (0..count)
        .map(|i| {
            let chart = format!("CH{}", next(7));
            let date = format!("{}/{}/2021", 1 + next(2), 1 + next(3));
            let cents = if next(3) == 0 { 0 } else { next(20_000) };
            let sign = if next(5) == 0 { "-" } else { "" };
            let paid = format!("{sign}{}.{:02}", cents / 100, cents % 100);
            row(&chart, &format!("claim-{i}"), &date, &paid)
        })
        .collect()
}

fn parsed(seed: u64) -> ChartMap {
    parse_records(&generated_rows(seed, 40)).expect("generated rows parse")
}

#[test]
fn test_single_claim_filter_is_idempotent() {
    for seed in 0..25 {
        let once = remove_single_claim_charts(&parsed(seed));
        assert_eq!(remove_single_claim_charts(&once), once, "seed {seed}");
    }
}

#[test]
fn test_filters_only_shrink() {
    for seed in 0..25 {
        let charts = parsed(seed);
        let multiple = remove_single_claim_charts(&charts);
        let nonzero = remove_zero_sum_charts(&multiple);

        assert!(multiple.len() <= charts.len());
        assert!(nonzero.len() <= multiple.len());
        assert!(multiple.keys().all(|k| charts.contains_key(k)));
        assert!(nonzero.keys().all(|k| multiple.contains_key(k)));
    }
}

#[test]
fn test_zero_sum_filter_splits_on_total() {
    for seed in 0..25 {
        let charts = parsed(seed);
        let kept = remove_zero_sum_charts(&charts);

        for (chart, claims) in &charts {
            if kept.contains_key(chart) {
                assert!(total_paid(claims) > 0);
            } else {
                assert!(total_paid(claims) <= 0);
            }
        }
    }
}

#[test]
fn test_one_undisputed_claim_per_service_date() {
    for seed in 0..25 {
        let marked = mark_duplicate_payments(&parsed(seed));

        for claims in marked.values() {
            let mut per_date: HashMap<String, (usize, usize)> = HashMap::new();
            for claim in claims {
                let entry = per_date.entry(claim.date_of_service_display()).or_default();
                entry.0 += 1;
                if claim.duplicate {
                    entry.1 += 1;
                }
            }
            for (date, (size, duplicates)) in per_date {
                assert_eq!(duplicates, size - 1, "seed {seed}, date {date}");
            }
        }
    }
}

#[test]
fn test_kept_claim_has_the_highest_payment() {
    for seed in 0..25 {
        let marked = mark_duplicate_payments(&parsed(seed));

        for claims in marked.values() {
            for kept in claims.iter().filter(|c| !c.duplicate) {
                let date = kept.date_of_service_display();
                assert!(claims
                    .iter()
                    .filter(|c| c.date_of_service_display() == date)
                    .all(|c| c.insurance_paid.cents <= kept.insurance_paid.cents));
            }
        }
    }
}

#[test]
fn test_marked_output_is_date_ordered() {
    for seed in 0..25 {
        let marked = mark_duplicate_payments(&parsed(seed));

        for claims in marked.values() {
            assert!(claims
                .windows(2)
                .all(|pair| pair[0].date_of_service <= pair[1].date_of_service));
        }
    }
}

#[test]
fn test_single_claim_charts_never_survive() {
    for seed in 0..25 {
        let rows = generated_rows(seed, 40);
        let outputs = run_stages(&rows).expect("pipeline runs");

        for (chart, claims) in &outputs.claims_by_chart {
            if claims.len() == 1 {
                assert!(!outputs.multiple_claim_charts.contains_key(chart));
                assert!(!outputs.nonzero_multiple_claim_charts.contains_key(chart));
                assert!(!outputs.marked_duplicates.contains_key(chart));
            }
        }
    }
}

#[test]
fn test_same_day_ties_scenario() {
    let rows = vec![
        row("T", "hundred", "6/1/2020", "1.00"),
        row("T", "three-a", "6/1/2020", "3.00"),
        row("T", "three-b", "6/1/2020", "3.00"),
    ];
    let outputs = run_stages(&rows).unwrap();

    let flags: Vec<(&str, bool)> = outputs.marked_duplicates["T"]
        .iter()
        .map(|c| (c.claim_no.as_str(), c.duplicate))
        .collect();
    assert_eq!(
        flags,
        vec![("three-a", false), ("three-b", true), ("hundred", true)]
    );
}

#[test]
fn test_two_claims_same_day_scenario() {
    let rows = vec![
        row("A1", "paid", "1/2/2020", "50.00"),
        row("A1", "zero", "1/2/2020", "0.00"),
    ];
    let outputs = run_stages(&rows).unwrap();

    let claims = &outputs.marked_duplicates["A1"];
    assert_eq!(claims.len(), 2);
    assert_eq!(total_paid(claims), 5000);
    let paid = claims.iter().find(|c| c.claim_no == "paid").unwrap();
    let zero = claims.iter().find(|c| c.claim_no == "zero").unwrap();
    assert!(!paid.duplicate);
    assert!(zero.duplicate);
}

#[test]
fn test_negative_amounts_count_as_payments() {
    let rows = vec![
        row("R", "charge", "1/1/2020", "40.00"),
        row("R", "refund", "1/1/2020", "-40.00"),
    ];
    let outputs = run_stages(&rows).unwrap();

    let claims = &outputs.marked_duplicates["R"];
    assert_eq!(total_paid(claims), 8000);
    assert_eq!(claims[1].insurance_paid.display, "40.00");
    assert!(claims[1].duplicate);
}
