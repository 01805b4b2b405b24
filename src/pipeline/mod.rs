//! The four-stage reconciliation pipeline.
//!
//! Stages run strictly in order, each taking the previous stage's chart mapping and returning a
//! new one. The mapping is handed to the report sink after every stage; any error stops the run.

pub mod duplicates;
pub mod filters;

use serde::Serialize;
use std::path::Path;
use tracing::{info, instrument};

use crate::constants::{
    CLAIMS_BY_CHART_FILE, MARKED_DUPLICATES_FILE, MULTIPLE_CLAIM_CHARTS_FILE,
    NONZERO_MULTIPLE_CLAIM_CHARTS_FILE,
};
use crate::error::Result;
use crate::parser::parse_records;
use crate::report::ReportSink;
use crate::source::{read_rows, SourceOptions};
use crate::types::{claim_count, duplicate_count, ChartMap, RawRow};

pub use duplicates::mark_duplicate_payments;
pub use filters::{remove_single_claim_charts, remove_zero_sum_charts};

/// Pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    ClaimsByChart,
    MultipleClaimCharts,
    NonZeroMultipleClaimCharts,
    MarkedDuplicates,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::ClaimsByChart,
        Stage::MultipleClaimCharts,
        Stage::NonZeroMultipleClaimCharts,
        Stage::MarkedDuplicates,
    ];

    /// Report file written after this stage
    pub fn file_name(self) -> &'static str {
        match self {
            Stage::ClaimsByChart => CLAIMS_BY_CHART_FILE,
            Stage::MultipleClaimCharts => MULTIPLE_CLAIM_CHARTS_FILE,
            Stage::NonZeroMultipleClaimCharts => NONZERO_MULTIPLE_CLAIM_CHARTS_FILE,
            Stage::MarkedDuplicates => MARKED_DUPLICATES_FILE,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Stage::ClaimsByChart => "Step 1: Claims by chart",
            Stage::MultipleClaimCharts => "Step 2: Charts with multiple claims",
            Stage::NonZeroMultipleClaimCharts => "Step 3: Multiple-claim charts with payments",
            Stage::MarkedDuplicates => "Step 4: Marked duplicate payments",
        }
    }
}

/// Chart and claim counts after one stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageSummary {
    pub stage: Stage,
    pub report_file: &'static str,
    pub charts: usize,
    pub claims: usize,
    pub duplicates: usize,
}

impl StageSummary {
    fn new(stage: Stage, charts: &ChartMap) -> Self {
        Self {
            stage,
            report_file: stage.file_name(),
            charts: charts.len(),
            claims: claim_count(charts),
            duplicates: duplicate_count(charts),
        }
    }
}

/// Result of a complete pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineSummary {
    pub input_rows: usize,
    pub stages: Vec<StageSummary>,
}

/// Every intermediate mapping of a run, for callers that want more than the reports
#[derive(Debug, Clone, PartialEq)]
pub struct StageOutputs {
    pub claims_by_chart: ChartMap,
    pub multiple_claim_charts: ChartMap,
    pub nonzero_multiple_claim_charts: ChartMap,
    pub marked_duplicates: ChartMap,
}

impl StageOutputs {
    pub fn get(&self, stage: Stage) -> &ChartMap {
        match stage {
            Stage::ClaimsByChart => &self.claims_by_chart,
            Stage::MultipleClaimCharts => &self.multiple_claim_charts,
            Stage::NonZeroMultipleClaimCharts => &self.nonzero_multiple_claim_charts,
            Stage::MarkedDuplicates => &self.marked_duplicates,
        }
    }
}

/// Run all four stages over already-read rows, without emitting anything
pub fn run_stages<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<StageOutputs> {
    let claims_by_chart = parse_records(rows)?;
    let multiple_claim_charts = remove_single_claim_charts(&claims_by_chart);
    let nonzero_multiple_claim_charts = remove_zero_sum_charts(&multiple_claim_charts);
    let marked_duplicates = mark_duplicate_payments(&nonzero_multiple_claim_charts);

    Ok(StageOutputs {
        claims_by_chart,
        multiple_claim_charts,
        nonzero_multiple_claim_charts,
        marked_duplicates,
    })
}

pub struct Pipeline;

impl Pipeline {
    /// Read the export at `input` and run every stage, reporting to `sink` as each one finishes
    #[instrument(skip(sink, options), fields(input = %input.display()))]
    pub fn run(
        input: &Path,
        options: SourceOptions,
        sink: &mut dyn ReportSink,
    ) -> Result<PipelineSummary> {
        let rows = read_rows(input, options)?;
        Self::run_rows(&rows, sink)
    }

    /// Run every stage over in-memory rows.
    ///
    /// Parsing completes before the first report is written, so a bad row produces no output
    /// at all. A failing report stops the run before any later stage is emitted.
    pub fn run_rows(rows: &[RawRow], sink: &mut dyn ReportSink) -> Result<PipelineSummary> {
        info!("🚀 Starting reconciliation of {} rows", rows.len());
        let outputs = run_stages(rows)?;

        let mut stages = Vec::with_capacity(Stage::ALL.len());
        for stage in Stage::ALL {
            let charts = outputs.get(stage);
            sink.write_report(stage, charts)?;

            let summary = StageSummary::new(stage, charts);
            info!(
                "✅ {}: {} charts, {} claims, {} duplicates",
                stage.title(),
                summary.charts,
                summary.claims,
                summary.duplicates
            );
            stages.push(summary);
        }

        Ok(PipelineSummary {
            input_rows: rows.len(),
            stages,
        })
    }
}
