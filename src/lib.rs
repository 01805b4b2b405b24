//! Insurance-claim reconciliation: groups claim exports by chart and flags potential duplicate
//! payments, writing an HTML report after each pipeline stage.

pub mod constants;
pub mod error;
pub mod logging;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod source;
pub mod types;

pub use error::{ReconError, Result};
pub use pipeline::{Pipeline, PipelineSummary, Stage};
pub use report::{render_report, HtmlReportSink, ReportSink};
pub use source::SourceOptions;
pub use types::{Amount, ChartMap, Claim};
