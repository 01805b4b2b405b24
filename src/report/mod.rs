//! HTML reports, one per pipeline stage.

pub mod template;

use std::fs;
use std::path::PathBuf;

use askama::Template;
use tracing::{info, instrument};

use crate::constants::REPORT_TITLE;
use crate::error::{ReconError, Result};
use crate::pipeline::Stage;
use crate::types::ChartMap;
use template::{sections, ReportTemplate};

/// Receives the chart mapping after each stage
pub trait ReportSink {
    fn write_report(&mut self, stage: Stage, charts: &ChartMap) -> Result<()>;
}

/// Render a chart mapping as a standalone HTML document
pub fn render_report(stage: Stage, charts: &ChartMap) -> Result<String> {
    let template = ReportTemplate {
        title: REPORT_TITLE,
        stage_title: stage.title(),
        sections: sections(charts),
    };
    Ok(template.render()?)
}

/// Writes each stage's report to its fixed file name inside `output_dir`
#[derive(Debug, Clone)]
pub struct HtmlReportSink {
    output_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl HtmlReportSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            written: Vec::new(),
        }
    }

    pub fn report_path(&self, stage: Stage) -> PathBuf {
        self.output_dir.join(stage.file_name())
    }

    /// Files written so far, in stage order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ReportSink for HtmlReportSink {
    #[instrument(skip(self, charts), fields(stage = stage.file_name(), charts = charts.len()))]
    fn write_report(&mut self, stage: Stage, charts: &ChartMap) -> Result<()> {
        // Render first so a template failure never leaves a half-written file behind
        let html = render_report(stage, charts)?;
        let path = self.report_path(stage);
        fs::write(&path, html).map_err(|e| ReconError::io(&path, e))?;

        info!("📝 Wrote {} charts to {}", charts.len(), path.display());
        self.written.push(path);
        Ok(())
    }
}
