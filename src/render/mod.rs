//! Output rendering for the CLI.

use crate::binding::Binding;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One binding per line.
    #[default]
    Lines,
    /// A JSON report.
    Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct BindingReport {
    /// Command name, absent for parsed binding files.
    pub command: Option<String>,
    pub trace_count: Option<usize>,
    pub bindings: Vec<Binding>,
}

pub fn render_report(report: &BindingReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Lines => Ok(report
            .bindings
            .iter()
            .map(|b| format!("{}\n", b))
            .collect()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
    }
}
