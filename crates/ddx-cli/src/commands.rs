//! Command bodies for the `ddx` binary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info_span, warn};

use ddx_core::{
    Advisory, AdvisoryError, DiagnosticReport, HttpClassifier, TextClassifier, advise, diagnose,
};

use crate::config::{AdvisorySettings, AppConfig};
use crate::intake::{CaseOverrides, assemble_case, load_case_file};
use crate::render::{
    guidelines_table, print_sources, render_tables, render_text, vocabulary_tables,
};

/// Output format of `diagnose`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Text,
    Json,
}

/// Everything `diagnose` needs besides the config.
#[derive(Debug, Clone, Default)]
pub struct DiagnoseRequest {
    /// JSON case file; `overrides` add to it.
    pub case_file: Option<PathBuf>,
    pub overrides: CaseOverrides,
    /// Run the experimental advisory when the config enables it.
    pub advisory: bool,
}

pub fn run_vocabulary() -> Result<()> {
    let (symptoms, labs) = vocabulary_tables();
    println!("{symptoms}");
    println!("{labs}");
    Ok(())
}

pub fn run_guidelines() -> Result<()> {
    println!("{}", guidelines_table());
    print_sources();
    Ok(())
}

pub fn run_diagnose(
    request: &DiagnoseRequest,
    format: OutputFormat,
    config: &AppConfig,
) -> Result<()> {
    let span = info_span!("diagnose", format = ?format);
    let _guard = span.enter();

    let report = build_report(request, config)?;
    let output = render_report(&report, format, config.report.guideline_limit)?;
    println!("{}", output.trim_end());
    Ok(())
}

/// Assemble the case, score it and attach the advisory when asked for.
///
/// # Errors
///
/// Fails when the case file cannot be read or the case is rejected.
pub fn build_report(request: &DiagnoseRequest, config: &AppConfig) -> Result<DiagnosticReport> {
    let base = request
        .case_file
        .as_deref()
        .map(load_case_file)
        .transpose()?;
    let case = assemble_case(base, request.overrides.clone());
    let report = diagnose(case).context("case rejected")?;
    if request.advisory {
        return Ok(attach_advisory(report, &config.advisory));
    }
    Ok(report)
}

/// Attach the configured classifier's advisory. Never fails: without an
/// active endpoint the report is returned unchanged.
pub fn attach_advisory(report: DiagnosticReport, settings: &AdvisorySettings) -> DiagnosticReport {
    let Some(endpoint) = settings.active_endpoint() else {
        warn!("--advisory requested but [advisory] is not enabled in the config");
        return report;
    };
    debug!(endpoint, "running experimental advisory");
    let classifier = HttpClassifier::new(endpoint, settings.token(), Some(settings.timeout()));
    advise_with(report, classifier)
}

/// Run `classifier` if it could be built; otherwise attach the placeholder.
pub fn advise_with<C>(
    report: DiagnosticReport,
    classifier: Result<C, AdvisoryError>,
) -> DiagnosticReport
where
    C: TextClassifier,
{
    let advisory = match classifier {
        Ok(classifier) => advise(&classifier, &report.case().symptoms),
        Err(error) => {
            warn!(%error, "advisory client unavailable; using placeholder");
            Advisory::unavailable()
        }
    };
    report.with_advisory(advisory)
}

pub fn render_report(
    report: &DiagnosticReport,
    format: OutputFormat,
    guideline_limit: usize,
) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_tables(report, guideline_limit)),
        OutputFormat::Text => Ok(render_text(report, guideline_limit)),
        OutputFormat::Json => serde_json::to_string_pretty(report).context("serialize report"),
    }
}
