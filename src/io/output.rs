//! Writers for one-shot scoring reports.
//!
//! The interactive form renders results itself; these writers serve the
//! `score` command, which emits a single report to stdout or a file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use serde::Serialize;

use crate::applicant::ApplicantInput;
use crate::formatting::{ColoredFormatter, FormattingConfig};
use crate::scoring::{Rating, ScoringResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

/// One scored applicant, ready for serialization or display.
#[derive(Debug, Clone, Serialize)]
pub struct ScoringReport {
    pub timestamp: DateTime<Utc>,
    pub applicant: ApplicantInput,
    pub result: ScoringResult,
}

impl ScoringReport {
    pub fn new(applicant: ApplicantInput, result: ScoringResult) -> Self {
        Self {
            timestamp: Utc::now(),
            applicant,
            result,
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &ScoringReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ScoringReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: ColoredFormatter,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: ColoredFormatter::new(config),
        }
    }

    fn applicant_table(applicant: &ApplicantInput) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(vec!["Field", "Value"]);
        table.add_row(vec!["Age".to_string(), applicant.age.to_string()]);
        table.add_row(vec!["Income".to_string(), applicant.income.to_string()]);
        table.add_row(vec![
            "Loan Amount".to_string(),
            applicant.loan_amount.to_string(),
        ]);
        table.add_row(vec![
            "Loan to Income Ratio".to_string(),
            format!("{:.2}", applicant.loan_to_income_ratio()),
        ]);
        table.add_row(vec![
            "Loan Tenure (months)".to_string(),
            applicant.loan_tenure_months.to_string(),
        ]);
        table.add_row(vec![
            "Avg DPD".to_string(),
            applicant.avg_dpd_per_delinquency.to_string(),
        ]);
        table.add_row(vec![
            "Delinquency Ratio".to_string(),
            applicant.delinquency_ratio.to_string(),
        ]);
        table.add_row(vec![
            "Credit Utilization Ratio".to_string(),
            applicant.credit_utilization_ratio.to_string(),
        ]);
        table.add_row(vec![
            "Open Loan Accounts".to_string(),
            applicant.num_open_accounts.to_string(),
        ]);
        table.add_row(vec![
            "Residence Type".to_string(),
            applicant.residence_type.to_string(),
        ]);
        table.add_row(vec![
            "Loan Purpose".to_string(),
            applicant.loan_purpose.to_string(),
        ]);
        table.add_row(vec![
            "Loan Type".to_string(),
            applicant.loan_type.to_string(),
        ]);
        table
    }

    fn styled_rating(&self, rating: Rating) -> String {
        let text = rating.to_string();
        match rating {
            Rating::Poor => self.formatter.error(&text),
            Rating::Average => self.formatter.warning(&text),
            Rating::Good | Rating::Excellent => self.formatter.success(&text),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ScoringReport) -> anyhow::Result<()> {
        let title = format!(
            "{} Credit Risk Report",
            self.formatter.emoji("💳", "[CREDIT]")
        );
        writeln!(self.writer, "{}", self.formatter.header(&title))?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", Self::applicant_table(&report.applicant))?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Default Probability: {:.2}%",
            report.result.probability
        )?;
        writeln!(self.writer, "Credit Score: {}", report.result.credit_score)?;
        writeln!(
            self.writer,
            "Rating: {}",
            self.styled_rating(report.result.rating)
        )?;
        Ok(())
    }
}

/// Build a writer for the requested format and destination (stdout when
/// no output path is given).
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
    formatting: FormattingConfig,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    match (format, output) {
        (OutputFormat::Json, Some(path)) => Ok(Box::new(JsonWriter::new(File::create(path)?))),
        (OutputFormat::Json, None) => Ok(Box::new(JsonWriter::new(io::stdout()))),
        (OutputFormat::Terminal, Some(path)) => Ok(Box::new(TerminalWriter::new(
            File::create(path)?,
            formatting,
        ))),
        (OutputFormat::Terminal, None) => {
            Ok(Box::new(TerminalWriter::new(io::stdout(), formatting)))
        }
    }
}
