//! One-shot scoring without the form.

use std::path::PathBuf;

use anyhow::Result;

use crate::applicant::ApplicantInput;
use crate::config::loader::load_config_from;
use crate::formatting::FormattingConfig;
use crate::io::output::{create_writer, OutputFormat, ScoringReport};
use crate::scoring::Scorer;

/// Everything the score command needs, assembled by `main`.
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    pub applicant: ApplicantInput,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub formatting: FormattingConfig,
    pub config_path: Option<PathBuf>,
}

pub fn run_score(config: ScoreConfig) -> Result<()> {
    let file_config = load_config_from(config.config_path.as_deref())?;
    let model = file_config.build_model()?;

    log::debug!("Scoring applicant: {:?}", config.applicant);
    let result = model.predict(&config.applicant)?;
    let report = ScoringReport::new(config.applicant, result);

    let mut writer = create_writer(config.format, config.output.as_deref(), config.formatting)?;
    writer.write_report(&report)
}
