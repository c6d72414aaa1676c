use anyhow::Result;
use clap::Parser;
use riskform::cli::{Cli, Commands};
use riskform::formatting::FormattingConfig;

// Main orchestrator function
fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        None => riskform::commands::run_form(None),
        Some(Commands::Form { config }) => riskform::commands::run_form(config.as_deref()),
        Some(command @ Commands::Score { .. }) => handle_score_command(command),
        Some(Commands::Init { force }) => riskform::commands::init_config(force),
    }
}

// Builds the score configuration from parsed arguments and runs it
fn handle_score_command(command: Commands) -> Result<()> {
    let Commands::Score {
        age,
        income,
        loan_amount,
        loan_tenure_months,
        avg_dpd_per_delinquency,
        delinquency_ratio,
        credit_utilization_ratio,
        num_open_accounts,
        residence_type,
        loan_purpose,
        loan_type,
        format,
        output,
        plain,
        config,
    } = command
    else {
        anyhow::bail!("Invalid command");
    };

    let score_config = riskform::commands::ScoreConfig {
        applicant: riskform::ApplicantInput {
            age,
            income,
            loan_amount,
            loan_tenure_months,
            avg_dpd_per_delinquency,
            delinquency_ratio,
            credit_utilization_ratio,
            num_open_accounts,
            residence_type,
            loan_purpose,
            loan_type,
        },
        format: format.into(),
        output,
        formatting: create_formatting_config(plain),
        config_path: config,
    };

    riskform::commands::run_score(score_config)
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
