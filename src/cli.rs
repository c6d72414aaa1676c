use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::applicant::{self, LoanPurpose, LoanType, ResidenceType};

#[derive(Parser, Debug)]
#[command(name = "riskform")]
#[command(about = "Interactive credit risk scoring form for loan applicants", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive scoring form (the default)
    Form {
        /// Configuration file (searches for .riskform.toml when omitted)
        #[arg(short, long, env = "RISKFORM_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Score a single applicant without the form
    Score {
        /// Applicant age in years
        #[arg(long, default_value_t = applicant::AGE_MIN,
              value_parser = clap::value_parser!(u32).range(applicant::AGE_MIN as i64..=applicant::AGE_MAX as i64))]
        age: u32,

        /// Annual income
        #[arg(long, default_value_t = 0,
              value_parser = clap::value_parser!(u64).range(..=applicant::INCOME_MAX))]
        income: u64,

        /// Requested loan amount
        #[arg(long, default_value_t = 0,
              value_parser = clap::value_parser!(u64).range(..=applicant::LOAN_AMOUNT_MAX))]
        loan_amount: u64,

        /// Loan tenure in months
        #[arg(long, default_value_t = applicant::LOAN_TENURE_MIN,
              value_parser = clap::value_parser!(u32).range(applicant::LOAN_TENURE_MIN as i64..))]
        loan_tenure_months: u32,

        /// Average days past due per delinquency
        #[arg(long, default_value_t = 0)]
        avg_dpd_per_delinquency: u32,

        /// Share of delinquent payment periods (0-100)
        #[arg(long, default_value_t = 0,
              value_parser = clap::value_parser!(u32).range(..=applicant::DELINQUENCY_RATIO_MAX as i64))]
        delinquency_ratio: u32,

        /// Share of available credit in use (0-100)
        #[arg(long, default_value_t = 0,
              value_parser = clap::value_parser!(u32).range(..=applicant::CREDIT_UTILIZATION_MAX as i64))]
        credit_utilization_ratio: u32,

        /// Number of open loan accounts (0-4)
        #[arg(long, default_value_t = 0,
              value_parser = clap::value_parser!(u32).range(..=applicant::OPEN_ACCOUNTS_MAX as i64))]
        num_open_accounts: u32,

        /// Residence type
        #[arg(long, value_enum, default_value = "owned")]
        residence_type: ResidenceType,

        /// Loan purpose
        #[arg(long, value_enum, default_value = "education")]
        loan_purpose: LoanPurpose,

        /// Loan type
        #[arg(long, value_enum, default_value = "unsecured")]
        loan_type: LoanType,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colors and emoji
        #[arg(long)]
        plain: bool,

        /// Configuration file (searches for .riskform.toml when omitted)
        #[arg(short, long, env = "RISKFORM_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Json),
            crate::io::output::OutputFormat::Json
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Terminal),
            crate::io::output::OutputFormat::Terminal
        );
    }

    #[test]
    fn test_no_subcommand_defaults_to_form() {
        let cli = Cli::parse_from(["riskform"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parsing_score_command() {
        let cli = Cli::parse_from([
            "riskform",
            "score",
            "--age",
            "35",
            "--income",
            "250000",
            "--loan-amount",
            "500000",
            "--residence-type",
            "rented",
            "--format",
            "json",
        ]);

        match cli.command {
            Some(Commands::Score {
                age,
                income,
                loan_amount,
                residence_type,
                format,
                ..
            }) => {
                assert_eq!(age, 35);
                assert_eq!(income, 250_000);
                assert_eq!(loan_amount, 500_000);
                assert_eq!(residence_type, ResidenceType::Rented);
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("Expected Score command"),
        }
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        assert!(Cli::try_parse_from(["riskform", "score", "--age", "17"]).is_err());
        assert!(Cli::try_parse_from(["riskform", "score", "--age", "81"]).is_err());
        assert!(Cli::try_parse_from(["riskform", "score", "--loan-tenure-months", "0"]).is_err());
        assert!(Cli::try_parse_from(["riskform", "score", "--num-open-accounts", "5"]).is_err());
        assert!(
            Cli::try_parse_from(["riskform", "score", "--delinquency-ratio", "101"]).is_err()
        );
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let cli = Cli::parse_from(["riskform", "init", "--force"]);
        match cli.command {
            Some(Commands::Init { force }) => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }
}
