// Export modules for library usage
pub mod applicant;
pub mod cli;
pub mod commands;
pub mod config;
pub mod formatting;
pub mod io;
pub mod scoring;
pub mod tui;

// Re-export commonly used types
pub use crate::applicant::{ApplicantInput, LoanPurpose, LoanType, ResidenceType};

pub use crate::scoring::{
    LogisticModel, Rating, RatingBands, Scorer, ScoringError, ScoringResult,
};

pub use crate::config::{load_config, RiskformConfig};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter, ScoringReport};
