//! CLI command implementations.
//!
//! - **form**: run the interactive scoring form
//! - **score**: score one applicant and write a report
//! - **init**: write a starter configuration file

pub mod form;
pub mod init;
pub mod score;

pub use form::run_form;
pub use init::init_config;
pub use score::{run_score, ScoreConfig};
