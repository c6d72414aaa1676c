//! Scoring boundary between the form and the prediction collaborator.
//!
//! The form never computes risk itself. It hands the eleven collected
//! fields to a [`Scorer`] and renders the three values that come back.
//! [`LogisticModel`] is the default collaborator; anything implementing
//! the trait can be wired in instead.

pub mod model;
pub mod rating;

pub use model::LogisticModel;
pub use rating::{Rating, RatingBands};

use crate::applicant::ApplicantInput;
use serde::Serialize;
use thiserror::Error;

/// Faults raised by a scoring collaborator.
///
/// The form does not catch these; they propagate out of the render cycle.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScoringError {
    /// The collaborator rejected the submitted field values.
    #[error("scoring model rejected input: {0}")]
    InvalidInput(String),

    /// The collaborator itself is unusable (bad coefficients, degenerate
    /// scaling).
    #[error("scoring model is misconfigured: {0}")]
    Misconfigured(String),
}

/// The three values returned by a scoring call, in the documented order.
///
/// `probability` is on the percentage scale (0–100).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringResult {
    pub probability: f64,
    pub credit_score: i32,
    pub rating: Rating,
}

/// A prediction collaborator.
///
/// Called synchronously, exactly once per trigger, with all eleven field
/// values. Implementations own feature derivation, inference, and the
/// score-to-rating mapping.
pub trait Scorer {
    fn predict(&self, input: &ApplicantInput) -> Result<ScoringResult, ScoringError>;
}
