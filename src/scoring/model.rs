//! Standardized logistic-regression scorer.
//!
//! The default prediction collaborator. Features are standardized as
//! `(x - mean) / std`, combined with fitted weights and an intercept,
//! and squashed through a sigmoid into a default probability. The
//! survival probability is then scaled onto the 300–900 credit score
//! range and banded into a rating.

use crate::applicant::{ApplicantInput, LoanPurpose, LoanType, ResidenceType};

use super::rating::RatingBands;
use super::{Scorer, ScoringError, ScoringResult};

/// Number of features derived from the eleven applicant fields: the
/// eight numeric fields, the loan-to-income ratio, and six one-hot
/// dummies for the categorical fields.
pub const FEATURE_COUNT: usize = 15;

pub const SCORE_FLOOR: i32 = 300;
pub const SCORE_CEILING: i32 = 900;

// Coefficients fitted offline on the historical loan book. Feature order
// matches `features()`.
const DEFAULT_MEANS: [f64; FEATURE_COUNT] = [
    40.2, 312_450.0, 1_481_300.0, 47.6, 8.3, 19.7, 41.8, 1.6, 4.21, 0.31, 0.22, 0.18, 0.13, 0.27,
    0.56,
];
const DEFAULT_STDS: [f64; FEATURE_COUNT] = [
    12.4, 241_870.0, 1_352_600.0, 29.8, 10.9, 23.5, 26.7, 1.1, 5.84, 0.46, 0.41, 0.38, 0.34, 0.44,
    0.50,
];
const DEFAULT_WEIGHTS: [f64; FEATURE_COUNT] = [
    -0.31, -0.74, 0.42, 0.17, 0.93, 1.21, 0.86, 0.44, 0.67, 0.21, 0.08, -0.06, 0.13, 0.29, 0.52,
];
const DEFAULT_INTERCEPT: f64 = -2.84;

/// Logistic-regression credit scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticModel {
    means: [f64; FEATURE_COUNT],
    stds: [f64; FEATURE_COUNT],
    weights: [f64; FEATURE_COUNT],
    intercept: f64,
    bands: RatingBands,
}

impl LogisticModel {
    /// Build a model from explicit coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::Misconfigured`] for non-finite
    /// coefficients, non-positive standard deviations, or unordered
    /// rating thresholds.
    pub fn new(
        means: [f64; FEATURE_COUNT],
        stds: [f64; FEATURE_COUNT],
        weights: [f64; FEATURE_COUNT],
        intercept: f64,
        bands: RatingBands,
    ) -> Result<Self, ScoringError> {
        let finite = means
            .iter()
            .chain(stds.iter())
            .chain(weights.iter())
            .chain(std::iter::once(&intercept))
            .all(|v| v.is_finite());
        if !finite {
            return Err(ScoringError::Misconfigured(
                "coefficients must be finite".to_string(),
            ));
        }
        if let Some(idx) = stds.iter().position(|s| *s <= 0.0) {
            return Err(ScoringError::Misconfigured(format!(
                "standard deviation for feature {idx} must be positive"
            )));
        }
        bands.validate().map_err(ScoringError::Misconfigured)?;

        Ok(Self {
            means,
            stds,
            weights,
            intercept,
            bands,
        })
    }

    /// Built-in coefficients combined with custom rating bands.
    pub fn with_bands(bands: RatingBands) -> Result<Self, ScoringError> {
        Self::new(
            DEFAULT_MEANS,
            DEFAULT_STDS,
            DEFAULT_WEIGHTS,
            DEFAULT_INTERCEPT,
            bands,
        )
    }

    /// Derive the fixed-order feature vector from the applicant fields.
    fn features(input: &ApplicantInput) -> [f64; FEATURE_COUNT] {
        [
            f64::from(input.age),
            input.income as f64,
            input.loan_amount as f64,
            f64::from(input.loan_tenure_months),
            f64::from(input.avg_dpd_per_delinquency),
            f64::from(input.delinquency_ratio),
            f64::from(input.credit_utilization_ratio),
            f64::from(input.num_open_accounts),
            input.loan_to_income_ratio(),
            dummy(input.residence_type == ResidenceType::Rented),
            dummy(input.residence_type == ResidenceType::Mortgage),
            dummy(input.loan_purpose == LoanPurpose::Home),
            dummy(input.loan_purpose == LoanPurpose::Auto),
            dummy(input.loan_purpose == LoanPurpose::Personal),
            dummy(input.loan_type == LoanType::Unsecured),
        ]
    }

    /// Default probability in [0, 1] for a standardized feature vector.
    fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        let mut z = self.intercept;
        for i in 0..FEATURE_COUNT {
            let scaled = (features[i] - self.means[i]) / self.stds[i];
            z += self.weights[i] * scaled;
        }
        1.0 / (1.0 + (-z).exp())
    }
}

impl Default for LogisticModel {
    fn default() -> Self {
        Self {
            means: DEFAULT_MEANS,
            stds: DEFAULT_STDS,
            weights: DEFAULT_WEIGHTS,
            intercept: DEFAULT_INTERCEPT,
            bands: RatingBands::default(),
        }
    }
}

impl Scorer for LogisticModel {
    fn predict(&self, input: &ApplicantInput) -> Result<ScoringResult, ScoringError> {
        let features = Self::features(input);
        if let Some(idx) = features.iter().position(|v| !v.is_finite()) {
            return Err(ScoringError::InvalidInput(format!(
                "feature {idx} is not finite"
            )));
        }

        let p = self.predict_proba(&features);
        let span = f64::from(SCORE_CEILING - SCORE_FLOOR);
        let credit_score = SCORE_FLOOR + ((1.0 - p) * span).round() as i32;
        let rating = self.bands.classify(credit_score);

        Ok(ScoringResult {
            probability: p * 100.0,
            credit_score,
            rating,
        })
    }
}

fn dummy(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn risky_applicant() -> ApplicantInput {
        ApplicantInput {
            age: 23,
            income: 40_000,
            loan_amount: 2_400_000,
            loan_tenure_months: 96,
            avg_dpd_per_delinquency: 45,
            delinquency_ratio: 80,
            credit_utilization_ratio: 95,
            num_open_accounts: 4,
            residence_type: ResidenceType::Rented,
            loan_purpose: LoanPurpose::Personal,
            loan_type: LoanType::Unsecured,
        }
    }

    fn safe_applicant() -> ApplicantInput {
        ApplicantInput {
            age: 45,
            income: 1_100_000,
            loan_amount: 300_000,
            loan_tenure_months: 24,
            avg_dpd_per_delinquency: 0,
            delinquency_ratio: 0,
            credit_utilization_ratio: 10,
            num_open_accounts: 1,
            residence_type: ResidenceType::Owned,
            loan_purpose: LoanPurpose::Home,
            loan_type: LoanType::Secured,
        }
    }

    #[test]
    fn test_outputs_stay_in_range() {
        let model = LogisticModel::default();
        for input in [
            ApplicantInput::default(),
            risky_applicant(),
            safe_applicant(),
        ] {
            let result = model.predict(&input).unwrap();
            assert!(result.probability >= 0.0 && result.probability <= 100.0);
            assert!(result.credit_score >= SCORE_FLOOR && result.credit_score <= SCORE_CEILING);
        }
    }

    #[test]
    fn test_risky_profile_scores_worse_than_safe_profile() {
        let model = LogisticModel::default();
        let risky = model.predict(&risky_applicant()).unwrap();
        let safe = model.predict(&safe_applicant()).unwrap();

        assert!(risky.probability > safe.probability);
        assert!(risky.credit_score < safe.credit_score);
        assert!(risky.rating <= safe.rating);
    }

    #[test]
    fn test_probability_rises_with_delinquency() {
        let model = LogisticModel::default();
        let mut input = safe_applicant();
        let baseline = model.predict(&input).unwrap();

        input.delinquency_ratio = 100;
        let delinquent = model.predict(&input).unwrap();
        assert!(delinquent.probability > baseline.probability);
    }

    #[test]
    fn test_rating_matches_band_of_score() {
        let model = LogisticModel::default();
        let bands = RatingBands::default();
        for input in [risky_applicant(), safe_applicant()] {
            let result = model.predict(&input).unwrap();
            assert_eq!(result.rating, bands.classify(result.credit_score));
        }
    }

    #[test]
    fn test_rejects_degenerate_scaling() {
        let mut stds = DEFAULT_STDS;
        stds[3] = 0.0;
        let err = LogisticModel::new(
            DEFAULT_MEANS,
            stds,
            DEFAULT_WEIGHTS,
            DEFAULT_INTERCEPT,
            RatingBands::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ScoringError::Misconfigured(_)));
    }

    #[test]
    fn test_rejects_non_finite_coefficients() {
        let mut weights = DEFAULT_WEIGHTS;
        weights[0] = f64::NAN;
        let err = LogisticModel::new(
            DEFAULT_MEANS,
            DEFAULT_STDS,
            weights,
            DEFAULT_INTERCEPT,
            RatingBands::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ScoringError::Misconfigured(_)));
    }

    #[test]
    fn test_default_coefficients_are_valid() {
        // The baked-in model must pass its own validation.
        LogisticModel::new(
            DEFAULT_MEANS,
            DEFAULT_STDS,
            DEFAULT_WEIGHTS,
            DEFAULT_INTERCEPT,
            RatingBands::default(),
        )
        .unwrap();
    }
}
