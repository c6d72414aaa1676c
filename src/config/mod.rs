//! Configuration for the scoring model and rating bands.
//!
//! An optional `.riskform.toml` can override the built-in model
//! coefficients and rating thresholds. Absent sections fall back to the
//! defaults baked into [`LogisticModel`].

pub mod loader;

pub use loader::load_config;

use serde::Deserialize;

use crate::scoring::model::FEATURE_COUNT;
use crate::scoring::{LogisticModel, RatingBands, ScoringError};

/// Root of `.riskform.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RiskformConfig {
    /// Logistic model coefficient overrides.
    pub model: Option<ModelConfig>,
    /// Rating threshold overrides.
    pub ratings: Option<RatingBands>,
}

impl RiskformConfig {
    /// Construct the scorer described by this config. Absent sections use
    /// the built-in coefficients and bands.
    pub fn build_model(&self) -> Result<LogisticModel, ScoringError> {
        let bands = self.ratings.unwrap_or_default();
        match &self.model {
            Some(model) => model.build(bands),
            None => LogisticModel::with_bands(bands),
        }
    }
}

/// Coefficient overrides for the logistic model. All four values must be
/// supplied together; the vectors carry one entry per feature.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    pub means: Vec<f64>,
    pub stds: Vec<f64>,
    pub weights: Vec<f64>,
    pub intercept: f64,
}

impl ModelConfig {
    fn build(&self, bands: RatingBands) -> Result<LogisticModel, ScoringError> {
        LogisticModel::new(
            to_coefficients("means", &self.means)?,
            to_coefficients("stds", &self.stds)?,
            to_coefficients("weights", &self.weights)?,
            self.intercept,
            bands,
        )
    }
}

fn to_coefficients(name: &str, values: &[f64]) -> Result<[f64; FEATURE_COUNT], ScoringError> {
    values.try_into().map_err(|_| {
        ScoringError::Misconfigured(format!(
            "{name} must have exactly {FEATURE_COUNT} entries, got {}",
            values.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_builds_default_model() {
        let config = RiskformConfig::default();
        assert_eq!(config.build_model().unwrap(), LogisticModel::default());
    }

    #[test]
    fn test_wrong_coefficient_arity_is_rejected() {
        let config = RiskformConfig {
            model: Some(ModelConfig {
                means: vec![0.0; 3],
                stds: vec![1.0; 3],
                weights: vec![0.0; 3],
                intercept: 0.0,
            }),
            ratings: None,
        };
        assert!(matches!(
            config.build_model(),
            Err(ScoringError::Misconfigured(_))
        ));
    }

    #[test]
    fn test_ratings_override_reaches_model() {
        let bands = RatingBands {
            average: 400,
            good: 600,
            excellent: 800,
        };
        let config = RiskformConfig {
            model: None,
            ratings: Some(bands),
        };
        assert_eq!(
            config.build_model().unwrap(),
            LogisticModel::with_bands(bands).unwrap()
        );
    }
}
