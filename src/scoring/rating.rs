//! Credit rating labels and the score bands that select them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical risk rating attached to a credit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Rating {
    Poor,
    Average,
    Good,
    Excellent,
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Poor => "Poor",
            Self::Average => "Average",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        };
        write!(f, "{name}")
    }
}

/// Lower score thresholds of the Average, Good, and Excellent bands.
///
/// Scores below `average` are Poor. Thresholds must be strictly
/// ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RatingBands {
    pub average: i32,
    pub good: i32,
    pub excellent: i32,
}

impl RatingBands {
    /// Map a credit score onto its rating band.
    pub fn classify(self, score: i32) -> Rating {
        if score >= self.excellent {
            Rating::Excellent
        } else if score >= self.good {
            Rating::Good
        } else if score >= self.average {
            Rating::Average
        } else {
            Rating::Poor
        }
    }

    pub fn validate(self) -> Result<(), String> {
        if self.average < self.good && self.good < self.excellent {
            Ok(())
        } else {
            Err(format!(
                "rating thresholds must be strictly ascending, got {} / {} / {}",
                self.average, self.good, self.excellent
            ))
        }
    }
}

impl Default for RatingBands {
    fn default() -> Self {
        Self {
            average: 500,
            good: 650,
            excellent: 750,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_band_edges() {
        let bands = RatingBands::default();
        assert_eq!(bands.classify(300), Rating::Poor);
        assert_eq!(bands.classify(499), Rating::Poor);
        assert_eq!(bands.classify(500), Rating::Average);
        assert_eq!(bands.classify(649), Rating::Average);
        assert_eq!(bands.classify(650), Rating::Good);
        assert_eq!(bands.classify(749), Rating::Good);
        assert_eq!(bands.classify(750), Rating::Excellent);
        assert_eq!(bands.classify(900), Rating::Excellent);
    }

    #[test]
    fn test_validate_rejects_unordered_thresholds() {
        let bands = RatingBands {
            average: 650,
            good: 650,
            excellent: 750,
        };
        assert!(bands.validate().is_err());
        assert!(RatingBands::default().validate().is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(Rating::Poor.to_string(), "Poor");
        assert_eq!(Rating::Excellent.to_string(), "Excellent");
    }

    #[test]
    fn test_rating_ordering() {
        assert!(Rating::Poor < Rating::Average);
        assert!(Rating::Average < Rating::Good);
        assert!(Rating::Good < Rating::Excellent);
    }
}
