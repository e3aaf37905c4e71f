use serde::{Deserialize, Serialize};

pub const DEFAULT_RATING_WEIGHT: f64 = 0.5;
pub const DEFAULT_TRAINING_WEIGHT: f64 = 0.4;
pub const DEFAULT_AWARD_BONUS: f64 = 10.0;
pub const DEFAULT_DEPT_RATING_WEIGHT: f64 = 0.6;
pub const DEFAULT_DEPT_TRAINING_WEIGHT: f64 = 0.4;
pub const DEFAULT_MIN_RATING: f64 = 4.0;
pub const DEFAULT_MIN_TRAINING_SCORE: f64 = 80.0;
pub const DEFAULT_MIN_SERVICE_YEARS: u32 = 3;

/// Main scoring configuration.
///
/// Defines how employee and department scores are calculated. Every
/// field is optional; absent fields fall back to the reference weights,
/// so an empty config reproduces the stock formula exactly.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   rating_weight: 0.5
///   training_weight: 0.4
///   award_bonus: 10
///   department:
///     rating_weight: 0.6
///     training_weight: 0.4
///   eligibility:
///     min_rating: 4
///     min_training_score: 80
///     min_service_years: 3
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Weight on `previous_year_rating` in the performance score
    #[serde(default)]
    pub rating_weight: Option<f64>,

    /// Weight on `avg_training_score` in the performance score
    #[serde(default)]
    pub training_weight: Option<f64>,

    /// Flat bonus added when the employee has won an award
    #[serde(default)]
    pub award_bonus: Option<f64>,

    /// Weights for the per-department overall score
    #[serde(default)]
    pub department: Option<DepartmentWeights>,

    /// Thresholds for the promotion/bonus eligibility predicate
    #[serde(default)]
    pub eligibility: Option<EligibilityRules>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            rating_weight: Some(DEFAULT_RATING_WEIGHT),
            training_weight: Some(DEFAULT_TRAINING_WEIGHT),
            award_bonus: Some(DEFAULT_AWARD_BONUS),
            department: Some(DepartmentWeights::default()),
            eligibility: Some(EligibilityRules::default()),
        }
    }
}

/// Weights combining department means into the overall score.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DepartmentWeights {
    #[serde(default)]
    pub rating_weight: Option<f64>,

    #[serde(default)]
    pub training_weight: Option<f64>,
}

impl Default for DepartmentWeights {
    fn default() -> Self {
        Self {
            rating_weight: Some(DEFAULT_DEPT_RATING_WEIGHT),
            training_weight: Some(DEFAULT_DEPT_TRAINING_WEIGHT),
        }
    }
}

/// Inclusive thresholds; an employee is eligible only when all three hold.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EligibilityRules {
    #[serde(default)]
    pub min_rating: Option<f64>,

    #[serde(default)]
    pub min_training_score: Option<f64>,

    #[serde(default)]
    pub min_service_years: Option<u32>,
}

impl Default for EligibilityRules {
    fn default() -> Self {
        Self {
            min_rating: Some(DEFAULT_MIN_RATING),
            min_training_score: Some(DEFAULT_MIN_TRAINING_SCORE),
            min_service_years: Some(DEFAULT_MIN_SERVICE_YEARS),
        }
    }
}
