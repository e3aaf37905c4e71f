use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let mut check_weight = |label: &str, value: Option<f64>| {
        if let Some(v) = value {
            if !v.is_finite() {
                errors.push(format!("{}: must be a finite number", label));
            } else if v < 0.0 {
                errors.push(format!("{}: must be non-negative", label));
            }
        }
    };

    check_weight("scoring.rating_weight", config.rating_weight);
    check_weight("scoring.training_weight", config.training_weight);
    check_weight("scoring.award_bonus", config.award_bonus);

    if let Some(ref dept) = config.department {
        check_weight("scoring.department.rating_weight", dept.rating_weight);
        check_weight("scoring.department.training_weight", dept.training_weight);
    }

    if let Some(ref rules) = config.eligibility {
        if let Some(min_rating) = rules.min_rating {
            if !min_rating.is_finite() {
                errors.push("scoring.eligibility.min_rating: must be a finite number".to_string());
            }
        }
        if let Some(min_training) = rules.min_training_score {
            if !min_training.is_finite() {
                errors.push(
                    "scoring.eligibility.min_training_score: must be a finite number".to_string(),
                );
            } else if !(0.0..=100.0).contains(&min_training) {
                errors.push(
                    "scoring.eligibility.min_training_score: must be within 0-100".to_string(),
                );
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
