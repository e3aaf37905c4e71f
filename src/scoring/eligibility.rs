use super::config::{
    ScoringConfig, DEFAULT_MIN_RATING, DEFAULT_MIN_SERVICE_YEARS, DEFAULT_MIN_TRAINING_SCORE,
};
use super::engine::ScoredEmployee;
use crate::data::types::EmployeeRecord;

/// Promotion/bonus eligibility: rating, training score and tenure must
/// all meet their thresholds. Every comparison is inclusive.
pub fn is_eligible(record: &EmployeeRecord, config: &ScoringConfig) -> bool {
    let rules = config.eligibility.as_ref();
    let min_rating = rules
        .and_then(|r| r.min_rating)
        .unwrap_or(DEFAULT_MIN_RATING);
    let min_training = rules
        .and_then(|r| r.min_training_score)
        .unwrap_or(DEFAULT_MIN_TRAINING_SCORE);
    let min_service = rules
        .and_then(|r| r.min_service_years)
        .unwrap_or(DEFAULT_MIN_SERVICE_YEARS);

    record.previous_year_rating >= min_rating
        && record.avg_training_score >= min_training
        && record.length_of_service >= min_service
}

/// Keep only eligible employees, preserving input relative order. The
/// filter never reorders and is idempotent.
pub fn filter_eligible(scored: Vec<ScoredEmployee>, config: &ScoringConfig) -> Vec<ScoredEmployee> {
    scored
        .into_iter()
        .filter(|s| is_eligible(&s.record, config))
        .collect()
}
