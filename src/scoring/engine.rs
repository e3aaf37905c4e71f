use std::cmp::Ordering;
use std::collections::HashMap;

use super::config::{
    ScoringConfig, DEFAULT_AWARD_BONUS, DEFAULT_DEPT_RATING_WEIGHT, DEFAULT_DEPT_TRAINING_WEIGHT,
    DEFAULT_RATING_WEIGHT, DEFAULT_TRAINING_WEIGHT,
};
use super::eligibility::filter_eligible;
use crate::data::types::EmployeeRecord;

/// Per-factor contributions behind a performance score, kept for the
/// verbose display.
#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    pub rating_component: f64,   // previous_year_rating * rating_weight
    pub training_component: f64, // avg_training_score * training_weight
    pub award_bonus: f64,        // flat bonus, zero without an award
}

/// An employee with its derived performance score. Derived once per run;
/// never updated in place.
#[derive(Debug, Clone)]
pub struct ScoredEmployee {
    pub record: EmployeeRecord,
    pub performance_score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Aggregate row for one department, recomputed in full every run.
#[derive(Debug, Clone)]
pub struct DepartmentSummary {
    pub department: String,
    pub headcount: usize,
    pub mean_previous_year_rating: f64,
    pub mean_avg_training_score: f64,
    pub overall_score: f64,
}

/// Result bundle for one pipeline run. `scored` keeps input order and is
/// the table ad-hoc views consume; the ranked lists are full, so callers
/// may take any N.
#[derive(Debug, Clone)]
pub struct ScoreReport {
    pub scored: Vec<ScoredEmployee>,
    pub ranked_employees: Vec<ScoredEmployee>,
    pub ranked_departments: Vec<DepartmentSummary>,
    pub eligible: Vec<ScoredEmployee>,
}

impl ScoreReport {
    pub fn top_employees(&self, n: usize) -> &[ScoredEmployee] {
        &self.ranked_employees[..n.min(self.ranked_employees.len())]
    }

    pub fn top_departments(&self, k: usize) -> &[DepartmentSummary] {
        &self.ranked_departments[..k.min(self.ranked_departments.len())]
    }
}

/// Score a single employee record.
pub fn score_record(record: &EmployeeRecord, config: &ScoringConfig) -> ScoredEmployee {
    let rating_weight = config.rating_weight.unwrap_or(DEFAULT_RATING_WEIGHT);
    let training_weight = config.training_weight.unwrap_or(DEFAULT_TRAINING_WEIGHT);
    let award_bonus = config.award_bonus.unwrap_or(DEFAULT_AWARD_BONUS);

    let breakdown = ScoreBreakdown {
        rating_component: record.previous_year_rating * rating_weight,
        training_component: record.avg_training_score * training_weight,
        award_bonus: if record.awards_won { award_bonus } else { 0.0 },
    };

    ScoredEmployee {
        performance_score: breakdown.rating_component
            + breakdown.training_component
            + breakdown.award_bonus,
        record: record.clone(),
        breakdown,
    }
}

/// Score every record, preserving input order. Output length always
/// equals input length.
pub fn score_records(records: &[EmployeeRecord], config: &ScoringConfig) -> Vec<ScoredEmployee> {
    records.iter().map(|r| score_record(r, config)).collect()
}

/// Full ranking by performance score, descending. The sort is stable, so
/// equal scores keep their input order.
pub fn rank_employees(scored: &[ScoredEmployee]) -> Vec<ScoredEmployee> {
    let mut ranked = scored.to_vec();
    ranked.sort_by(|a, b| {
        b.performance_score
            .partial_cmp(&a.performance_score)
            .unwrap_or(Ordering::Equal)
    });
    ranked
}

/// Group scored employees by department and compute the summary row for
/// each. Groups materialize in first-occurrence order, which is what the
/// ranking step uses to break overall-score ties deterministically.
pub fn summarize_departments(
    scored: &[ScoredEmployee],
    config: &ScoringConfig,
) -> Vec<DepartmentSummary> {
    let dept = config.department.as_ref();
    let rating_weight = dept
        .and_then(|d| d.rating_weight)
        .unwrap_or(DEFAULT_DEPT_RATING_WEIGHT);
    let training_weight = dept
        .and_then(|d| d.training_weight)
        .unwrap_or(DEFAULT_DEPT_TRAINING_WEIGHT);

    struct Group {
        department: String,
        headcount: usize,
        rating_sum: f64,
        training_sum: f64,
    }

    let mut order: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();

    for employee in scored {
        let department = &employee.record.department;
        let slot = *order.entry(department.clone()).or_insert_with(|| {
            groups.push(Group {
                department: department.clone(),
                headcount: 0,
                rating_sum: 0.0,
                training_sum: 0.0,
            });
            groups.len() - 1
        });
        let group = &mut groups[slot];
        group.headcount += 1;
        group.rating_sum += employee.record.previous_year_rating;
        group.training_sum += employee.record.avg_training_score;
    }

    groups
        .into_iter()
        .map(|g| {
            let mean_rating = g.rating_sum / g.headcount as f64;
            let mean_training = g.training_sum / g.headcount as f64;
            DepartmentSummary {
                department: g.department,
                headcount: g.headcount,
                mean_previous_year_rating: mean_rating,
                mean_avg_training_score: mean_training,
                overall_score: mean_rating * rating_weight + mean_training * training_weight,
            }
        })
        .collect()
}

/// Full ranking by overall score, descending. Stable, so equal scores
/// keep first-occurrence order.
pub fn rank_departments(summaries: &[DepartmentSummary]) -> Vec<DepartmentSummary> {
    let mut ranked = summaries.to_vec();
    ranked.sort_by(|a, b| {
        b.overall_score
            .partial_cmp(&a.overall_score)
            .unwrap_or(Ordering::Equal)
    });
    ranked
}

/// Run the whole engine over a loaded table: score, rank both ways, and
/// apply the eligibility filter. Empty input yields empty collections.
pub fn build_report(records: &[EmployeeRecord], config: &ScoringConfig) -> ScoreReport {
    let scored = score_records(records, config);
    let ranked_employees = rank_employees(&scored);
    let ranked_departments = rank_departments(&summarize_departments(&scored, config));
    let eligible = filter_eligible(scored.clone(), config);

    ScoreReport {
        scored,
        ranked_employees,
        ranked_departments,
        eligible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(
        id: &str,
        dept: &str,
        rating: f64,
        training: f64,
        awards: bool,
        service: u32,
    ) -> EmployeeRecord {
        EmployeeRecord {
            employee_id: id.to_string(),
            department: dept.to_string(),
            previous_year_rating: rating,
            avg_training_score: training,
            awards_won: awards,
            length_of_service: service,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let records = vec![
            sample_record("1", "A", 5.0, 90.0, true, 4),
            sample_record("2", "A", 3.0, 70.0, false, 1),
        ];
        let report = build_report(&records, &ScoringConfig::default());

        // 5*0.5 + 90*0.4 + 10 = 48.5 and 3*0.5 + 70*0.4 = 29.5
        assert_eq!(report.scored[0].performance_score, 48.5);
        assert_eq!(report.scored[1].performance_score, 29.5);

        assert_eq!(report.ranked_departments.len(), 1);
        let dept = &report.ranked_departments[0];
        assert_eq!(dept.department, "A");
        assert_eq!(dept.mean_previous_year_rating, 4.0);
        assert_eq!(dept.mean_avg_training_score, 80.0);
        // 4.0*0.6 + 80.0*0.4 = 34.4
        assert!((dept.overall_score - 34.4).abs() < 1e-9);

        // Employee 2 fails the rating and service thresholds
        assert_eq!(report.eligible.len(), 1);
        assert_eq!(report.eligible[0].record.employee_id, "1");
    }

    #[test]
    fn test_scoring_preserves_count_and_order() {
        let records = vec![
            sample_record("E3", "Ops", 2.0, 50.0, false, 1),
            sample_record("E1", "HR", 4.0, 80.0, false, 5),
            sample_record("E2", "Ops", 3.0, 60.0, true, 2),
        ];
        let scored = score_records(&records, &ScoringConfig::default());
        assert_eq!(scored.len(), records.len());
        let ids: Vec<&str> = scored.iter().map(|s| s.record.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["E3", "E1", "E2"]);
    }

    #[test]
    fn test_score_monotone_in_each_input() {
        let config = ScoringConfig::default();
        let base = score_record(&sample_record("E", "A", 3.0, 70.0, false, 2), &config);

        let higher_rating = score_record(&sample_record("E", "A", 4.0, 70.0, false, 2), &config);
        assert!(higher_rating.performance_score > base.performance_score);

        let higher_training = score_record(&sample_record("E", "A", 3.0, 80.0, false, 2), &config);
        assert!(higher_training.performance_score > base.performance_score);

        let with_award = score_record(&sample_record("E", "A", 3.0, 70.0, true, 2), &config);
        assert!(with_award.performance_score > base.performance_score);
    }

    #[test]
    fn test_breakdown_components_sum_to_score() {
        let scored = score_record(
            &sample_record("E", "A", 5.0, 90.0, true, 4),
            &ScoringConfig::default(),
        );
        assert_eq!(scored.breakdown.rating_component, 2.5);
        assert_eq!(scored.breakdown.training_component, 36.0);
        assert_eq!(scored.breakdown.award_bonus, 10.0);
        assert_eq!(
            scored.performance_score,
            scored.breakdown.rating_component
                + scored.breakdown.training_component
                + scored.breakdown.award_bonus
        );
    }

    #[test]
    fn test_rank_employees_descending() {
        let records = vec![
            sample_record("low", "A", 1.0, 40.0, false, 1),
            sample_record("high", "A", 5.0, 95.0, true, 6),
            sample_record("mid", "A", 3.0, 70.0, false, 3),
        ];
        let ranked = rank_employees(&score_records(&records, &ScoringConfig::default()));
        let ids: Vec<&str> = ranked.iter().map(|s| s.record.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        // Identical inputs -> identical scores; stable sort keeps file order
        let records = vec![
            sample_record("first", "A", 3.0, 70.0, false, 2),
            sample_record("second", "B", 3.0, 70.0, false, 2),
            sample_record("third", "C", 3.0, 70.0, false, 2),
        ];
        let ranked = rank_employees(&score_records(&records, &ScoringConfig::default()));
        let ids: Vec<&str> = ranked.iter().map(|s| s.record.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_top_n_is_prefix_of_full_ranking() {
        let records = vec![
            sample_record("a", "A", 1.0, 40.0, false, 1),
            sample_record("b", "A", 5.0, 95.0, true, 6),
            sample_record("c", "A", 3.0, 70.0, false, 3),
            sample_record("d", "A", 4.0, 85.0, false, 4),
        ];
        let report = build_report(&records, &ScoringConfig::default());

        let top2 = report.top_employees(2);
        assert_eq!(top2.len(), 2);
        for (taken, full) in top2.iter().zip(report.ranked_employees.iter()) {
            assert_eq!(taken.record.employee_id, full.record.employee_id);
        }

        // N beyond the row count is the full ranking
        assert_eq!(report.top_employees(100).len(), 4);
    }

    #[test]
    fn test_department_grouping_interleaved() {
        let records = vec![
            sample_record("1", "A", 4.0, 80.0, false, 3),
            sample_record("2", "B", 2.0, 60.0, false, 1),
            sample_record("3", "A", 2.0, 60.0, false, 2),
        ];
        let summaries =
            summarize_departments(&score_records(&records, &ScoringConfig::default()), &ScoringConfig::default());

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].department, "A");
        assert_eq!(summaries[0].headcount, 2);
        assert_eq!(summaries[0].mean_previous_year_rating, 3.0);
        assert_eq!(summaries[0].mean_avg_training_score, 70.0);
        assert_eq!(summaries[1].department, "B");
        assert_eq!(summaries[1].headcount, 1);
    }

    #[test]
    fn test_department_means_reconstruct_column_sums() {
        let records = vec![
            sample_record("1", "A", 4.0, 81.0, false, 3),
            sample_record("2", "B", 2.5, 66.0, false, 1),
            sample_record("3", "A", 3.0, 72.0, false, 2),
            sample_record("4", "C", 5.0, 93.0, true, 7),
            sample_record("5", "B", 1.5, 44.0, false, 1),
        ];
        let config = ScoringConfig::default();
        let summaries = summarize_departments(&score_records(&records, &config), &config);

        let rating_sum: f64 = records.iter().map(|r| r.previous_year_rating).sum();
        let reconstructed: f64 = summaries
            .iter()
            .map(|s| s.headcount as f64 * s.mean_previous_year_rating)
            .sum();
        assert!((rating_sum - reconstructed).abs() < 1e-9);

        let training_sum: f64 = records.iter().map(|r| r.avg_training_score).sum();
        let reconstructed: f64 = summaries
            .iter()
            .map(|s| s.headcount as f64 * s.mean_avg_training_score)
            .sum();
        assert!((training_sum - reconstructed).abs() < 1e-9);
    }

    #[test]
    fn test_rank_departments_tie_keeps_first_occurrence() {
        // B and A have identical members, so identical overall scores;
        // B appears first in the input and must stay first
        let records = vec![
            sample_record("1", "B", 3.0, 70.0, false, 2),
            sample_record("2", "A", 3.0, 70.0, false, 2),
            sample_record("3", "Z", 5.0, 95.0, false, 2),
        ];
        let config = ScoringConfig::default();
        let ranked = rank_departments(&summarize_departments(
            &score_records(&records, &config),
            &config,
        ));
        let names: Vec<&str> = ranked.iter().map(|s| s.department.as_str()).collect();
        assert_eq!(names, vec!["Z", "B", "A"]);
    }

    #[test]
    fn test_empty_input_yields_empty_report() {
        let report = build_report(&[], &ScoringConfig::default());
        assert!(report.scored.is_empty());
        assert!(report.ranked_employees.is_empty());
        assert!(report.ranked_departments.is_empty());
        assert!(report.eligible.is_empty());
        assert!(report.top_employees(10).is_empty());
        assert!(report.top_departments(5).is_empty());
    }

    #[test]
    fn test_custom_weights_applied() {
        let config = ScoringConfig {
            rating_weight: Some(1.0),
            training_weight: Some(0.0),
            award_bonus: Some(0.0),
            department: None,
            eligibility: None,
        };
        let scored = score_record(&sample_record("E", "A", 4.0, 90.0, true, 2), &config);
        assert_eq!(scored.performance_score, 4.0);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let records = vec![
            sample_record("1", "A", 4.0, 81.0, true, 3),
            sample_record("2", "B", 2.5, 66.0, false, 1),
            sample_record("3", "A", 3.0, 72.0, false, 2),
        ];
        let config = ScoringConfig::default();
        let first = build_report(&records, &config);
        let second = build_report(&records, &config);

        let scores = |r: &ScoreReport| -> Vec<(String, f64)> {
            r.ranked_employees
                .iter()
                .map(|s| (s.record.employee_id.clone(), s.performance_score))
                .collect()
        };
        assert_eq!(scores(&first), scores(&second));
    }
}
