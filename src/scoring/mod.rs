pub mod config;
pub mod eligibility;
pub mod engine;
pub mod validation;

pub use config::*;
pub use eligibility::{filter_eligible, is_eligible};
pub use engine::{
    build_report, rank_departments, rank_employees, score_record, score_records,
    summarize_departments, DepartmentSummary, ScoreReport, ScoredEmployee,
};
pub use validation::validate_scoring;
