use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::scoring::{DepartmentSummary, ScoredEmployee};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score with one decimal, trimming a trailing ".0"
/// (48.5 -> "48.5", 29.0 -> "29")
pub fn format_score(score: f64) -> String {
    let formatted = format!("{:.1}", score);
    match formatted.strip_suffix(".0") {
        Some(trimmed) => trimmed.to_string(),
        None => formatted,
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a label to fit available width, accounting for Unicode
fn truncate_label(label: &str, max_width: usize) -> String {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() <= max_width {
        label.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

const INDEX_WIDTH: usize = 3;
const SCORE_WIDTH: usize = 7;
const SEPARATOR: &str = "  ";

/// Format ranked employees as a table: Index, Score, Id, Department,
/// rating/training/service detail, award marker. No headers.
pub fn format_employee_table(employees: &[ScoredEmployee], use_colors: bool) -> String {
    if employees.is_empty() {
        return "No employee records found.".to_string();
    }

    let term_width = get_terminal_width();
    let id_width = employees
        .iter()
        .map(|e| e.record.employee_id.chars().count())
        .max()
        .unwrap_or(0);

    employees
        .iter()
        .enumerate()
        .map(|(idx, employee)| {
            let record = &employee.record;
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!(
                "{:>width$}",
                format_score(employee.performance_score),
                width = SCORE_WIDTH
            );
            let id_padded = format!("{:<width$}", record.employee_id, width = id_width);
            let marker = if record.awards_won { " *" } else { "" };
            let detail = format!(
                "{:>4.1} {:>3.0} {:>2}y{}",
                record.previous_year_rating,
                record.avg_training_score,
                record.length_of_service,
                marker
            );

            // Department takes whatever width remains on narrow terminals
            let fixed_width =
                INDEX_WIDTH + 1 + SCORE_WIDTH + id_width + detail.len() + SEPARATOR.len() * 3;
            let department = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_label(&record.department, width - fixed_width)
                } else {
                    truncate_label(&record.department, 20)
                }
            } else {
                record.department.clone()
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    score_padded.bold(),
                    SEPARATOR,
                    id_padded.cyan(),
                    SEPARATOR,
                    department,
                    SEPARATOR,
                    detail
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str, score_padded, SEPARATOR, id_padded, SEPARATOR, department,
                    SEPARATOR, detail
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single employee with detailed multi-line output (for verbose mode)
pub fn format_employee_detail(employee: &ScoredEmployee, use_colors: bool) -> String {
    let record = &employee.record;
    let awards = if record.awards_won { "yes" } else { "no" };
    let score_line = format!(
        "{} (rating {} + training {} + award {})",
        format_score(employee.performance_score),
        format_score(employee.breakdown.rating_component),
        format_score(employee.breakdown.training_component),
        format_score(employee.breakdown.award_bonus)
    );

    if use_colors {
        format!(
            "{}\n  Department: {}\n  Rating: {:.1}\n  Training score: {:.0}\n  Service: {}y\n  Awards: {}\n  Score: {}",
            record.employee_id.bold(),
            record.department.cyan(),
            record.previous_year_rating,
            record.avg_training_score,
            record.length_of_service,
            awards,
            score_line.bold()
        )
    } else {
        format!(
            "{}\n  Department: {}\n  Rating: {:.1}\n  Training score: {:.0}\n  Service: {}y\n  Awards: {}\n  Score: {}",
            record.employee_id,
            record.department,
            record.previous_year_rating,
            record.avg_training_score,
            record.length_of_service,
            awards,
            score_line
        )
    }
}

/// Format ranked departments as a table: Index, Overall score, Name,
/// mean rating/training, headcount. No headers.
pub fn format_department_table(departments: &[DepartmentSummary], use_colors: bool) -> String {
    if departments.is_empty() {
        return "No departments found.".to_string();
    }

    let name_width = departments
        .iter()
        .map(|d| d.department.chars().count())
        .max()
        .unwrap_or(0);

    departments
        .iter()
        .enumerate()
        .map(|(idx, dept)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!(
                "{:>width$}",
                format_score(dept.overall_score),
                width = SCORE_WIDTH
            );
            let name_padded = format!("{:<width$}", dept.department, width = name_width);
            let detail = format!(
                "rating {:>4.2}  training {:>5.2}  {} people",
                dept.mean_previous_year_rating, dept.mean_avg_training_score, dept.headcount
            );

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    index_str.dimmed(),
                    score_padded.bold(),
                    SEPARATOR,
                    name_padded.cyan(),
                    SEPARATOR,
                    detail
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    index_str, score_padded, SEPARATOR, name_padded, SEPARATOR, detail
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the eligible subset. Not a ranking: rows keep their input
/// order, and no score column is shown.
pub fn format_eligible_table(employees: &[ScoredEmployee], use_colors: bool) -> String {
    if employees.is_empty() {
        return "No employees meet the eligibility criteria.".to_string();
    }

    let id_width = employees
        .iter()
        .map(|e| e.record.employee_id.chars().count())
        .max()
        .unwrap_or(0);

    employees
        .iter()
        .enumerate()
        .map(|(idx, employee)| {
            let record = &employee.record;
            let index_str = format!("{:>2}.", idx + 1);
            let id_padded = format!("{:<width$}", record.employee_id, width = id_width);
            let detail = format!(
                "rating {:>3.1}  training {:>3.0}  service {}y",
                record.previous_year_rating, record.avg_training_score, record.length_of_service
            );

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    index_str.dimmed(),
                    id_padded.cyan(),
                    SEPARATOR,
                    record.department,
                    SEPARATOR,
                    detail
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    index_str, id_padded, SEPARATOR, record.department, SEPARATOR, detail
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format employees as tab-separated values for scripting
/// Columns: score, id, department, rating, training, awards, service
/// (no headers, no colors)
pub fn format_employee_tsv(employees: &[ScoredEmployee]) -> String {
    if employees.is_empty() {
        return String::new();
    }

    employees
        .iter()
        .map(|employee| {
            let record = &employee.record;
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                format_score(employee.performance_score),
                record.employee_id,
                record.department,
                record.previous_year_rating,
                record.avg_training_score,
                u8::from(record.awards_won),
                record.length_of_service
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format departments as tab-separated values for scripting
/// Columns: overall score, department, mean rating, mean training, headcount
pub fn format_department_tsv(departments: &[DepartmentSummary]) -> String {
    if departments.is_empty() {
        return String::new();
    }

    departments
        .iter()
        .map(|dept| {
            format!(
                "{}\t{}\t{:.2}\t{:.2}\t{}",
                format_score(dept.overall_score),
                dept.department,
                dept.mean_previous_year_rating,
                dept.mean_avg_training_score,
                dept.headcount
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
