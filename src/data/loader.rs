use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use super::types::EmployeeRecord;

/// Errors surfaced by the record loader. All shape and type problems are
/// reported here, at load time, so the scoring formulas only ever see
/// well-typed rows.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data source not found or unreadable: {}", .path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("data source malformed: {reason}")]
    Malformed { reason: String },
}

/// Raw CSV row as it appears in the file. `previous_year_rating` may be
/// empty on input; everything else is required. Column names are exact,
/// including the trailing `?` on the awards flag.
#[derive(Debug, Deserialize)]
struct RawRecord {
    employee_id: String,
    department: String,
    previous_year_rating: Option<f64>,
    avg_training_score: f64,
    #[serde(rename = "awards_won?", deserialize_with = "de_flag")]
    awards_won: bool,
    length_of_service: u32,
}

/// Accept the 0/1 encoding used by the export as well as plain booleans.
fn de_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim() {
        "0" | "false" | "False" => Ok(false),
        "1" | "true" | "True" => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "expected 0/1 or true/false, got '{}'",
            other
        ))),
    }
}

/// Load all employee records from a CSV file on disk.
///
/// Any missing `previous_year_rating` is replaced by the median of the
/// values observed in the same file, computed once before replacement.
/// Zero data rows is not an error; the result is simply empty.
pub fn load_records(path: &Path) -> Result<Vec<EmployeeRecord>, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::SourceNotFound {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_records(file)
}

/// Parse employee records from any reader. Split out from [`load_records`]
/// so tests can feed in-memory CSV without touching the filesystem.
pub fn parse_records<R: io::Read>(reader: R) -> Result<Vec<EmployeeRecord>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut raw_rows = Vec::new();
    for (i, row) in csv_reader.deserialize::<RawRecord>().enumerate() {
        // +2: 1-based line numbers, after the header row
        let row = row.map_err(|e| LoadError::Malformed {
            reason: format!("row {}: {}", i + 2, e),
        })?;
        raw_rows.push(row);
    }

    // Median over as-loaded values only; missing entries do not influence it
    let rating_median = if raw_rows.iter().any(|r| r.previous_year_rating.is_none()) {
        let observed: Vec<f64> = raw_rows
            .iter()
            .filter_map(|r| r.previous_year_rating)
            .collect();
        Some(median(&observed).ok_or_else(|| LoadError::Malformed {
            reason: "previous_year_rating is missing in every row; median is undefined".to_string(),
        })?)
    } else {
        None
    };

    Ok(raw_rows
        .into_iter()
        .map(|raw| EmployeeRecord {
            employee_id: raw.employee_id,
            department: raw.department,
            previous_year_rating: raw
                .previous_year_rating
                .or(rating_median)
                .expect("imputation median computed whenever a rating is missing"),
            avg_training_score: raw.avg_training_score,
            awards_won: raw.awards_won,
            length_of_service: raw.length_of_service,
        })
        .collect())
}

/// Median of a slice; `None` when empty. Even counts take the mean of the
/// two middle values.
fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "employee_id,department,previous_year_rating,avg_training_score,awards_won?,length_of_service\n";

    fn parse(rows: &str) -> Result<Vec<EmployeeRecord>, LoadError> {
        parse_records(format!("{}{}", HEADER, rows).as_bytes())
    }

    #[test]
    fn test_parse_basic_rows() {
        let records = parse("E1,Analytics,5,90,1,4\nE2,Analytics,3,70,0,1\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].employee_id, "E1");
        assert_eq!(records[0].department, "Analytics");
        assert_eq!(records[0].previous_year_rating, 5.0);
        assert_eq!(records[0].avg_training_score, 90.0);
        assert!(records[0].awards_won);
        assert_eq!(records[0].length_of_service, 4);
        assert!(!records[1].awards_won);
    }

    #[test]
    fn test_input_order_preserved() {
        let records = parse("E3,Ops,2,50,0,1\nE1,HR,4,80,0,5\nE2,Ops,3,60,1,2\n").unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["E3", "E1", "E2"]);
    }

    #[test]
    fn test_missing_rating_imputed_with_median() {
        // Observed ratings [3, 5] -> median 4, assigned to the empty cell
        let records = parse("E1,Ops,3,70,0,2\nE2,Ops,5,90,1,6\nE3,Ops,,60,0,3\n").unwrap();
        assert_eq!(records[2].previous_year_rating, 4.0);
        // Present values are untouched
        assert_eq!(records[0].previous_year_rating, 3.0);
        assert_eq!(records[1].previous_year_rating, 5.0);
    }

    #[test]
    fn test_median_odd_count() {
        let records = parse("E1,Ops,1,70,0,2\nE2,Ops,3,70,0,2\nE3,Ops,5,70,0,2\nE4,Ops,,70,0,2\n")
            .unwrap();
        assert_eq!(records[3].previous_year_rating, 3.0);
    }

    #[test]
    fn test_missing_values_do_not_influence_median() {
        // Two missing rows; median still comes from [3, 5] only
        let records = parse("E1,Ops,3,70,0,2\nE2,Ops,,70,0,2\nE3,Ops,5,70,0,2\nE4,Ops,,70,0,2\n")
            .unwrap();
        assert_eq!(records[1].previous_year_rating, 4.0);
        assert_eq!(records[3].previous_year_rating, 4.0);
    }

    #[test]
    fn test_all_ratings_missing_is_malformed() {
        let err = parse("E1,Ops,,70,0,2\nE2,Ops,,60,0,1\n").unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
        assert!(err.to_string().contains("previous_year_rating"));
    }

    #[test]
    fn test_zero_rows_is_empty_not_error() {
        let records = parse("").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_column_is_malformed() {
        let csv = "employee_id,department,previous_year_rating,avg_training_score,awards_won?\n\
                   E1,Ops,3,70,0\n";
        let err = parse_records(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn test_unparsable_field_is_malformed() {
        let err = parse("E1,Ops,3,not-a-number,0,2\n").unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_awards_accepts_boolean_words() {
        let records = parse("E1,Ops,3,70,true,2\nE2,Ops,4,80,false,3\n").unwrap();
        assert!(records[0].awards_won);
        assert!(!records[1].awards_won);
    }

    #[test]
    fn test_awards_rejects_other_values() {
        let err = parse("E1,Ops,3,70,yes,2\n").unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn test_extra_columns_ignored() {
        let csv = "employee_id,department,previous_year_rating,avg_training_score,awards_won?,length_of_service,region\n\
                   E1,Ops,3,70,0,2,EMEA\n";
        let records = parse_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_source_not_found() {
        let err = load_records(Path::new("no-such-dir/employees.csv")).unwrap_err();
        assert!(matches!(err, LoadError::SourceNotFound { .. }));
    }

    #[test]
    fn test_median_helper() {
        assert_eq!(median(&[]), None);
        assert_eq!(median(&[2.0]), Some(2.0));
        assert_eq!(median(&[3.0, 5.0]), Some(4.0));
        assert_eq!(median(&[5.0, 1.0, 3.0]), Some(3.0));
        assert_eq!(median(&[4.0, 1.0, 2.0, 3.0]), Some(2.5));
    }
}
