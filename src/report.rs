use std::path::Path;
use std::time::Instant;

use crate::data::cache::{load_cached, TableCache};
use crate::data::loader::LoadError;
use crate::scoring::{build_report, ScoreReport, ScoringConfig};

/// Run the full pipeline for one source: load the table (through the
/// cache), score every employee, rank employees and departments, and
/// apply the eligibility filter.
///
/// This is the entry point the CLI calls once per invocation; embedding
/// callers reuse it with a real cache to re-render without re-reading
/// the file.
pub fn run(
    source: &Path,
    cache: &dyn TableCache,
    scoring: &ScoringConfig,
    verbose: bool,
) -> Result<ScoreReport, LoadError> {
    let start = Instant::now();

    let table = load_cached(cache, source)?;
    if verbose {
        eprintln!(
            "Loaded {} records from {} in {:?}",
            table.len(),
            source.display(),
            start.elapsed()
        );
    }

    let report = build_report(&table, scoring);
    if verbose {
        eprintln!(
            "Scored {} employees across {} departments; {} eligible",
            report.scored.len(),
            report.ranked_departments.len(),
            report.eligible.len()
        );
    }

    Ok(report)
}
