use clap::ValueEnum;

use crate::scoring::ScoredEmployee;

/// Numeric columns of the scored table available for ad-hoc exploration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatsColumn {
    PerformanceScore,
    Rating,
    TrainingScore,
    Service,
}

impl StatsColumn {
    pub fn label(&self) -> &'static str {
        match self {
            StatsColumn::PerformanceScore => "performance_score",
            StatsColumn::Rating => "previous_year_rating",
            StatsColumn::TrainingScore => "avg_training_score",
            StatsColumn::Service => "length_of_service",
        }
    }
}

/// Extract one numeric column from the scored table, in table order.
pub fn column_values(scored: &[ScoredEmployee], column: StatsColumn) -> Vec<f64> {
    scored
        .iter()
        .map(|s| match column {
            StatsColumn::PerformanceScore => s.performance_score,
            StatsColumn::Rating => s.record.previous_year_rating,
            StatsColumn::TrainingScore => s.record.avg_training_score,
            StatsColumn::Service => f64::from(s.record.length_of_service),
        })
        .collect()
}

/// Descriptive statistics over one column.
#[derive(Debug, PartialEq)]
pub struct Describe {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

/// Compute descriptive statistics; `None` when there are no values.
pub fn describe(values: &[f64]) -> Option<Describe> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let count = sorted.len();
    let mid = count / 2;
    let median = if count % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    Some(Describe {
        count,
        mean: sorted.iter().sum::<f64>() / count as f64,
        min: sorted[0],
        median,
        max: sorted[count - 1],
    })
}

/// One-line summary for the stats view
pub fn format_describe(column: StatsColumn, stats: &Describe) -> String {
    format!(
        "{}: count {}  mean {:.2}  min {:.2}  median {:.2}  max {:.2}",
        column.label(),
        stats.count,
        stats.mean,
        stats.min,
        stats.median,
        stats.max
    )
}

/// Fixed-width text histogram over equal-width bins between the observed
/// min and max. Bars scale to the most populated bin.
pub fn format_histogram(values: &[f64], bins: usize, width: usize) -> String {
    if values.is_empty() {
        return "No values to plot.".to_string();
    }

    let bins = bins.max(1);
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    let mut counts = vec![0usize; bins];
    for &value in values {
        let slot = if span == 0.0 {
            0
        } else {
            (((value - min) / span) * bins as f64) as usize
        };
        // The max value lands exactly on the upper edge; fold it into the last bin
        counts[slot.min(bins - 1)] += 1;
    }

    let peak = *counts.iter().max().unwrap_or(&1);

    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let lo = min + span * i as f64 / bins as f64;
            let hi = min + span * (i + 1) as f64 / bins as f64;
            let bar_len = if count == 0 {
                0
            } else {
                (((count * width) as f64 / peak as f64).round() as usize).max(1)
            };
            format!(
                "{:>8.1} - {:<8.1} {:<bar_width$}  {}",
                lo,
                hi,
                "#".repeat(bar_len),
                count,
                bar_width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
