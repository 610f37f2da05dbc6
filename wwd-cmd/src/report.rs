//! Dataset inspection reports for the CLI.

use anyhow::Context;
use chrono::NaiveDate;
use log::info;
use wwd_stats::filter::RecordFilter;
use wwd_stats::summary::summarize;
use wwd_veg::dataset::Dataset;
use wwd_veg::record::{VegetationRecord, DATE_FORMAT};

/// Print per-index summary statistics for a dataset, optionally filtered
/// to a single date and/or point.
pub fn run_summary(
    dataset_csv: &str,
    date: Option<&str>,
    point: Option<&str>,
) -> anyhow::Result<()> {
    let dataset = Dataset::load(dataset_csv)?;
    info!("{}: {} records", dataset_csv, dataset.len());

    let mut filter = RecordFilter::default();
    if let Some(raw) = date {
        let parsed = NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .with_context(|| format!("invalid --date '{raw}', expected YYYY-MM-DD"))?;
        filter.start_date = Some(parsed);
        filter.end_date = Some(parsed);
    }
    if let Some(point_id) = point {
        filter.point_id = Some(point_id.to_string());
    }

    let rows = filter.apply(dataset.records());
    println!("{} matching records", rows.len());
    for line in summary_lines(&rows) {
        println!("{line}");
    }
    Ok(())
}

/// Text rows for a per-index summary report, one per index.
pub fn summary_lines(records: &[VegetationRecord]) -> Vec<String> {
    summarize(records)
        .rows()
        .iter()
        .map(|(index, index_summary)| match index_summary.stats() {
            Some(stats) => format!(
                "{}: count={} mean={:.3} min={:.3} max={:.3}",
                index.label(),
                stats.count,
                stats.mean,
                stats.min,
                stats.max
            ),
            None => format!("{}: no data available", index.label()),
        })
        .collect()
}

/// Print the distinct dates present in a dataset, one per line.
pub fn run_dates(dataset_csv: &str) -> anyhow::Result<()> {
    let dataset = Dataset::load(dataset_csv)?;
    for date in dataset.dates() {
        println!("{}", date.format(DATE_FORMAT));
    }
    Ok(())
}

/// Print the monitored points in a dataset with their coordinates.
pub fn run_points(dataset_csv: &str) -> anyhow::Result<()> {
    let dataset = Dataset::load(dataset_csv)?;
    for point in dataset.points() {
        println!(
            "{} {:.4} {:.4}",
            point.point_id, point.latitude, point.longitude
        );
    }
    Ok(())
}
