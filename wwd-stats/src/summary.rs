//! Descriptive statistics per vegetation index.

use serde::Serialize;
use wwd_veg::record::{VegIndex, VegetationRecord};

/// Count, mean, min, and max for one index over a record subset.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct IndexStats {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Statistics for one index, or an explicit "no data" marker when the
/// input subset was empty. Empty input is a display state, never an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndexSummary {
    NoData,
    Stats(IndexStats),
}

impl IndexSummary {
    pub fn stats(&self) -> Option<&IndexStats> {
        match self {
            IndexSummary::NoData => None,
            IndexSummary::Stats(stats) => Some(stats),
        }
    }
}

/// Per-index summary of a record subset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    ndvi: IndexSummary,
    ndwi: IndexSummary,
    evi: IndexSummary,
}

impl Summary {
    pub fn get(&self, index: VegIndex) -> &IndexSummary {
        match index {
            VegIndex::Ndvi => &self.ndvi,
            VegIndex::Ndwi => &self.ndwi,
            VegIndex::Evi => &self.evi,
        }
    }

    /// All indices with their summaries, in display order.
    pub fn rows(&self) -> Vec<(VegIndex, IndexSummary)> {
        VegIndex::ALL
            .iter()
            .map(|&index| (index, *self.get(index)))
            .collect()
    }
}

/// Summarize a record subset: mean, min, and max per index.
///
/// An empty subset yields `IndexSummary::NoData` for all three indices
/// rather than dividing by zero.
pub fn summarize(records: &[VegetationRecord]) -> Summary {
    Summary {
        ndvi: summarize_index(records, VegIndex::Ndvi),
        ndwi: summarize_index(records, VegIndex::Ndwi),
        evi: summarize_index(records, VegIndex::Evi),
    }
}

fn summarize_index(records: &[VegetationRecord], index: VegIndex) -> IndexSummary {
    if records.is_empty() {
        return IndexSummary::NoData;
    }

    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for record in records {
        let value = record.index_value(index);
        sum += value;
        min = min.min(value);
        max = max.max(value);
    }

    IndexSummary::Stats(IndexStats {
        count: records.len(),
        mean: sum / records.len() as f64,
        min,
        max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: u32, ndvi: f64, ndwi: f64, evi: f64) -> VegetationRecord {
        VegetationRecord {
            point_id: "P1".to_string(),
            latitude: 47.55,
            longitude: 12.98,
            date: NaiveDate::from_ymd_opt(2023, 6, day).unwrap(),
            ndvi,
            ndwi,
            evi,
        }
    }

    #[test]
    fn spec_example_full_set() {
        let records = vec![record(1, 0.5, 0.3, 0.4), record(2, 0.6, 0.2, 0.5)];
        let summary = summarize(&records);
        let ndvi = summary.get(VegIndex::Ndvi).stats().unwrap();
        assert!((ndvi.mean - 0.55).abs() < 1e-12);
        assert_eq!(ndvi.min, 0.5);
        assert_eq!(ndvi.max, 0.6);
        assert_eq!(ndvi.count, 2);
    }

    #[test]
    fn all_three_indices_are_summarized() {
        let records = vec![record(1, 0.5, 0.3, 0.4), record(2, 0.6, 0.2, 0.5)];
        let summary = summarize(&records);
        let ndwi = summary.get(VegIndex::Ndwi).stats().unwrap();
        assert_eq!(ndwi.min, 0.2);
        assert_eq!(ndwi.max, 0.3);
        let evi = summary.get(VegIndex::Evi).stats().unwrap();
        assert!((evi.mean - 0.45).abs() < 1e-12);
    }

    #[test]
    fn min_mean_max_ordering_holds() {
        let records = vec![
            record(1, 0.12, -0.4, 0.05),
            record(2, 0.83, 0.1, 0.61),
            record(3, 0.47, 0.9, 0.33),
            record(4, -0.2, 0.2, 0.18),
        ];
        let summary = summarize(&records);
        for (_, index_summary) in summary.rows() {
            let stats = index_summary.stats().unwrap();
            assert!(stats.min <= stats.mean);
            assert!(stats.mean <= stats.max);
        }
    }

    #[test]
    fn empty_subset_reports_no_data_for_every_index() {
        let summary = summarize(&[]);
        for (_, index_summary) in summary.rows() {
            assert_eq!(index_summary, IndexSummary::NoData);
            assert!(index_summary.stats().is_none());
        }
    }

    #[test]
    fn single_record_is_its_own_min_mean_max() {
        let records = vec![record(1, 0.42, 0.1, 0.3)];
        let stats = *summarize(&records).get(VegIndex::Ndvi).stats().unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.mean, 0.42);
        assert_eq!(stats.min, 0.42);
        assert_eq!(stats.max, 0.42);
    }

    #[test]
    fn rows_follow_display_order() {
        let records = vec![record(1, 0.5, 0.3, 0.4)];
        let summary = summarize(&records);
        let order: Vec<VegIndex> = summary.rows().iter().map(|(i, _)| *i).collect();
        assert_eq!(order, vec![VegIndex::Ndvi, VegIndex::Ndwi, VegIndex::Evi]);
    }
}
