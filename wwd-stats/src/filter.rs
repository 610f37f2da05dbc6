//! Record filtering by date and point selection.

use chrono::NaiveDate;
use wwd_veg::record::VegetationRecord;

/// Subset of records taken on exactly the given date, in their original
/// relative order. An empty result is a valid display state, not an error.
pub fn filter_by_date(records: &[VegetationRecord], date: NaiveDate) -> Vec<VegetationRecord> {
    records.iter().filter(|r| r.date == date).cloned().collect()
}

/// Combined filter: an optional inclusive date range and an optional
/// point selection. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub point_id: Option<String>,
}

impl RecordFilter {
    /// Filter for a single day.
    pub fn on_date(date: NaiveDate) -> Self {
        RecordFilter {
            start_date: Some(date),
            end_date: Some(date),
            point_id: None,
        }
    }

    /// Filter for an inclusive date range.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        RecordFilter {
            start_date: Some(start),
            end_date: Some(end),
            point_id: None,
        }
    }

    /// Restrict the filter to a single monitored point.
    pub fn with_point(mut self, point_id: impl Into<String>) -> Self {
        self.point_id = Some(point_id.into());
        self
    }

    pub fn matches(&self, record: &VegetationRecord) -> bool {
        if let Some(start) = self.start_date {
            if record.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if record.date > end {
                return false;
            }
        }
        if let Some(point_id) = &self.point_id {
            if record.point_id != *point_id {
                return false;
            }
        }
        true
    }

    /// Matching subset of `records`, original relative order preserved.
    pub fn apply(&self, records: &[VegetationRecord]) -> Vec<VegetationRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(point_id: &str, day: u32, ndvi: f64) -> VegetationRecord {
        VegetationRecord {
            point_id: point_id.to_string(),
            latitude: 47.55,
            longitude: 12.98,
            date: NaiveDate::from_ymd_opt(2023, 6, day).unwrap(),
            ndvi,
            ndwi: 0.3,
            evi: 0.4,
        }
    }

    fn sample() -> Vec<VegetationRecord> {
        vec![
            record("P1", 1, 0.5),
            record("P2", 1, 0.7),
            record("P1", 2, 0.6),
            record("P2", 3, 0.4),
        ]
    }

    #[test]
    fn filter_by_date_keeps_matching_rows_in_order() {
        let records = sample();
        let day1 = filter_by_date(&records, NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
        assert_eq!(day1.len(), 2);
        assert_eq!(day1[0].point_id, "P1");
        assert_eq!(day1[1].point_id, "P2");
    }

    #[test]
    fn filter_by_absent_date_is_empty() {
        let records = sample();
        let missing = filter_by_date(&records, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(missing.is_empty());
    }

    #[test]
    fn spec_example_single_day() {
        let records = vec![record("P1", 1, 0.5), record("P1", 2, 0.6)];
        let day1 = filter_by_date(&records, NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
        assert_eq!(day1.len(), 1);
        assert_eq!(day1[0].ndvi, 0.5);
    }

    #[test]
    fn range_filter_is_inclusive() {
        let records = sample();
        let filter = RecordFilter::between(
            NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 6, 2).unwrap(),
        );
        let subset = filter.apply(&records);
        assert_eq!(subset.len(), 3);
    }

    #[test]
    fn point_filter_selects_one_point() {
        let records = sample();
        let filter = RecordFilter::default().with_point("P2");
        let subset = filter.apply(&records);
        assert_eq!(subset.len(), 2);
        assert!(subset.iter().all(|r| r.point_id == "P2"));
    }

    #[test]
    fn combined_date_and_point_filter() {
        let records = sample();
        let filter =
            RecordFilter::on_date(NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()).with_point("P2");
        let subset = filter.apply(&records);
        assert_eq!(subset.len(), 1);
        assert_eq!(subset[0].ndvi, 0.7);
    }

    #[test]
    fn default_filter_matches_everything() {
        let records = sample();
        let subset = RecordFilter::default().apply(&records);
        assert_eq!(subset, records);
    }
}
