//! Dataset loading: parse a vegetation-index CSV into an immutable,
//! in-memory record set.
//!
//! The dataset is loaded once at startup and never mutated for the life
//! of a session. Columns are resolved by header name (case-insensitive,
//! with a few aliases for the short `lat`/`lon` forms used by the sample
//! data); a file missing a required column fails to load, as does any row
//! with an unparsable date or a non-numeric index value.

use crate::error::DataLoadError;
use crate::point::MonitoredPoint;
use crate::record::{VegetationRecord, DATE_FORMAT};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

/// Resolved column indices for one dataset file.
struct Columns {
    point_id: usize,
    latitude: usize,
    longitude: usize,
    date: usize,
    ndvi: usize,
    ndwi: usize,
    evi: usize,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self, DataLoadError> {
        let find = |aliases: &[&str], column: &'static str| -> Result<usize, DataLoadError> {
            headers
                .iter()
                .position(|h| {
                    let h = h.trim();
                    aliases.iter().any(|a| h.eq_ignore_ascii_case(a))
                })
                .ok_or(DataLoadError::MissingColumn { column })
        };

        Ok(Columns {
            point_id: find(&["point_id", "id", "point"], "point_id")?,
            latitude: find(&["latitude", "lat"], "latitude")?,
            longitude: find(&["longitude", "lon", "lng"], "longitude")?,
            date: find(&["date"], "date")?,
            ndvi: find(&["ndvi"], "ndvi")?,
            ndwi: find(&["ndwi"], "ndwi")?,
            evi: find(&["evi"], "evi")?,
        })
    }
}

/// An immutable collection of vegetation records for one dashboard session.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<VegetationRecord>,
}

impl Dataset {
    /// Load a dataset from a CSV file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let csv_data = std::fs::read_to_string(path)?;
        Self::from_csv(&csv_data)
    }

    /// Parse a dataset from CSV text.
    ///
    /// This is the entry point for the WASM dashboard, which embeds the
    /// CSV at compile time via `include_str!`.
    pub fn from_csv(csv_data: &str) -> Result<Self, DataLoadError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv_data.as_bytes());

        let columns = Columns::from_headers(rdr.headers()?)?;

        let mut records = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let row = result?;
            // 1-based line number, accounting for the header row
            let line = (i + 2) as u64;
            records.push(parse_row(&row, &columns, line)?);
        }

        log::info!("loaded {} vegetation records", records.len());
        Ok(Dataset { records })
    }

    /// The full record sequence in file order.
    pub fn records(&self) -> &[VegetationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted distinct dates present in the dataset.
    ///
    /// Drives the dashboard date selector, which only offers dates that
    /// actually have readings.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.records
            .iter()
            .map(|r| r.date)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct monitored points in first-seen order.
    pub fn points(&self) -> Vec<MonitoredPoint> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.point_id.clone()))
            .map(|r| MonitoredPoint {
                point_id: r.point_id.clone(),
                latitude: r.latitude,
                longitude: r.longitude,
            })
            .collect()
    }

    /// Earliest and latest date in the dataset, if any.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.records.iter().map(|r| r.date).min()?;
        let max = self.records.iter().map(|r| r.date).max()?;
        Some((min, max))
    }
}

fn parse_row(
    row: &StringRecord,
    columns: &Columns,
    line: u64,
) -> Result<VegetationRecord, DataLoadError> {
    let field = |idx: usize| row.get(idx).unwrap_or("").trim();

    let number = |idx: usize, column: &'static str| -> Result<f64, DataLoadError> {
        let raw = field(idx);
        raw.parse().map_err(|_| DataLoadError::InvalidNumber {
            line,
            column,
            value: raw.to_string(),
        })
    };

    let raw_date = field(columns.date);
    let date =
        NaiveDate::parse_from_str(raw_date, DATE_FORMAT).map_err(|_| DataLoadError::InvalidDate {
            line,
            value: raw_date.to_string(),
        })?;

    Ok(VegetationRecord {
        point_id: field(columns.point_id).to_string(),
        latitude: number(columns.latitude, "latitude")?,
        longitude: number(columns.longitude, "longitude")?,
        date,
        ndvi: number(columns.ndvi, "ndvi")?,
        ndwi: number(columns.ndwi, "ndwi")?,
        evi: number(columns.evi, "evi")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
point_id,lat,lon,date,NDVI,NDWI,EVI
P1,47.5550,12.9810,2023-06-01,0.5,0.30,0.42
P2,47.5622,12.9935,2023-06-01,0.65,0.35,0.55
P1,47.5550,12.9810,2023-06-02,0.6,0.31,0.50
";

    #[test]
    fn load_returns_one_record_per_data_row() {
        let dataset = Dataset::from_csv(SAMPLE_CSV).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.records()[0].point_id, "P1");
        assert_eq!(dataset.records()[0].ndvi, 0.5);
    }

    #[test]
    fn records_keep_file_order() {
        let dataset = Dataset::from_csv(SAMPLE_CSV).unwrap();
        let ids: Vec<&str> = dataset
            .records()
            .iter()
            .map(|r| r.point_id.as_str())
            .collect();
        assert_eq!(ids, vec!["P1", "P2", "P1"]);
    }

    #[test]
    fn long_header_names_are_accepted() {
        let csv = "\
id,latitude,longitude,date,ndvi,ndwi,evi
K9,47.1,12.9,2023-07-04,0.4,0.2,0.3
";
        let dataset = Dataset::from_csv(csv).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].latitude, 47.1);
    }

    #[test]
    fn missing_column_is_a_load_error() {
        let csv = "\
point_id,lat,lon,date,NDVI,NDWI
P1,47.5,12.9,2023-06-01,0.5,0.3
";
        let err = Dataset::from_csv(csv).unwrap_err();
        match err {
            DataLoadError::MissingColumn { column } => assert_eq!(column, "evi"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn unparsable_date_is_a_load_error() {
        let csv = "\
point_id,lat,lon,date,NDVI,NDWI,EVI
P1,47.5,12.9,06/01/2023,0.5,0.3,0.4
";
        let err = Dataset::from_csv(csv).unwrap_err();
        match err {
            DataLoadError::InvalidDate { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "06/01/2023");
            }
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_index_is_a_load_error() {
        let csv = "\
point_id,lat,lon,date,NDVI,NDWI,EVI
P1,47.5,12.9,2023-06-01,n/a,0.3,0.4
";
        let err = Dataset::from_csv(csv).unwrap_err();
        match err {
            DataLoadError::InvalidNumber { line, column, .. } => {
                assert_eq!(line, 2);
                assert_eq!(column, "ndvi");
            }
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_index_values_pass_through() {
        let csv = "\
point_id,lat,lon,date,NDVI,NDWI,EVI
P1,47.5,12.9,2023-06-01,1.7,-1.3,0.4
";
        let dataset = Dataset::from_csv(csv).unwrap();
        assert_eq!(dataset.records()[0].ndvi, 1.7);
        assert_eq!(dataset.records()[0].ndwi, -1.3);
    }

    #[test]
    fn dates_are_sorted_and_distinct() {
        let dataset = Dataset::from_csv(SAMPLE_CSV).unwrap();
        let dates = dataset.dates();
        assert_eq!(dates.len(), 2);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
        assert_eq!(dates[1], NaiveDate::from_ymd_opt(2023, 6, 2).unwrap());
    }

    #[test]
    fn points_are_distinct_in_first_seen_order() {
        let dataset = Dataset::from_csv(SAMPLE_CSV).unwrap();
        let points = dataset.points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].point_id, "P1");
        assert_eq!(points[1].point_id, "P2");
        assert_eq!(points[0].latitude, 47.5550);
    }

    #[test]
    fn date_range_spans_the_dataset() {
        let dataset = Dataset::from_csv(SAMPLE_CSV).unwrap();
        let (min, max) = dataset.date_range().unwrap();
        assert_eq!(min, NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
        assert_eq!(max, NaiveDate::from_ymd_opt(2023, 6, 2).unwrap());
    }

    #[test]
    fn empty_dataset_has_no_date_range() {
        let csv = "point_id,lat,lon,date,NDVI,NDWI,EVI\n";
        let dataset = Dataset::from_csv(csv).unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.date_range().is_none());
        assert!(dataset.dates().is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Dataset::load("/nonexistent/sample_ndvi_data.csv").unwrap_err();
        assert!(matches!(err, DataLoadError::Io(_)));
    }
}
