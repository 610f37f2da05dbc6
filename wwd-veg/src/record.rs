use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

/// Date format used in dataset files: "YYYY-MM-DD" (ISO 8601).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The three vegetation indices carried by every record.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum VegIndex {
    Ndvi,
    Ndwi,
    Evi,
}

impl VegIndex {
    /// All indices in display order.
    pub const ALL: [VegIndex; 3] = [VegIndex::Ndvi, VegIndex::Ndwi, VegIndex::Evi];

    pub fn label(&self) -> &'static str {
        match self {
            VegIndex::Ndvi => "NDVI",
            VegIndex::Ndwi => "NDWI",
            VegIndex::Evi => "EVI",
        }
    }
}

impl fmt::Display for VegIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single satellite-derived reading for one monitored point on one day.
///
/// Index values are conventionally in [-1.0, 1.0] but are passed through
/// unvalidated; the dataset is trusted as-is.
#[derive(Debug, Clone, Serialize)]
pub struct VegetationRecord {
    pub point_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub date: NaiveDate,
    pub ndvi: f64,
    pub ndwi: f64,
    pub evi: f64,
}

impl VegetationRecord {
    /// The value of the given index for this record.
    pub fn index_value(&self, index: VegIndex) -> f64 {
        match index {
            VegIndex::Ndvi => self.ndvi,
            VegIndex::Ndwi => self.ndwi,
            VegIndex::Evi => self.evi,
        }
    }
}

// Identity is (point_id, date): one reading per point per day.

impl PartialEq for VegetationRecord {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date && self.point_id == other.point_id
    }
}

impl Eq for VegetationRecord {}

impl Hash for VegetationRecord {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.point_id.hash(state);
        self.date.hash(state);
    }
}

impl Ord for VegetationRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.point_id.cmp(&other.point_id))
    }
}

impl PartialOrd for VegetationRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
