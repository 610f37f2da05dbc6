use serde::Serialize;

/// Metadata for a monitored location, derived from the dataset.
///
/// Used for selector lists and map labels; coordinates are taken from the
/// first record seen for the point.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonitoredPoint {
    pub point_id: String,
    pub latitude: f64,
    pub longitude: f64,
}
