use serde::Serialize;

/// NDVI above this is considered healthy vegetation.
pub const HEALTHY_NDVI_THRESHOLD: f64 = 0.6;

/// NDVI above this (but not healthy) is considered moderate.
pub const MODERATE_NDVI_THRESHOLD: f64 = 0.4;

/// Vegetation health classification derived from NDVI, used to color
/// map markers: green for healthy, orange for moderate, red for stressed.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum HealthBand {
    Healthy,
    Moderate,
    Stressed,
}

impl HealthBand {
    pub fn from_ndvi(ndvi: f64) -> Self {
        if ndvi > HEALTHY_NDVI_THRESHOLD {
            HealthBand::Healthy
        } else if ndvi > MODERATE_NDVI_THRESHOLD {
            HealthBand::Moderate
        } else {
            HealthBand::Stressed
        }
    }

    /// Marker color as [r, g, b].
    pub fn color(&self) -> [u8; 3] {
        match self {
            HealthBand::Healthy => [0, 128, 0],
            HealthBand::Moderate => [255, 165, 0],
            HealthBand::Stressed => [255, 0, 0],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthBand::Healthy => "healthy",
            HealthBand::Moderate => "moderate",
            HealthBand::Stressed => "stressed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_thresholds() {
        assert_eq!(HealthBand::from_ndvi(0.75), HealthBand::Healthy);
        assert_eq!(HealthBand::from_ndvi(0.5), HealthBand::Moderate);
        assert_eq!(HealthBand::from_ndvi(0.2), HealthBand::Stressed);
        // Boundaries are exclusive
        assert_eq!(HealthBand::from_ndvi(0.6), HealthBand::Moderate);
        assert_eq!(HealthBand::from_ndvi(0.4), HealthBand::Stressed);
    }

    #[test]
    fn out_of_range_values_still_classify() {
        assert_eq!(HealthBand::from_ndvi(-0.3), HealthBand::Stressed);
        assert_eq!(HealthBand::from_ndvi(1.4), HealthBand::Healthy);
    }

    #[test]
    fn colors() {
        assert_eq!(HealthBand::Healthy.color(), [0, 128, 0]);
        assert_eq!(HealthBand::Moderate.color(), [255, 165, 0]);
        assert_eq!(HealthBand::Stressed.color(), [255, 0, 0]);
    }
}
