use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Month, MonthlyClimate};

/// Irradiation scale applied by [`ClimateRecord::with_polar_irradiance_correction`].
const POLAR_IRRADIANCE_SCALE: f64 = 0.5;

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Squared planar distance in degrees.
    ///
    /// Latitude and longitude are treated as flat coordinates, so this is only
    /// a ranking measure for nearby grid points, not a geodesic distance.
    #[must_use]
    pub fn planar_distance_squared(&self, other: &Location) -> f64 {
        let d_lat = self.latitude - other.latitude;
        let d_lon = self.longitude - other.longitude;
        d_lat * d_lat + d_lon * d_lon
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.latitude, self.longitude)
    }
}

/// Monthly climate statistics for one grid point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateRecord {
    #[serde(rename = "lat")]
    pub latitude: f64,

    #[serde(rename = "lon")]
    pub longitude: f64,

    /// Statistics for January through December.
    pub months: [MonthlyClimate; 12],
}

impl ClimateRecord {
    #[must_use]
    pub fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude)
    }

    #[must_use]
    pub fn month(&self, month: Month) -> &MonthlyClimate {
        &self.months[month.index()]
    }

    /// Whether the record lies in a region with overestimated irradiation:
    /// south of 65° S, or north of 60° N between 60° W and 20° W.
    #[must_use]
    pub fn is_polar_outlier(&self) -> bool {
        self.latitude < -65.0
            || (self.latitude > 60.0 && (-60.0..=-20.0).contains(&self.longitude))
    }

    /// Halves the irradiation of every month for polar outlier records.
    ///
    /// Other records are returned unchanged.
    #[must_use]
    pub fn with_polar_irradiance_correction(mut self) -> Self {
        if self.is_polar_outlier() {
            for month in &mut self.months {
                month.ghi *= POLAR_IRRADIANCE_SCALE;
            }
        }
        self
    }
}

/// A source of climate records keyed by location.
pub trait ClimateLookup {
    /// Returns the record closest to `location`, or `None` if there is none.
    fn nearest(&self, location: Location) -> Option<&ClimateRecord>;
}

/// An in-memory set of climate records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClimateDataset {
    records: Vec<ClimateRecord>,
}

impl ClimateDataset {
    #[must_use]
    pub fn new(records: Vec<ClimateRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[ClimateRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Applies [`ClimateRecord::with_polar_irradiance_correction`] to every record.
    #[must_use]
    pub fn with_polar_irradiance_correction(self) -> Self {
        Self {
            records: self
                .records
                .into_iter()
                .map(ClimateRecord::with_polar_irradiance_correction)
                .collect(),
        }
    }
}

impl ClimateLookup for ClimateDataset {
    /// Picks the record with the smallest planar distance in degrees.
    ///
    /// Ties go to the record that appears first.
    fn nearest(&self, location: Location) -> Option<&ClimateRecord> {
        self.records.iter().min_by(|a, b| {
            let da = location.planar_distance_squared(&a.location());
            let db = location.planar_distance_squared(&b.location());
            da.total_cmp(&db)
        })
    }
}

impl FromIterator<ClimateRecord> for ClimateDataset {
    fn from_iter<I: IntoIterator<Item = ClimateRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn record(latitude: f64, longitude: f64, ghi: f64) -> ClimateRecord {
        ClimateRecord {
            latitude,
            longitude,
            months: [MonthlyClimate {
                t_min: 5.0,
                t_max: 10.0,
                t_avg: None,
                ghi,
                wind_speed: 8.0,
                relative_humidity: 80.0,
            }; 12],
        }
    }

    #[test]
    fn nearest_uses_planar_degree_distance() {
        let dataset: ClimateDataset = [
            record(0.0, 0.0, 1.0),
            record(10.0, 10.0, 2.0),
            record(-5.0, 20.0, 3.0),
        ]
        .into_iter()
        .collect();

        let found = dataset.nearest(Location::new(8.0, 7.0)).unwrap();
        assert_eq!(found.location(), Location::new(10.0, 10.0));

        let found = dataset.nearest(Location::new(-4.0, 18.0)).unwrap();
        assert_eq!(found.location(), Location::new(-5.0, 20.0));
    }

    #[test]
    fn nearest_ignores_longitude_wraparound() {
        // Across the antimeridian the planar metric picks the far record.
        let dataset = ClimateDataset::new(vec![record(0.0, 179.0, 1.0), record(0.0, -100.0, 2.0)]);
        let found = dataset.nearest(Location::new(0.0, -179.0)).unwrap();
        assert_eq!(found.longitude, -100.0);
    }

    #[test]
    fn ties_go_to_first_record() {
        let dataset = ClimateDataset::new(vec![record(1.0, 0.0, 1.0), record(-1.0, 0.0, 2.0)]);
        let found = dataset.nearest(Location::new(0.0, 0.0)).unwrap();
        assert_eq!(found.latitude, 1.0);
    }

    #[test]
    fn empty_dataset_has_no_nearest() {
        assert!(ClimateDataset::default().nearest(Location::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn polar_correction_halves_outlier_irradiation() {
        let dataset = ClimateDataset::new(vec![
            record(-70.0, 10.0, 4.0),
            record(65.0, -40.0, 4.0),
            record(65.0, 10.0, 4.0),
            record(0.0, -40.0, 4.0),
            record(65.0, -60.0, 4.0),
            record(65.0, -20.0, 4.0),
            record(60.0, -40.0, 4.0),
            record(-65.0, 0.0, 4.0),
        ])
        .with_polar_irradiance_correction();

        let ghi: Vec<f64> = dataset
            .records()
            .iter()
            .map(|r| r.month(Month::June).ghi)
            .collect();
        assert_eq!(ghi, vec![2.0, 2.0, 4.0, 4.0, 2.0, 2.0, 4.0, 4.0]);
    }

    #[test]
    fn deserializes_from_toml() {
        let month = "{ tmin = 4.0, tmax = 9.0, ghi = 1.5, ws10m = 9.0, rh = 83.0 }";
        let months = vec![month; 12].join(", ");
        let text = format!("lat = 56.5\nlon = 3.2\nmonths = [{months}]");

        let record: ClimateRecord = toml::from_str(&text).unwrap();
        assert_eq!(record.location(), Location::new(56.5, 3.2));
        assert_relative_eq!(record.month(Month::December).relative_humidity, 83.0);
    }
}
