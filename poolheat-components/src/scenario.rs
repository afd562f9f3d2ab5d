//! Scenario files describing a pool installation and where it operates.
//!
//! A scenario is a TOML document with `pool`, `collector` and `economics`
//! tables, an optional `shielding` setting, an `itinerary` array of month
//! assignments and an inline `climate` dataset:
//!
//! ```toml
//! shielding = "partly_shielded"
//!
//! [pool]
//! temperature_c = 28.0
//! area_m2 = 50.0
//!
//! [collector]
//! area_m2 = 40.0
//! efficiency = 0.6
//!
//! [economics]
//! cop = 3.0
//! diesel_price_per_liter = 1.2
//!
//! [[itinerary]]
//! months = ["January", "February"]
//! latitude = 56.0
//! longitude = 3.0
//!
//! [[climate.records]]
//! lat = 56.0
//! lon = 3.0
//! months = [{ tmin = 4.0, tmax = 9.0, ghi = 1.2, ws10m = 8.5, rh = 82.0 }, ...]
//! ```
//!
//! Values are plain numbers in the units named by their keys. They are
//! converted to quantities and checked when the scenario is loaded.

use std::{fs, io, path::Path};

use poolheat_core::constraint::ConstraintError;
use serde::Deserialize;
use thiserror::Error;
use uom::si::{
    area::square_meter,
    f64::{Area, Length, Ratio, ThermodynamicTemperature, Time},
    length::meter,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
    time::hour,
};

use crate::{
    climate::{ClimateDataset, ClimateRecord, Location, Month, WindShielding},
    pool::PoolConfig,
    savings::{
        CollectorConfig, EconomicsConfig, Itinerary, SavingsAggregator, SavingsError,
        YearlySavings,
    },
};

/// Errors raised while loading a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] io::Error),

    #[error("invalid scenario: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid scenario parameter: {0}")]
    Constraint(#[from] ConstraintError),
}

/// A validated pool installation, its itinerary and the climate it sees.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pool: PoolConfig,
    shielding: WindShielding,
    collector: CollectorConfig,
    economics: EconomicsConfig,
    itinerary: Itinerary,
    climate: ClimateDataset,
    aggregator: SavingsAggregator,
}

impl Scenario {
    /// Parses and validates a scenario from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Parse`] for malformed TOML or missing fields,
    /// and [`ScenarioError::Constraint`] for out-of-range collector or
    /// economic parameters.
    pub fn from_toml_str(text: &str) -> Result<Self, ScenarioError> {
        let raw: RawScenario = toml::from_str(text)?;
        Ok(raw.into_scenario()?)
    }

    /// Reads a scenario file.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Io`] if the file cannot be read, otherwise
    /// the errors of [`Scenario::from_toml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    #[must_use]
    pub fn pool(&self) -> &PoolConfig {
        &self.pool
    }

    #[must_use]
    pub fn shielding(&self) -> WindShielding {
        self.shielding
    }

    #[must_use]
    pub fn collector(&self) -> &CollectorConfig {
        &self.collector
    }

    #[must_use]
    pub fn economics(&self) -> &EconomicsConfig {
        &self.economics
    }

    #[must_use]
    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    #[must_use]
    pub fn climate(&self) -> &ClimateDataset {
        &self.climate
    }

    #[must_use]
    pub fn aggregator(&self) -> &SavingsAggregator {
        &self.aggregator
    }

    /// Yearly savings along the scenario itinerary.
    ///
    /// # Errors
    ///
    /// See [`SavingsAggregator::yearly`].
    pub fn yearly(&self) -> Result<YearlySavings, SavingsError> {
        self.aggregator.yearly(&self.itinerary, &self.climate)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawScenario {
    pool: RawPool,
    collector: RawCollector,
    economics: RawEconomics,
    #[serde(default)]
    shielding: WindShielding,
    #[serde(default)]
    itinerary: Vec<RawLeg>,
    #[serde(default)]
    climate: RawClimate,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPool {
    temperature_c: f64,
    area_m2: f64,
    #[serde(default = "default_depth_m")]
    depth_m: f64,
    #[serde(default = "default_night_hours")]
    night_hours: f64,
    #[serde(default = "default_cover_used")]
    cover_used: bool,
}

fn default_depth_m() -> f64 {
    1.5
}

fn default_night_hours() -> f64 {
    12.0
}

fn default_cover_used() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCollector {
    area_m2: f64,
    /// Fraction of irradiation converted to heat, 0 to 1.
    efficiency: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEconomics {
    cop: f64,
    diesel_price_per_liter: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLeg {
    months: Vec<Month>,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawClimate {
    #[serde(default)]
    polar_irradiance_correction: bool,
    #[serde(default)]
    records: Vec<ClimateRecord>,
}

impl RawScenario {
    fn into_scenario(self) -> Result<Scenario, ConstraintError> {
        let pool = PoolConfig {
            temperature: ThermodynamicTemperature::new::<degree_celsius>(self.pool.temperature_c),
            area: Area::new::<square_meter>(self.pool.area_m2),
            depth: Length::new::<meter>(self.pool.depth_m),
            night_hours: Time::new::<hour>(self.pool.night_hours),
            cover_used: self.pool.cover_used,
        };
        let collector = CollectorConfig {
            area: Area::new::<square_meter>(self.collector.area_m2),
            efficiency: Ratio::new::<ratio>(self.collector.efficiency),
        };
        let economics = EconomicsConfig {
            cop: self.economics.cop,
            diesel_price_per_liter: self.economics.diesel_price_per_liter,
        };

        let mut itinerary = Itinerary::new();
        for leg in self.itinerary {
            itinerary.assign(leg.months, Location::new(leg.latitude, leg.longitude));
        }

        let climate = ClimateDataset::new(self.climate.records);
        let climate = if self.climate.polar_irradiance_correction {
            climate.with_polar_irradiance_correction()
        } else {
            climate
        };

        let aggregator = SavingsAggregator::new(pool, self.shielding, collector, economics)?;

        Ok(Scenario {
            pool,
            shielding: self.shielding,
            collector,
            economics,
            itinerary,
            climate,
            aggregator,
        })
    }
}
