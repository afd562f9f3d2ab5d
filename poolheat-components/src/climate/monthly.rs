use std::convert::Infallible;

use poolheat_core::Component;
use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Ratio, ThermodynamicTemperature, Velocity},
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

use crate::pool::{ClimateConditions, PeriodClimate};

use super::WindShielding;

/// Night wind relative to the monthly mean wind.
const NIGHT_WIND_FACTOR: f64 = 0.8;

/// Night humidity relative to the monthly mean humidity.
const NIGHT_HUMIDITY_FACTOR: f64 = 1.1;

/// Monthly climate statistics for one site.
///
/// Field names follow the dataset column prefixes (`tmin`, `tmax`, `tavg`,
/// `ghi`, `ws10m`, `rh`) when (de)serialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyClimate {
    /// Mean daily minimum air temperature, °C.
    #[serde(rename = "tmin")]
    pub t_min: f64,

    /// Mean daily maximum air temperature, °C.
    #[serde(rename = "tmax")]
    pub t_max: f64,

    /// Mean air temperature, °C, if the dataset provides one.
    #[serde(rename = "tavg", default, skip_serializing_if = "Option::is_none")]
    pub t_avg: Option<f64>,

    /// Global horizontal irradiation, kWh/m² per day.
    pub ghi: f64,

    /// Mean wind speed at 10 m, m/s.
    #[serde(rename = "ws10m")]
    pub wind_speed: f64,

    /// Mean relative humidity, %.
    #[serde(rename = "rh")]
    pub relative_humidity: f64,
}

impl MonthlyClimate {
    /// Mean air temperature, falling back to the midpoint of min and max.
    #[must_use]
    pub fn mean_temperature(&self) -> f64 {
        self.t_avg.unwrap_or((self.t_min + self.t_max) / 2.0)
    }
}

/// Derives representative day and night conditions from monthly statistics.
///
/// - Day air temperature is the mean of `t_avg` and `t_max`; night is the mean
///   of `t_avg` and `t_min`.
/// - Wind is reduced by the [`WindShielding`] factor, and night wind is a
///   further 80 % of day wind.
/// - Night humidity is 110 % of the monthly humidity. It is not capped at
///   100 %, so very humid months see condensation at night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayNightSplit {
    pub shielding: WindShielding,
}

impl DayNightSplit {
    #[must_use]
    pub fn new(shielding: WindShielding) -> Self {
        Self { shielding }
    }
}

impl Component for DayNightSplit {
    type Input = MonthlyClimate;
    type Output = ClimateConditions;
    type Error = Infallible;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let t_avg = input.mean_temperature();
        let wind_day = input.wind_speed * self.shielding.factor();

        Ok(ClimateConditions {
            day: period(
                (t_avg + input.t_max) / 2.0,
                wind_day,
                input.relative_humidity,
            ),
            night: period(
                (t_avg + input.t_min) / 2.0,
                NIGHT_WIND_FACTOR * input.wind_speed * self.shielding.factor(),
                NIGHT_HUMIDITY_FACTOR * input.relative_humidity,
            ),
        })
    }
}

fn period(air_c: f64, wind_m_s: f64, rh_percent: f64) -> PeriodClimate {
    PeriodClimate {
        air_temperature: ThermodynamicTemperature::new::<degree_celsius>(air_c),
        wind_speed: Velocity::new::<meter_per_second>(wind_m_s),
        relative_humidity: Ratio::new::<percent>(rh_percent),
    }
}
