//! Heat balance of an outdoor heated pool.
//!
//! The [`HeatLossModel`] converts ambient day and night conditions into daily
//! evaporation, radiation and convection losses for a pool described by a
//! [`PoolConfig`]. Water vapor pressures come from the empirical
//! [`saturation`] table.

mod flux;
mod heat_loss;
pub mod saturation;

use uom::si::{
    f64::{Area, Length, ThermodynamicTemperature, Time, Volume},
    time::hour,
};

pub use flux::SurfaceFlux;
pub use heat_loss::{ClimateConditions, HeatLoss, HeatLossModel, PeriodClimate, PeriodLoss};

/// Geometry and operating settings of the pool.
///
/// Values are taken as given: the model does not validate them, and
/// physically meaningless settings (such as a negative area) simply carry
/// through the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolConfig {
    /// Target water temperature.
    pub temperature: ThermodynamicTemperature,

    /// Water surface area.
    pub area: Area,

    /// Average water depth.
    pub depth: Length,

    /// Length of the night period, expected within 0 to 24 hours.
    pub night_hours: Time,

    /// Whether a cover is deployed over the pool during the night.
    pub cover_used: bool,
}

impl PoolConfig {
    /// Water volume of the pool.
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.area * self.depth
    }

    /// Length of the day period, `24 h - night_hours`.
    #[must_use]
    pub fn day_hours(&self) -> Time {
        Time::new::<hour>(24.0) - self.night_hours
    }
}
