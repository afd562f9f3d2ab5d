use ndarray::{Array1, ArrayView1};
use poolheat_core::Component;
use uom::si::{
    f64::{Area, Energy, Ratio, ThermodynamicTemperature, Time, Velocity, Volume},
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

use crate::interpolation::InterpError;

use super::{PoolConfig, SurfaceFlux, saturation::saturation_pressure_pa};

/// Representative ambient conditions for one period of the day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodClimate {
    pub air_temperature: ThermodynamicTemperature,

    /// Wind speed at the water surface.
    pub wind_speed: Velocity,

    /// Relative humidity. Values above 100 % are accepted as given.
    pub relative_humidity: Ratio,
}

/// Day and night conditions seen by the pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateConditions {
    pub day: PeriodClimate,
    pub night: PeriodClimate,
}

/// Energy lost by the pool during one period of a day.
///
/// `total` is the combined surface flux integrated over the period; the
/// mechanism fields break it down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodLoss {
    pub total: Energy,
    pub evaporation: Energy,
    pub radiation: Energy,
    pub convection: Energy,
}

impl PeriodLoss {
    fn integrate(flux: &SurfaceFlux, area: Area, duration: Time) -> Self {
        Self {
            total: flux.total() * area * duration,
            evaporation: flux.evaporation * area * duration,
            radiation: flux.radiation * area * duration,
            convection: flux.convection * area * duration,
        }
    }
}

/// Daily heat loss of the pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatLoss {
    pub day: PeriodLoss,
    pub night: PeriodLoss,

    /// Water volume of the pool, carried along for reporting.
    pub pool_volume: Volume,

    /// Length of the day period.
    pub hours_day: Time,
}

impl HeatLoss {
    /// Total energy lost over a full day.
    #[must_use]
    pub fn total(&self) -> Energy {
        self.day.total + self.night.total
    }

    /// Evaporation loss over a full day.
    #[must_use]
    pub fn evaporation(&self) -> Energy {
        self.day.evaporation + self.night.evaporation
    }

    /// Radiation loss over a full day.
    #[must_use]
    pub fn radiation(&self) -> Energy {
        self.day.radiation + self.night.radiation
    }

    /// Convection loss over a full day.
    #[must_use]
    pub fn convection(&self) -> Energy {
        self.day.convection + self.night.convection
    }
}

/// Steady-state heat loss model of an outdoor pool.
///
/// Each period (day and night) loses heat through:
///
/// - Evaporation, driven by the vapor pressure difference between saturated
///   air at the water temperature and the ambient air.
/// - Long-wave radiation to a sky 5 °C colder than the air.
/// - Wind-driven convection to the air.
///
/// When a cover is used, night evaporation and radiation keep 30 % of their
/// uncovered value; convection is not affected.
///
/// Inputs are not validated. Nonsensical values, including NaN, carry through
/// the arithmetic of their own site only.
///
/// # Example
///
/// ```
/// use poolheat_core::Component;
/// use poolheat_components::pool::{ClimateConditions, HeatLossModel, PeriodClimate, PoolConfig};
/// use uom::si::{
///     area::square_meter,
///     energy::kilowatt_hour,
///     f64::{Area, Length, Ratio, ThermodynamicTemperature, Time, Velocity},
///     length::meter,
///     ratio::percent,
///     thermodynamic_temperature::degree_celsius,
///     time::hour,
///     velocity::meter_per_second,
/// };
///
/// let model = HeatLossModel::new(PoolConfig {
///     temperature: ThermodynamicTemperature::new::<degree_celsius>(28.0),
///     area: Area::new::<square_meter>(50.0),
///     depth: Length::new::<meter>(1.5),
///     night_hours: Time::new::<hour>(12.0),
///     cover_used: true,
/// });
///
/// let period = |t, w, rh| PeriodClimate {
///     air_temperature: ThermodynamicTemperature::new::<degree_celsius>(t),
///     wind_speed: Velocity::new::<meter_per_second>(w),
///     relative_humidity: Ratio::new::<percent>(rh),
/// };
///
/// let loss = model
///     .call(ClimateConditions {
///         day: period(30.0, 2.0, 70.0),
///         night: period(25.0, 1.0, 77.0),
///     })
///     .unwrap();
///
/// assert!(loss.total().get::<kilowatt_hour>() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatLossModel {
    pool: PoolConfig,
}

impl HeatLossModel {
    #[must_use]
    pub fn new(pool: PoolConfig) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &PoolConfig {
        &self.pool
    }

    /// Surface fluxes for the day and night periods, with the cover applied.
    ///
    /// # Errors
    ///
    /// Returns an [`InterpError`] if a saturation pressure cannot be evaluated.
    pub fn surface_fluxes(
        &self,
        conditions: &ClimateConditions,
    ) -> Result<(SurfaceFlux, SurfaceFlux), InterpError> {
        let pool_c = self.pool.temperature.get::<degree_celsius>();
        let pool_vapor_pa = saturation_pressure_pa(pool_c)?;

        let day = period_flux(pool_c, pool_vapor_pa, &conditions.day)?;
        let night = period_flux(pool_c, pool_vapor_pa, &conditions.night)?;
        let night = if self.pool.cover_used {
            night.covered()
        } else {
            night
        };

        Ok((day, night))
    }

    /// Evaluates the model for many independent sites.
    ///
    /// The result has the same shape as `conditions`, and each element equals
    /// the result of [`call()`](Component::call) on the matching input.
    ///
    /// # Errors
    ///
    /// Returns the first [`InterpError`] encountered.
    pub fn call_batch(
        &self,
        conditions: ArrayView1<'_, ClimateConditions>,
    ) -> Result<Array1<HeatLoss>, InterpError> {
        let losses = self.call_each(conditions.iter().copied())?;
        Ok(Array1::from(losses))
    }
}

impl Component for HeatLossModel {
    type Input = ClimateConditions;
    type Output = HeatLoss;
    type Error = InterpError;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let (day_flux, night_flux) = self.surface_fluxes(&input)?;

        let hours_day = self.pool.day_hours();
        let area = self.pool.area;

        Ok(HeatLoss {
            day: PeriodLoss::integrate(&day_flux, area, hours_day),
            night: PeriodLoss::integrate(&night_flux, area, self.pool.night_hours),
            pool_volume: self.pool.volume(),
            hours_day,
        })
    }
}

fn period_flux(
    pool_c: f64,
    pool_vapor_pa: f64,
    climate: &PeriodClimate,
) -> Result<SurfaceFlux, InterpError> {
    let air_c = climate.air_temperature.get::<degree_celsius>();
    let wind_m_s = climate.wind_speed.get::<meter_per_second>();
    let rh_percent = climate.relative_humidity.get::<percent>();

    let air_vapor_pa = saturation_pressure_pa(air_c)? * rh_percent / 100.0;

    Ok(SurfaceFlux::evaluate(
        pool_c,
        air_c,
        wind_m_s,
        pool_vapor_pa,
        air_vapor_pa,
    ))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter, energy::kilowatt_hour, f64::Length, length::meter, time::hour,
        volume::cubic_meter,
    };

    use super::*;

    fn pool(cover_used: bool) -> PoolConfig {
        PoolConfig {
            temperature: ThermodynamicTemperature::new::<degree_celsius>(28.0),
            area: Area::new::<square_meter>(50.0),
            depth: Length::new::<meter>(1.5),
            night_hours: Time::new::<hour>(12.0),
            cover_used,
        }
    }

    fn period(air_c: f64, wind: f64, rh: f64) -> PeriodClimate {
        PeriodClimate {
            air_temperature: ThermodynamicTemperature::new::<degree_celsius>(air_c),
            wind_speed: Velocity::new::<meter_per_second>(wind),
            relative_humidity: Ratio::new::<percent>(rh),
        }
    }

    fn scenario() -> ClimateConditions {
        ClimateConditions {
            day: period(30.0, 2.0, 70.0),
            night: period(25.0, 1.0, 77.0),
        }
    }

    fn kwh(energy: Energy) -> f64 {
        energy.get::<kilowatt_hour>()
    }

    #[test]
    fn reference_scenario() {
        let loss = HeatLossModel::new(pool(true)).call(scenario()).unwrap();

        assert_relative_eq!(loss.hours_day.get::<hour>(), 12.0, max_relative = 1e-12);
        assert_relative_eq!(loss.pool_volume.get::<cubic_meter>(), 75.0, max_relative = 1e-12);

        let q_day = kwh(loss.day.total);
        let q_night = kwh(loss.night.total);
        assert!(q_day.is_finite() && q_day > 0.0);
        assert!(q_night.is_finite() && q_night > 0.0);

        assert_relative_eq!(q_day, 46.248_167_797_635, max_relative = 1e-9);
        assert_relative_eq!(q_night, 36.828_121_904_116, max_relative = 1e-9);
        assert_relative_eq!(kwh(loss.day.convection), -13.56, max_relative = 1e-9);
        assert_relative_eq!(kwh(loss.night.convection), 12.96, max_relative = 1e-9);
    }

    #[test]
    fn cover_scales_night_evaporation_and_radiation_only() {
        let covered = HeatLossModel::new(pool(true)).call(scenario()).unwrap();
        let open = HeatLossModel::new(pool(false)).call(scenario()).unwrap();

        assert_relative_eq!(
            kwh(covered.night.evaporation),
            0.3 * kwh(open.night.evaporation),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            kwh(covered.night.radiation),
            0.3 * kwh(open.night.radiation),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            kwh(covered.night.convection),
            kwh(open.night.convection),
            max_relative = 1e-12
        );
        assert_eq!(covered.day, open.day);
        assert!(covered.night.total < open.night.total);
    }

    #[test]
    fn no_gradient_means_no_evaporation_or_convection() {
        let still = ClimateConditions {
            day: period(28.0, 3.0, 100.0),
            night: period(28.0, 3.0, 100.0),
        };
        let loss = HeatLossModel::new(pool(false)).call(still).unwrap();

        for period in [loss.day, loss.night] {
            assert_relative_eq!(kwh(period.evaporation), 0.0, epsilon = 1e-9);
            assert_relative_eq!(kwh(period.convection), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn radiation_sign_tracks_sky_temperature() {
        let model = HeatLossModel::new(pool(false));
        let conditions = ClimateConditions {
            // Sky at 28 °C during the day, 40 °C at night.
            day: period(33.0, 1.0, 50.0),
            night: period(45.0, 1.0, 50.0),
        };
        let loss = model.call(conditions).unwrap();
        assert_relative_eq!(kwh(loss.day.radiation), 0.0, epsilon = 1e-9);
        assert!(kwh(loss.night.radiation) < 0.0);

        let cold = model
            .call(ClimateConditions {
                day: period(10.0, 1.0, 50.0),
                night: period(5.0, 1.0, 50.0),
            })
            .unwrap();
        assert!(kwh(cold.day.radiation) > 0.0);
        assert!(kwh(cold.night.radiation) > 0.0);
    }

    #[test]
    fn totals_equal_sum_of_components() {
        for cover_used in [true, false] {
            let loss = HeatLossModel::new(pool(cover_used)).call(scenario()).unwrap();
            let components = loss.evaporation() + loss.radiation() + loss.convection();
            assert_relative_eq!(kwh(loss.total()), kwh(components), max_relative = 1e-12);
            assert_relative_eq!(
                kwh(loss.day.total),
                kwh(loss.day.evaporation + loss.day.radiation + loss.day.convection),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn night_hours_split_the_day() {
        let mut config = pool(false);
        config.night_hours = Time::new::<hour>(24.0);
        let loss = HeatLossModel::new(config).call(scenario()).unwrap();

        assert_relative_eq!(loss.hours_day.get::<hour>(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(kwh(loss.day.total), 0.0, epsilon = 1e-12);
        assert!(kwh(loss.night.total) > 0.0);
    }

    #[test]
    fn humid_night_can_condense() {
        // Night humidity above saturation gives a negative vapor deficit.
        let conditions = ClimateConditions {
            day: period(28.0, 1.0, 90.0),
            night: period(28.0, 1.0, 110.0),
        };
        let loss = HeatLossModel::new(pool(false)).call(conditions).unwrap();
        assert!(kwh(loss.night.evaporation) < 0.0);
    }

    #[test]
    fn invalid_inputs_propagate_without_error() {
        let conditions = ClimateConditions {
            day: period(30.0, -2.0, 70.0),
            night: period(-70.0, 1.0, 77.0),
        };
        let loss = HeatLossModel::new(pool(true)).call(conditions).unwrap();
        assert!(kwh(loss.total()).is_finite());
    }

    #[test]
    fn batch_matches_scalar_calls() {
        let model = HeatLossModel::new(pool(true));
        let conditions: Array1<ClimateConditions> = (0..100)
            .map(|i| {
                let x = f64::from(i);
                ClimateConditions {
                    day: period(-20.0 + 0.55 * x, 0.1 * x, 40.0 + 0.5 * x),
                    night: period(-25.0 + 0.5 * x, 0.08 * x, 44.0 + 0.55 * x),
                }
            })
            .collect();

        let batch = model.call_batch(conditions.view()).unwrap();

        assert_eq!(batch.len(), conditions.len());
        for (input, output) in conditions.iter().zip(batch.iter()) {
            assert_eq!(*output, model.call(*input).unwrap());
        }
    }
}
