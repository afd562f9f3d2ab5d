use uom::si::{f64::HeatFluxDensity, heat_flux_density::watt_per_square_meter};

/// Calibration factor applied to the evaporation correlation.
const EVAPORATION_TUNING: f64 = 0.5;

/// Pascals per torr; the evaporation correlation is expressed in mmHg.
const PASCAL_PER_TORR: f64 = 133.322;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Long-wave emissivity of the water surface.
const EMISSIVITY: f64 = 0.9;

/// Stefan-Boltzmann constant, W/m²·K⁴.
const STEFAN_BOLTZMANN: f64 = 5.67e-8;

const KELVIN_OFFSET: f64 = 273.15;

/// The effective sky temperature sits this far below the air temperature.
const SKY_DEPRESSION_C: f64 = 5.0;

/// Fraction of evaporation and radiation that remains under a night cover.
pub(super) const COVER_RETENTION: f64 = 0.3;

/// Heat flux leaving the water surface, split by mechanism.
///
/// Positive values are losses from the pool. Radiation and convection turn
/// negative when the sky or air is warmer than the water, and evaporation
/// turns negative when the air holds more vapor than saturated air at the
/// water temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceFlux {
    pub evaporation: HeatFluxDensity,
    pub radiation: HeatFluxDensity,
    pub convection: HeatFluxDensity,
}

impl SurfaceFlux {
    /// Evaluates the three loss mechanisms for one period.
    ///
    /// Temperatures are in °C, vapor pressures in Pa and wind in m/s.
    pub(super) fn evaluate(
        pool_c: f64,
        air_c: f64,
        wind_m_s: f64,
        pool_vapor_pa: f64,
        air_vapor_pa: f64,
    ) -> Self {
        Self {
            evaporation: from_kw(evaporation_kw(wind_m_s, pool_vapor_pa, air_vapor_pa)),
            radiation: from_kw(radiation_kw(pool_c, air_c)),
            convection: from_kw(convection_kw(pool_c, air_c, wind_m_s)),
        }
    }

    /// Applies a pool cover, which damps evaporation and radiation but leaves
    /// convection unchanged.
    #[must_use]
    pub(super) fn covered(self) -> Self {
        Self {
            evaporation: self.evaporation * COVER_RETENTION,
            radiation: self.radiation * COVER_RETENTION,
            convection: self.convection,
        }
    }

    /// Combined flux of all mechanisms.
    #[must_use]
    pub fn total(&self) -> HeatFluxDensity {
        self.evaporation + self.radiation + self.convection
    }
}

fn from_kw(kw_per_m2: f64) -> HeatFluxDensity {
    HeatFluxDensity::new::<watt_per_square_meter>(kw_per_m2 * 1000.0)
}

/// Wind-driven evaporation, kW/m².
fn evaporation_kw(wind_m_s: f64, pool_vapor_pa: f64, air_vapor_pa: f64) -> f64 {
    EVAPORATION_TUNING * ((30.6 + 32.1 * wind_m_s) * (pool_vapor_pa - air_vapor_pa))
        / (SECONDS_PER_HOUR * PASCAL_PER_TORR)
}

/// Long-wave exchange between the water and the sky, kW/m².
fn radiation_kw(pool_c: f64, air_c: f64) -> f64 {
    let pool_k = pool_c + KELVIN_OFFSET;
    let sky_k = air_c - SKY_DEPRESSION_C + KELVIN_OFFSET;
    EMISSIVITY * STEFAN_BOLTZMANN * (pool_k.powi(4) - sky_k.powi(4)) / 1000.0
}

/// Convection with a wind-dependent coefficient, kW/m².
///
/// Coefficient from Ruiz and Martínez (2010): `h = 3.1 + 4.1·W` W/m²·K.
fn convection_kw(pool_c: f64, air_c: f64, wind_m_s: f64) -> f64 {
    let h = (3.1 + 4.1 * wind_m_s) / 1000.0;
    h * (pool_c - air_c)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn radiation_sign_follows_sky_temperature() {
        assert_relative_eq!(radiation_kw(28.0, 33.0), 0.0);
        assert!(radiation_kw(28.0, 20.0) > 0.0);
        assert!(radiation_kw(28.0, 40.0) < 0.0);
    }

    #[test]
    fn convection_coefficient_grows_with_wind() {
        assert_relative_eq!(convection_kw(28.0, 18.0, 0.0), 0.031, max_relative = 1e-12);
        assert_relative_eq!(convection_kw(28.0, 18.0, 2.0), 0.113, max_relative = 1e-12);
        assert_relative_eq!(convection_kw(28.0, 38.0, 2.0), -0.113, max_relative = 1e-12);
    }

    #[test]
    fn evaporation_vanishes_without_vapor_deficit() {
        assert_relative_eq!(evaporation_kw(3.0, 2000.0, 2000.0), 0.0);
        assert!(evaporation_kw(3.0, 2000.0, 2500.0) < 0.0);
    }

    #[test]
    fn evaporation_uses_torr_based_correlation() {
        let expected = 0.5 * (30.6 + 32.1) * 1000.0 / (3600.0 * 133.322);
        assert_relative_eq!(evaporation_kw(1.0, 1500.0, 500.0), expected, max_relative = 1e-12);
    }

    #[test]
    fn cover_keeps_convection() {
        let flux = SurfaceFlux::evaluate(28.0, 20.0, 1.5, 3812.6, 1800.0);
        let covered = flux.covered();
        assert_relative_eq!(
            covered.evaporation.value,
            flux.evaporation.value * COVER_RETENTION,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            covered.radiation.value,
            flux.radiation.value * COVER_RETENTION,
            max_relative = 1e-12
        );
        assert_eq!(covered.convection, flux.convection);
    }
}
