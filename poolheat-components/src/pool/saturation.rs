//! Saturation vapor pressure of water.
//!
//! Pressures are linearly interpolated from a 25-point psychrometric table
//! spanning -40 °C to 85 °C. Outside that range the nearest boundary segment
//! is extended, so polar and tropical sites still get a value. Extrapolated
//! values are not physically validated.

use std::sync::LazyLock;

use ndarray::{Array1, ArrayView1};
use poolheat_core::Component;
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::degree_celsius,
};

use crate::interpolation::{Interp1D, InterpError};

/// Reference table of `(temperature °C, saturation pressure Pa)` pairs.
pub const SATURATION_TABLE: [(f64, f64); 25] = [
    (-40.0, 12.84),
    (-30.0, 38.0),
    (-25.0, 63.25),
    (-20.0, 103.2),
    (-15.0, 165.2),
    (-10.0, 259.2),
    (-5.0, 401.5),
    (0.0, 610.8),
    (5.0, 871.9),
    (10.0, 1227.0),
    (15.0, 1704.0),
    (20.0, 2337.0),
    (25.0, 3167.0),
    (30.0, 4243.0),
    (35.0, 5623.0),
    (40.0, 7378.0),
    (45.0, 9585.0),
    (50.0, 12339.0),
    (55.0, 14745.0),
    (60.0, 19925.0),
    (65.0, 25014.0),
    (70.0, 31167.0),
    (75.0, 38554.0),
    (80.0, 47365.0),
    (85.0, 57809.0),
];

static SATURATION_CURVE: LazyLock<Interp1D> = LazyLock::new(|| {
    let temperatures: Array1<f64> = SATURATION_TABLE.iter().map(|(t, _)| *t).collect();
    let pressures: Array1<f64> = SATURATION_TABLE.iter().map(|(_, p)| *p).collect();
    Interp1D::linear(temperatures, pressures)
        .expect("saturation table is sorted and has matching columns")
});

/// Saturation vapor pressure lookup as a component.
///
/// # Example
///
/// ```
/// use poolheat_core::Component;
/// use poolheat_components::pool::saturation::SaturationCurve;
/// use uom::si::{
///     f64::ThermodynamicTemperature, pressure::pascal,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let p = SaturationCurve
///     .call(ThermodynamicTemperature::new::<degree_celsius>(28.0))
///     .unwrap();
/// assert!((p.get::<pascal>() - 3812.6).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SaturationCurve;

impl Component for SaturationCurve {
    type Input = ThermodynamicTemperature;
    type Output = Pressure;
    type Error = InterpError;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        saturation_pressure(input)
    }
}

/// Returns the saturation vapor pressure of water at `temperature`.
///
/// Every temperature has a value. NaN gives NaN, and infinite temperatures
/// give the infinity the boundary segments point to.
///
/// # Errors
///
/// Returns an [`InterpError`] only if the table itself cannot be evaluated.
pub fn saturation_pressure(
    temperature: ThermodynamicTemperature,
) -> Result<Pressure, InterpError> {
    let pa = saturation_pressure_pa(temperature.get::<degree_celsius>())?;
    Ok(Pressure::new::<pascal>(pa))
}

/// Returns the saturation vapor pressure in pascals for a temperature in °C.
///
/// # Errors
///
/// See [`saturation_pressure`].
pub fn saturation_pressure_pa(temperature_c: f64) -> Result<f64, InterpError> {
    // Both boundary slopes are positive, so the extended curve maps NaN and
    // the infinities onto themselves.
    if !temperature_c.is_finite() {
        return Ok(temperature_c);
    }
    SATURATION_CURVE.interpolate(temperature_c)
}

/// Elementwise [`saturation_pressure_pa`] over an array of temperatures in °C.
///
/// # Errors
///
/// Returns the first lookup error.
pub fn saturation_pressure_array(
    temperatures_c: ArrayView1<'_, f64>,
) -> Result<Array1<f64>, InterpError> {
    let pressures = temperatures_c
        .iter()
        .map(|t| saturation_pressure_pa(*t))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Array1::from(pressures))
}
