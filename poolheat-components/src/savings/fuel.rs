use poolheat_core::constraint::{Constrained, ConstraintError, NonNegative, StrictlyPositive};
use uom::si::{
    energy::kilowatt_hour,
    f64::{Energy, Mass, Volume},
    mass::kilogram,
    volume::liter,
};

/// Diesel burned per kWh of electricity from the generator, kg/kWh.
const DIESEL_PER_KWH: f64 = 0.2;

/// Density of diesel fuel, kg/L.
const DIESEL_DENSITY: f64 = 0.84;

/// Backup heating and fuel cost parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EconomicsConfig {
    /// Coefficient of performance of the electric backup heating.
    pub cop: f64,

    /// Diesel price per litre, in the reporting currency.
    pub diesel_price_per_liter: f64,
}

/// Converts displaced heat into avoided electricity, diesel and cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelEconomics {
    cop: Constrained<f64, StrictlyPositive>,
    diesel_price_per_liter: Constrained<f64, NonNegative>,
}

/// Electricity, fuel and money not spent on backup heating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelSavings {
    pub electrical: Energy,
    pub diesel_mass: Mass,
    pub diesel_volume: Volume,
    pub cost: f64,
}

impl FuelEconomics {
    /// Creates the economics from configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the COP is not strictly positive or the
    /// diesel price is negative.
    pub fn new(config: EconomicsConfig) -> Result<Self, ConstraintError> {
        Ok(Self {
            cop: Constrained::new(config.cop)?,
            diesel_price_per_liter: Constrained::new(config.diesel_price_per_liter)?,
        })
    }

    #[must_use]
    pub fn cop(&self) -> f64 {
        self.cop.get()
    }

    #[must_use]
    pub fn diesel_price_per_liter(&self) -> f64 {
        self.diesel_price_per_liter.get()
    }

    /// Savings from heat that no longer has to come from the backup heater.
    #[must_use]
    pub fn for_heat(&self, heat: Energy) -> FuelSavings {
        let electrical_kwh = heat.get::<kilowatt_hour>() / self.cop();
        self.fuel_for(electrical_kwh)
    }

    /// Savings from electricity that no longer has to be generated.
    #[must_use]
    pub fn for_electricity(&self, electrical: Energy) -> FuelSavings {
        self.fuel_for(electrical.get::<kilowatt_hour>())
    }

    fn fuel_for(&self, electrical_kwh: f64) -> FuelSavings {
        let diesel_kg = electrical_kwh * DIESEL_PER_KWH;
        let diesel_liters = diesel_kg / DIESEL_DENSITY;

        FuelSavings {
            electrical: Energy::new::<kilowatt_hour>(electrical_kwh),
            diesel_mass: Mass::new::<kilogram>(diesel_kg),
            diesel_volume: Volume::new::<liter>(diesel_liters),
            cost: diesel_liters * self.diesel_price_per_liter(),
        }
    }
}
