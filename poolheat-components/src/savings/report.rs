use uom::{
    ConstZero,
    si::f64::{Energy, Mass, Volume},
};

use crate::{
    climate::{Location, Month},
    pool::HeatLoss,
};

use super::{DailyEnergy, FuelSavings};

/// Savings for one calendar month at one location.
///
/// Daily values describe a representative day of the month; monthly values
/// are daily values multiplied by the number of days in the month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlySavings {
    pub month: Month,
    pub location: Location,

    /// Daily energy balance.
    pub daily: DailyEnergy,

    /// Daily heat loss with its day/night breakdown.
    pub heat_loss: HeatLoss,

    pub monthly_loss: Energy,
    pub monthly_collector_gain: Energy,
    pub monthly_net_saving: Energy,

    /// Electricity, diesel and cost avoided over the month.
    pub fuel: FuelSavings,
}

impl MonthlySavings {
    /// Daily evaporation loss.
    #[must_use]
    pub fn evaporation(&self) -> Energy {
        self.heat_loss.evaporation()
    }

    /// Daily radiation loss.
    #[must_use]
    pub fn radiation(&self) -> Energy {
        self.heat_loss.radiation()
    }

    /// Daily convection loss.
    #[must_use]
    pub fn convection(&self) -> Energy {
        self.heat_loss.convection()
    }
}

/// Sums of the monthly columns over a year.
///
/// Daily values and locations do not add up meaningfully and have no
/// counterpart here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearlyTotals {
    pub loss: Energy,
    pub collector_gain: Energy,
    pub net_saving: Energy,
    pub electrical_saving: Energy,
    pub diesel_mass: Mass,
    pub diesel_volume: Volume,
    pub cost_saved: f64,
}

impl YearlyTotals {
    /// Adds up the monthly columns of `months`.
    #[must_use]
    pub fn from_months(months: &[MonthlySavings]) -> Self {
        months.iter().fold(Self::zero(), |acc, m| Self {
            loss: acc.loss + m.monthly_loss,
            collector_gain: acc.collector_gain + m.monthly_collector_gain,
            net_saving: acc.net_saving + m.monthly_net_saving,
            electrical_saving: acc.electrical_saving + m.fuel.electrical,
            diesel_mass: acc.diesel_mass + m.fuel.diesel_mass,
            diesel_volume: acc.diesel_volume + m.fuel.diesel_volume,
            cost_saved: acc.cost_saved + m.fuel.cost,
        })
    }

    fn zero() -> Self {
        Self {
            loss: Energy::ZERO,
            collector_gain: Energy::ZERO,
            net_saving: Energy::ZERO,
            electrical_saving: Energy::ZERO,
            diesel_mass: Mass::ZERO,
            diesel_volume: Volume::ZERO,
            cost_saved: 0.0,
        }
    }
}

/// Twelve monthly rows and their totals.
#[derive(Debug, Clone, PartialEq)]
pub struct YearlySavings {
    pub months: Vec<MonthlySavings>,
    pub totals: YearlyTotals,
}

impl YearlySavings {
    #[must_use]
    pub fn new(months: Vec<MonthlySavings>) -> Self {
        let totals = YearlyTotals::from_months(&months);
        Self { months, totals }
    }

    #[must_use]
    pub fn month(&self, month: Month) -> Option<&MonthlySavings> {
        self.months.iter().find(|m| m.month == month)
    }
}
