use std::convert::Infallible;

use poolheat_core::{
    Component,
    constraint::{Constrained, ConstraintError, NonNegative, UnitInterval},
};
use uom::{
    ConstZero,
    si::{
        area::square_meter,
        energy::kilowatt_hour,
        f64::{Area, Energy, Ratio},
        ratio::ratio,
    },
};

/// Share of irradiation on the open water surface absorbed by the pool.
const POOL_SOLAR_ABSORPTION: f64 = 0.7;

/// Size and efficiency of the solar thermal collector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectorConfig {
    pub area: Area,
    pub efficiency: Ratio,
}

/// A solar thermal collector with checked parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCollector {
    pub area: Constrained<Area, NonNegative>,
    pub efficiency: Constrained<Ratio, UnitInterval>,
}

impl SolarCollector {
    /// Creates a collector from its configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the area is negative or the efficiency
    /// lies outside `[0, 1]`.
    pub fn new(config: CollectorConfig) -> Result<Self, ConstraintError> {
        let CollectorConfig { area, efficiency } = config;
        Ok(Self {
            area: Constrained::new(area)?,
            efficiency: Constrained::new(efficiency)?,
        })
    }

    /// Heat delivered over a day with `ghi` kWh/m² of irradiation.
    #[must_use]
    pub fn daily_yield(&self, ghi: f64) -> Energy {
        Energy::new::<kilowatt_hour>(
            ghi * self.area.get().get::<square_meter>() * self.efficiency.get().get::<ratio>(),
        )
    }
}

/// Inputs to the daily energy balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyBalanceInput {
    /// Heat lost by the pool over the day.
    pub heat_loss: Energy,

    /// Global horizontal irradiation, kWh/m² per day.
    pub ghi: f64,
}

/// Daily energy flows of the pool and collector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyEnergy {
    /// Heat lost by the pool.
    pub total_loss: Energy,

    /// Heat delivered by the collector.
    pub collector_gain: Energy,

    /// Solar heat absorbed directly by the water surface.
    pub pool_solar_gain: Energy,

    /// Heating still needed after direct solar gain, never negative.
    pub net_pool_heating: Energy,

    /// Collector heat that displaces backup heating.
    pub net_saving: Energy,
}

/// Balances pool heat loss against direct and collected solar heat.
///
/// The collector can only displace heating that is actually needed, so its
/// useful contribution is the smaller of its yield and the net demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyBalance {
    pub collector: SolarCollector,
    pub pool_area: Area,
}

impl Component for DailyBalance {
    type Input = DailyBalanceInput;
    type Output = DailyEnergy;
    type Error = Infallible;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let DailyBalanceInput { heat_loss, ghi } = input;

        let collector_gain = self.collector.daily_yield(ghi);
        let pool_solar_gain = Energy::new::<kilowatt_hour>(
            ghi * self.pool_area.get::<square_meter>() * POOL_SOLAR_ABSORPTION,
        );
        let net_pool_heating = clamp_negative(heat_loss - pool_solar_gain);
        let net_saving = if collector_gain < net_pool_heating {
            collector_gain
        } else {
            net_pool_heating
        };

        Ok(DailyEnergy {
            total_loss: heat_loss,
            collector_gain,
            pool_solar_gain,
            net_pool_heating,
            net_saving,
        })
    }
}

/// Replaces negative energy with zero and keeps NaN.
fn clamp_negative(energy: Energy) -> Energy {
    if energy < Energy::ZERO {
        Energy::ZERO
    } else {
        energy
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::ratio::percent;

    use super::*;

    fn balance(collector_m2: f64) -> DailyBalance {
        DailyBalance {
            collector: SolarCollector::new(CollectorConfig {
                area: Area::new::<square_meter>(collector_m2),
                efficiency: Ratio::new::<percent>(70.0),
            })
            .unwrap(),
            pool_area: Area::new::<square_meter>(50.0),
        }
    }

    fn kwh(e: Energy) -> f64 {
        e.get::<kilowatt_hour>()
    }

    fn run(collector_m2: f64, heat_loss_kwh: f64, ghi: f64) -> DailyEnergy {
        let Ok(daily) = balance(collector_m2).call(DailyBalanceInput {
            heat_loss: Energy::new::<kilowatt_hour>(heat_loss_kwh),
            ghi,
        });
        daily
    }

    #[test]
    fn solar_gains_scale_with_irradiation() {
        let daily = run(75.0, 500.0, 4.0);
        assert_relative_eq!(kwh(daily.collector_gain), 4.0 * 75.0 * 0.7, max_relative = 1e-12);
        assert_relative_eq!(kwh(daily.pool_solar_gain), 4.0 * 50.0 * 0.7, max_relative = 1e-12);
        assert_relative_eq!(kwh(daily.net_pool_heating), 500.0 - 140.0, max_relative = 1e-12);
    }

    #[test]
    fn collector_limits_saving_when_demand_is_high() {
        let daily = run(75.0, 500.0, 4.0);
        assert_eq!(daily.net_saving, daily.collector_gain);
    }

    #[test]
    fn demand_limits_saving_when_collector_is_large() {
        let daily = run(1000.0, 300.0, 4.0);
        assert_eq!(daily.net_saving, daily.net_pool_heating);
    }

    #[test]
    fn direct_gain_above_loss_leaves_nothing_to_save() {
        let daily = run(75.0, 100.0, 6.0);
        assert_eq!(daily.net_pool_heating, Energy::ZERO);
        assert_eq!(daily.net_saving, Energy::ZERO);
    }

    #[test]
    fn nan_loss_carries_through_the_balance() {
        let daily = run(75.0, f64::NAN, 4.0);
        assert!(kwh(daily.net_pool_heating).is_nan());
        assert!(kwh(daily.net_saving).is_nan());
        assert_relative_eq!(kwh(daily.collector_gain), 4.0 * 75.0 * 0.7, max_relative = 1e-12);
    }

    #[test]
    fn invalid_collectors_are_rejected() {
        let bad_area = SolarCollector::new(CollectorConfig {
            area: Area::new::<square_meter>(-1.0),
            efficiency: Ratio::new::<percent>(70.0),
        });
        assert_eq!(bad_area, Err(ConstraintError::Negative));

        let bad_efficiency = SolarCollector::new(CollectorConfig {
            area: Area::new::<square_meter>(75.0),
            efficiency: Ratio::new::<percent>(120.0),
        });
        assert_eq!(bad_efficiency, Err(ConstraintError::AboveMaximum));
    }
}
