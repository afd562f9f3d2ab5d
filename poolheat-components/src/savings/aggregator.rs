use ndarray::Array1;
use poolheat_core::{Component, constraint::ConstraintError};
use uom::si::{energy::kilowatt_hour, f64::Energy};

use crate::{
    climate::{
        ClimateDataset, ClimateLookup, DayNightSplit, Location, Month, MonthlyClimate,
        WindShielding,
    },
    interpolation::InterpError,
    pool::{ClimateConditions, HeatLossModel, PoolConfig},
};

use super::{
    CollectorConfig, DailyBalance, DailyBalanceInput, EconomicsConfig, FuelEconomics,
    GridSavings, Itinerary, MonthlySavings, SavingsError, SolarCollector, YearlySavings,
};

/// Runs the full savings chain for one pool and collector installation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsAggregator {
    split: DayNightSplit,
    heat_loss: HeatLossModel,
    balance: DailyBalance,
    economics: FuelEconomics,
}

impl SavingsAggregator {
    /// Creates an aggregator, validating collector and economic parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the collector area is negative, the
    /// efficiency lies outside `[0, 1]`, the COP is not strictly positive, or
    /// the diesel price is negative.
    pub fn new(
        pool: PoolConfig,
        shielding: WindShielding,
        collector: CollectorConfig,
        economics: EconomicsConfig,
    ) -> Result<Self, ConstraintError> {
        Ok(Self {
            split: DayNightSplit::new(shielding),
            heat_loss: HeatLossModel::new(pool),
            balance: DailyBalance {
                collector: SolarCollector::new(collector)?,
                pool_area: pool.area,
            },
            economics: FuelEconomics::new(economics)?,
        })
    }

    #[must_use]
    pub fn heat_loss_model(&self) -> &HeatLossModel {
        &self.heat_loss
    }

    #[must_use]
    pub fn economics(&self) -> &FuelEconomics {
        &self.economics
    }

    /// Savings for `month` under the given monthly climate.
    ///
    /// `location` is reported as given and is not used in the calculation.
    ///
    /// # Errors
    ///
    /// Returns an [`InterpError`] if the heat loss cannot be evaluated.
    pub fn month(
        &self,
        month: Month,
        location: Location,
        climate: &MonthlyClimate,
    ) -> Result<MonthlySavings, InterpError> {
        let Ok(conditions) = self.split.call(*climate);
        let heat_loss = self.heat_loss.call(conditions)?;
        let Ok(daily) = self.balance.call(DailyBalanceInput {
            heat_loss: heat_loss.total(),
            ghi: climate.ghi,
        });

        let days = f64::from(month.days());
        let monthly_net_saving = daily.net_saving * days;

        Ok(MonthlySavings {
            month,
            location,
            daily,
            heat_loss,
            monthly_loss: daily.total_loss * days,
            monthly_collector_gain: daily.collector_gain * days,
            monthly_net_saving,
            fuel: self.economics.for_heat(monthly_net_saving),
        })
    }

    /// Savings for every month of the year along `itinerary`.
    ///
    /// Each month uses the climate record nearest to that month's location.
    /// Rows report the itinerary location rather than the record's grid point.
    ///
    /// # Errors
    ///
    /// - [`SavingsError::IncompleteItinerary`] if any month has no location.
    /// - [`SavingsError::NoClimateData`] if the lookup has no record for a
    ///   location.
    /// - [`SavingsError::HeatLoss`] if a heat loss cannot be evaluated.
    pub fn yearly<L>(
        &self,
        itinerary: &Itinerary,
        climate: &L,
    ) -> Result<YearlySavings, SavingsError>
    where
        L: ClimateLookup + ?Sized,
    {
        let stops = itinerary
            .complete_stops()
            .ok_or_else(|| SavingsError::IncompleteItinerary {
                missing: itinerary.missing_months(),
            })?;

        let months = stops
            .into_iter()
            .map(|(month, location)| -> Result<MonthlySavings, SavingsError> {
                let record = climate
                    .nearest(location)
                    .ok_or(SavingsError::NoClimateData { location })?;
                Ok(self.month(month, location, record.month(month))?)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(YearlySavings::new(months))
    }

    /// Daily savings for `month` at every record of `dataset`.
    ///
    /// # Errors
    ///
    /// Returns the first [`InterpError`] from the heat loss evaluation.
    pub fn month_grid(
        &self,
        month: Month,
        dataset: &ClimateDataset,
    ) -> Result<GridSavings, InterpError> {
        let records = dataset.records();

        let conditions: Array1<ClimateConditions> = records
            .iter()
            .map(|record| {
                let Ok(conditions) = self.split.call(*record.month(month));
                conditions
            })
            .collect();
        let losses = self.heat_loss.call_batch(conditions.view())?;

        let daily: Array1<_> = losses
            .iter()
            .zip(records)
            .map(|(loss, record)| {
                let Ok(daily) = self.balance.call(DailyBalanceInput {
                    heat_loss: loss.total(),
                    ghi: record.month(month).ghi,
                });
                daily
            })
            .collect();

        let kwh = |e: Energy| e.get::<kilowatt_hour>();

        Ok(GridSavings {
            month,
            latitude: records.iter().map(|r| r.latitude).collect(),
            longitude: records.iter().map(|r| r.longitude).collect(),
            total_loss: daily.mapv(|d| kwh(d.total_loss)),
            collector_gain: daily.mapv(|d| kwh(d.collector_gain)),
            net_saving: daily.mapv(|d| kwh(d.net_saving)),
            evaporation: losses.mapv(|l| kwh(l.evaporation())),
            radiation: losses.mapv(|l| kwh(l.radiation())),
            convection: losses.mapv(|l| kwh(l.convection())),
        })
    }
}
