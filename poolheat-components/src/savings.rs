//! Solar collector savings for a pool heated by diesel-generated electricity.
//!
//! The chain for one month is:
//!
//! 1. [`DayNightSplit`](crate::climate::DayNightSplit) reduces monthly climate
//!    statistics to day and night conditions.
//! 2. [`HeatLossModel`](crate::pool::HeatLossModel) computes the daily loss.
//! 3. [`DailyBalance`] subtracts direct solar gain on the pool surface and caps
//!    the collector contribution at the remaining demand.
//! 4. [`FuelEconomics`] converts the saved heat into electricity, diesel and
//!    money.
//!
//! [`SavingsAggregator`] runs that chain for every month of an [`Itinerary`]
//! or for every point of a climate dataset.

mod aggregator;
mod balance;
mod error;
mod fuel;
mod grid;
mod itinerary;
mod report;

pub use aggregator::SavingsAggregator;
pub use balance::{CollectorConfig, DailyBalance, DailyBalanceInput, DailyEnergy, SolarCollector};
pub use error::SavingsError;
pub use fuel::{EconomicsConfig, FuelEconomics, FuelSavings};
pub use grid::GridSavings;
pub use itinerary::Itinerary;
pub use report::{MonthlySavings, YearlySavings, YearlyTotals};
