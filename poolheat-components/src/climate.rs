//! Monthly climate inputs and their reduction to day and night conditions.
//!
//! Climate data arrives as monthly statistics per site ([`MonthlyClimate`]).
//! [`DayNightSplit`] turns one month of statistics into the representative
//! [`ClimateConditions`](crate::pool::ClimateConditions) used by the heat
//! loss model, and [`ClimateDataset`] finds the record closest to a location.

mod dataset;
mod month;
mod monthly;
mod shielding;

pub use dataset::{ClimateDataset, ClimateLookup, ClimateRecord, Location};
pub use month::{Month, UnknownMonth};
pub use monthly::{DayNightSplit, MonthlyClimate};
pub use shielding::WindShielding;
