//! Components for estimating the heat loss of an outdoor pool and the fuel
//! saved by heating it with a solar thermal collector.
//!
//! - [`pool`]: surface heat loss from evaporation, radiation and convection.
//! - [`climate`]: monthly climate records and their day/night conditions.
//! - [`savings`]: daily energy balance, fuel economics and yearly summaries.
//! - [`scenario`]: TOML scenario files tying the pieces together.

pub mod climate;
pub mod interpolation;
pub mod pool;
pub mod savings;
pub mod scenario;
