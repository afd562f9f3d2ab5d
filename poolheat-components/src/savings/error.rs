use thiserror::Error;

use crate::{
    climate::{Location, Month},
    interpolation::InterpError,
};

/// Errors that stop a savings evaluation.
#[derive(Debug, Error)]
pub enum SavingsError {
    /// A yearly summary needs a location for every month.
    #[error("no location assigned for {} month(s)", missing.len())]
    IncompleteItinerary { missing: Vec<Month> },

    /// The climate lookup has no record for the location.
    #[error("no climate data available near {location}")]
    NoClimateData { location: Location },

    #[error(transparent)]
    HeatLoss(#[from] InterpError),
}
