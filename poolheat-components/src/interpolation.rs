//! Piecewise interpolation of tabulated data, backed by [`ninterp`].

mod table;

use ninterp::error::{InterpolateError, ValidateError};
use thiserror::Error;

pub use table::Interp1D;

/// Errors from building or evaluating an interpolation table.
#[derive(Debug, Error)]
pub enum InterpError {
    /// The grid and values do not form a valid table.
    #[error("invalid interpolation table: {0}")]
    Table(#[from] ValidateError),

    /// The table could not be evaluated at the requested point.
    #[error("cannot evaluate interpolation table: {0}")]
    Evaluate(#[from] InterpolateError),
}
