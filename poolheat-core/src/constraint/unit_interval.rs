use std::cmp::Ordering;

use num_traits::Zero;
use uom::si::{f64::Ratio, ratio::ratio};

use super::{Constrained, Constraint, ConstraintError};

/// Numeric types with well-defined zero and one bounds.
///
/// Implemented for `f32`, `f64`, and `uom::si::f64::Ratio`.
pub trait UnitBounds: PartialOrd + Zero {
    /// Returns the upper bound of the unit interval.
    fn one() -> Self;
}

impl UnitBounds for f32 {
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for f64 {
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}

/// Marker type enforcing that a value lies in the closed unit interval: `0 ≤ x ≤ 1`.
///
/// # Examples
///
/// ```
/// use poolheat_core::constraint::UnitInterval;
/// use uom::si::{f64::Ratio, ratio::percent};
///
/// let efficiency = UnitInterval::new(Ratio::new::<percent>(70.0)).unwrap();
/// assert!((efficiency.as_ref().get::<percent>() - 70.0).abs() < 1e-12);
///
/// assert!(UnitInterval::new(1.0).is_ok());
/// assert!(UnitInterval::new(1.5).is_err());
/// assert!(UnitInterval::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs `Constrained<T, UnitInterval>` if `0 ≤ value ≤ 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, UnitInterval>, ConstraintError> {
        Constrained::<T, UnitInterval>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
