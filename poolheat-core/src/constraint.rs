//! Type-level numeric constraints checked once at construction.
//!
//! Configuration values such as a collector area or a heating COP are checked
//! when they enter the model and then carried as [`Constrained`] values, so
//! downstream calculations can rely on them without re-checking.
//!
//! # Provided Constraints
//!
//! - [`NonNegative`]: Zero or greater
//! - [`StrictlyPositive`]: Greater than zero
//! - [`UnitInterval`]: Within the closed interval `[0, 1]`
//!
//! Each marker can be used with the generic [`Constrained<T, C>`] wrapper,
//! and also provides an associated `new()` constructor for convenience.

mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitInterval};

/// A numeric rule that a [`Constrained`] value is checked against.
///
/// Marker types such as [`NonNegative`] implement this for every numeric type
/// they support, including `uom` quantities.
pub trait Constraint<T> {
    /// Returns `Ok(())` if `value` satisfies the rule.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] describing how the rule is broken.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Why a value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("expected a value of zero or more")]
    Negative,
    #[error("expected a nonzero value")]
    Zero,
    #[error("expected a number, got NaN")]
    NotANumber,
    #[error("value lies below the allowed range")]
    BelowMinimum,
    #[error("value lies above the allowed range")]
    AboveMaximum,
}

/// A value that passed the check of constraint `C`.
///
/// # Example
///
/// ```
/// use poolheat_core::constraint::{Constrained, StrictlyPositive};
///
/// let cop = Constrained::<f64, StrictlyPositive>::new(3.0).unwrap();
/// assert_eq!(cop.get(), 3.0);
///
/// assert!(Constrained::<f64, StrictlyPositive>::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    rule: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] reported by `C`.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            rule: PhantomData,
        })
    }

    /// Unwraps the checked value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Copy, C: Constraint<T>> Constrained<T, C> {
    /// Copies out the checked value.
    pub fn get(&self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
