use ndarray::Array1;
use ninterp::{
    interpolator::Extrapolate,
    prelude::{Interp1DOwned, Interpolator},
    strategy::Linear,
};

use super::InterpError;

/// A piecewise-linear table of `f(x)` values over a sorted grid of `x`.
///
/// Points outside the grid continue the nearest boundary segment.
#[derive(Debug)]
pub struct Interp1D(Interp1DOwned<f64, Linear>);

impl Interp1D {
    /// Builds a table from a grid and its values.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError::Table`] if the arrays differ in length or the
    /// grid is not sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndarray::array;
    /// use poolheat_components::interpolation::Interp1D;
    ///
    /// let table = Interp1D::linear(array![0., 1., 2.], array![0.0, 0.4, 0.8]).unwrap();
    ///
    /// assert!((table.interpolate(1.5).unwrap() - 0.6).abs() < 1e-12);
    /// assert!((table.interpolate(3.0).unwrap() - 1.2).abs() < 1e-12);
    /// ```
    pub fn linear(x: Array1<f64>, f_x: Array1<f64>) -> Result<Self, InterpError> {
        let inner = Interp1DOwned::new(x, f_x, Linear, Extrapolate::Enable)?;
        Ok(Self(inner))
    }

    /// Evaluates the table at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError::Evaluate`] if `x` cannot be placed on the grid.
    pub fn interpolate(&self, x: f64) -> Result<f64, InterpError> {
        Ok(self.0.interpolate(&[x])?)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;

    #[test]
    fn interpolates_inside_the_grid() {
        let table = Interp1D::linear(array![0., 1., 2.], array![0.0, 0.4, 0.8]).unwrap();
        assert_relative_eq!(table.interpolate(1.4).unwrap(), 0.56, max_relative = 1e-12);
        assert_relative_eq!(table.interpolate(2.0).unwrap(), 0.8, max_relative = 1e-12);
    }

    #[test]
    fn extension_continues_boundary_segments() {
        let table = Interp1D::linear(array![0., 1., 3.], array![10.0, 12.0, 22.0]).unwrap();

        // Slope of [0, 1] is 2, slope of [1, 3] is 5.
        assert_relative_eq!(table.interpolate(-2.0).unwrap(), 6.0, max_relative = 1e-12);
        assert_relative_eq!(table.interpolate(5.0).unwrap(), 32.0, max_relative = 1e-12);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let result = Interp1D::linear(array![0., 1., 2.], array![0.0, 0.4]);
        assert!(matches!(result, Err(InterpError::Table(_))));
    }

    #[test]
    fn unsorted_grid_is_rejected() {
        let result = Interp1D::linear(array![0., 2., 1.], array![0.0, 0.4, 0.8]);
        assert!(matches!(result, Err(InterpError::Table(_))));
    }
}
