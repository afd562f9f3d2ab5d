/// The core trait for the calculation steps in `poolheat`.
///
/// A `Component` takes an input and produces an output. Every step of the
/// pool heat balance (saturation lookup, day/night split, heat loss, daily
/// energy balance) is a component, so each can be evaluated and tested on
/// its own.
///
/// ## Implementing `Component`
///
/// Implement the [`call()`] method, which takes an input and returns either
/// an output or an error. Components must be deterministic, always producing
/// the same result for a given input, and must not hold mutable state.
///
/// Components with no failure mode use [`std::convert::Infallible`] as their
/// error type.
///
/// [`call()`]: Component::call
pub trait Component {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the component with the given input and returns a result.
    ///
    /// # Errors
    ///
    /// Each component defines its own `Error` type, allowing it to determine
    /// what constitutes a failure within its domain.
    ///
    /// # Example
    ///
    /// ```
    /// use std::convert::Infallible;
    /// use poolheat_core::Component;
    ///
    /// /// Converts a pool area and depth (m², m) into a volume (m³).
    /// struct Volume;
    ///
    /// impl Component for Volume {
    ///     type Input = (f64, f64);
    ///     type Output = f64;
    ///     type Error = Infallible;
    ///
    ///     fn call(&self, (area, depth): (f64, f64)) -> Result<f64, Self::Error> {
    ///         Ok(area * depth)
    ///     }
    /// }
    ///
    /// assert_eq!(Volume.call((50.0, 1.5)).unwrap(), 75.0);
    /// ```
    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;

    /// Calls the component once per input, stopping at the first error.
    ///
    /// The inputs are evaluated independently and in order, so the result is
    /// identical to calling [`call()`] on each input separately.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by [`call()`].
    ///
    /// [`call()`]: Component::call
    fn call_each<I>(&self, inputs: I) -> Result<Vec<Self::Output>, Self::Error>
    where
        I: IntoIterator<Item = Self::Input>,
    {
        inputs.into_iter().map(|input| self.call(input)).collect()
    }
}
