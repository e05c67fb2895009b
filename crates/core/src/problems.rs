/// Defines how sample points map onto a model's input.
///
/// A sweep evaluates a model at a sequence of points. The problem translates
/// each point, given as plain numbers in whatever units are convenient to the
/// caller (degrees, km/h, ...), into a typed model input.
///
/// The const generic `N` is the number of coordinates per sample.
/// For example, `N = 1` is a curve and `N = 2` is a surface.
pub trait SweepProblem<const N: usize> {
    type Input;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps sample coordinates (`x`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error>;
}
