//! Piecewise step tables shared by the scorers and classifiers.

/// Step function over an ascending list of upper-exclusive thresholds.
///
/// A value below `steps[i].0` (and not below any earlier threshold) maps to
/// `steps[i].1`; anything at or past the last threshold maps to `beyond`.
/// NaN maps to the first step.
#[derive(Clone, Copy, Debug)]
pub struct Curve<T: Copy + 'static> {
    steps: &'static [(f64, T)],
    beyond: T,
}

impl<T: Copy + 'static> Curve<T> {
    pub const fn new(steps: &'static [(f64, T)], beyond: T) -> Self {
        Self { steps, beyond }
    }

    pub fn eval(&self, x: f64) -> T {
        self.steps
            .iter()
            .find(|(upper, _)| x.is_nan() || x < *upper)
            .map(|(_, value)| *value)
            .unwrap_or(self.beyond)
    }
}
