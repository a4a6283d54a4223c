/// A differentiable element-wise activation.
///
/// The derivative is expressed in terms of the activation's *output* `y`,
/// because training only keeps the post-activation vectors around.
pub trait Activation {
    fn apply(&self, x: f64) -> f64;

    /// Derivative at the point whose activation value is `y`.
    fn derivative_from_output(&self, y: f64) -> f64;

    fn apply_vec(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.apply(x)).collect()
    }
}

/// Smallest value [`Sigmoid`] returns.
pub const SIGMOID_FLOOR: f64 = f64::EPSILON;
/// Largest value [`Sigmoid`] returns.
pub const SIGMOID_CEILING: f64 = 1.0 - f64::EPSILON;

/// Logistic sigmoid, σ(x) = 1 / (1 + e^(-x)). Maps ℝ onto (0, 1).
///
/// Outputs are clamped to `[SIGMOID_FLOOR, SIGMOID_CEILING]` so a saturated
/// unit never reports exactly 0.0 or 1.0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sigmoid;

impl Activation for Sigmoid {
    fn apply(&self, x: f64) -> f64 {
        // exp() only ever sees a non-positive argument, so it cannot overflow.
        let y = if x >= 0.0 {
            1.0 / (1.0 + (-x).exp())
        } else {
            let e = x.exp();
            e / (1.0 + e)
        };
        y.clamp(SIGMOID_FLOOR, SIGMOID_CEILING)
    }

    fn derivative_from_output(&self, y: f64) -> f64 {
        y * (1.0 - y)
    }
}
