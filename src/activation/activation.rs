/// Hyperbolic tangent, the only activation used by the network.
///
/// The derivative is expressed in terms of the activation's *output*
/// `y = tanh(x)`, because a neuron stores its post-activation value and never
/// the pre-activation sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tanh;

impl Tanh {
    /// Element-wise activation.
    #[inline]
    pub fn function(x: f64) -> f64 {
        x.tanh()
    }

    /// Derivative at the point whose activation is `y`: `1 - y²`.
    #[inline]
    pub fn derivative(y: f64) -> f64 {
        1.0 - y * y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn derivative_takes_post_activation_value() {
        for &x in &[-3.0_f64, -1.25, -0.1, 0.0, 0.4, 1.0, 2.5, 7.0] {
            let t = x.tanh();
            assert_abs_diff_eq!(Tanh::derivative(Tanh::function(x)), 1.0 - t * t, epsilon = 1e-12);
        }
    }

    #[test]
    fn derivative_peaks_at_zero() {
        assert_eq!(Tanh::derivative(Tanh::function(0.0)), 1.0);
        assert!(Tanh::derivative(Tanh::function(5.0)) < 1e-3);
    }
}
