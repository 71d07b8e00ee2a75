/// Mean squared error, used to report training progress.
///
/// The weight update works from the raw residual `target - value` and never
/// calls into this type.
pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_squared_residuals() {
        assert_eq!(MseLoss::loss(&[1.0, 0.0], &[0.0, 0.0]), 0.5);
        assert_eq!(MseLoss::loss(&[0.5], &[0.5]), 0.0);
    }
}
