use crate::{
    error::Result,
    loss::mse::MseLoss,
    network::network::Network,
};

/// One online training step: forward pass, loss for reporting, backprop.
///
/// Returns the MSE of the output produced *before* the update.
pub fn train_sample(network: &mut Network, input: &[f64], target: &[f64]) -> Result<f64> {
    network.forward_propagate(input)?;
    let loss = MseLoss::loss(&network.get_result(), target);
    network.back_prop(target)?;
    Ok(loss)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetError;
    use crate::network::config::NetConfig;

    #[test]
    fn repeated_steps_reduce_loss_on_one_sample() {
        let mut net = Network::new(&[2, 3, 1], NetConfig::default().with_seed(21)).unwrap();
        let first = train_sample(&mut net, &[1.0, 0.0], &[0.0]).unwrap();
        let mut last = first;
        for _ in 0..200 {
            last = train_sample(&mut net, &[1.0, 0.0], &[0.0]).unwrap();
        }
        assert!(last < first);
    }

    #[test]
    fn mismatched_target_is_reported() {
        let mut net = Network::new(&[2, 3, 1], NetConfig::default().with_seed(21)).unwrap();
        let err = train_sample(&mut net, &[1.0, 0.0], &[0.0, 1.0]).unwrap_err();
        assert!(matches!(err, NetError::SizeMismatch { what: "target", .. }));
    }
}
