use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::error::{NetError, Result};
use crate::layers::layer::Layer;
use crate::network::config::NetConfig;
use crate::optim::sgd::Sgd;

/// A fully-connected feedforward network of tanh neurons.
///
/// Every layer but the output layer carries a bias neuron pinned at 1.0.
/// All storage is allocated in `new`; training mutates it in place.
#[derive(Debug, Clone)]
pub struct Network {
    topology: Vec<usize>,
    layers: Vec<Layer>,
    config: NetConfig,
    optimizer: Sgd,
}

impl Network {
    /// Builds a network from per-layer neuron counts (bias excluded).
    ///
    /// Fails with `InvalidTopology` for fewer than two layers or an empty layer.
    pub fn new(topology: &[usize], config: NetConfig) -> Result<Network> {
        if topology.len() < 2 {
            return Err(NetError::InvalidTopology(format!(
                "need at least 2 layers, got {}",
                topology.len()
            )));
        }
        if let Some(i) = topology.iter().position(|&n| n == 0) {
            return Err(NetError::InvalidTopology(format!("layer {i} has no neurons")));
        }

        let mut rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let last = topology.len() - 1;
        let layers = topology
            .iter()
            .enumerate()
            .map(|(i, &size)| {
                let fan_out = if i < last { topology[i + 1] } else { 0 };
                Layer::new(size, i < last, fan_out, &mut rng)
            })
            .collect();

        debug!(?topology, seed = ?config.random_seed, "network initialized");

        Ok(Network {
            topology: topology.to_vec(),
            layers,
            optimizer: Sgd::from(&config),
            config,
        })
    }

    /// Feeds `input` through the network, updating every neuron's value.
    pub fn forward_propagate(&mut self, input: &[f64]) -> Result<()> {
        let expected = self.topology[0];
        if input.len() != expected {
            return Err(NetError::size_mismatch("input", expected, input.len()));
        }

        self.layers[0].load(input);
        for i in 1..self.layers.len() {
            let (before, after) = self.layers.split_at_mut(i);
            after[0].feed_from(&before[i - 1]);
        }
        Ok(())
    }

    /// Computes error signals against `target` and applies one momentum
    /// update to every connection.
    ///
    /// Assumes the preceding `forward_propagate` used the input matching
    /// `target`; otherwise the update is meaningless but not an error.
    pub fn back_prop(&mut self, target: &[f64]) -> Result<()> {
        let expected = *self.topology.last().unwrap_or(&0);
        if target.len() != expected {
            return Err(NetError::size_mismatch("target", expected, target.len()));
        }

        let last = self.layers.len() - 1;

        // Output residuals.
        let output = &mut self.layers[last];
        for (j, &t) in target.iter().enumerate() {
            output.calc_output_error(j, t);
        }

        // Hidden errors, back to front. Each pass reads the errors just
        // written one layer up, so this must finish before any weight moves.
        for i in (0..last).rev() {
            let (before, after) = self.layers.split_at_mut(i + 1);
            let (layer, next) = (&mut before[i], &after[0]);
            for j in 0..layer.size() {
                layer.calc_hidden_error(j, next);
            }
        }

        // Weight updates, bias neurons included.
        for i in 0..last {
            let (before, after) = self.layers.split_at_mut(i + 1);
            let (layer, next) = (&mut before[i], &after[0]);
            for j in 0..layer.len() {
                layer.nudge_output_weights(j, next, &self.optimizer);
            }
        }
        Ok(())
    }

    /// Values of the output neurons, in index order.
    pub fn get_result(&self) -> Vec<f64> {
        self.output_layer().outputs().to_vec()
    }

    pub fn topology(&self) -> &[usize] {
        &self.topology
    }

    pub fn config(&self) -> &NetConfig {
        &self.config
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layer(&self, i: usize) -> &Layer {
        &self.layers[i]
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// `false` once any value, weight or delta has become NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.layers.iter().all(Layer::is_finite)
    }

    fn output_layer(&self) -> &Layer {
        &self.layers[self.layers.len() - 1]
    }
}
