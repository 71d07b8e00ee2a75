use rand::Rng;

use crate::activation::activation::Tanh;
use crate::layers::layer::Layer;
use crate::optim::sgd::Sgd;

/// An outgoing weighted edge, owned by its source neuron.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Connection {
    pub weight: f64,
    /// Size of the previous update; feeds the momentum term.
    pub delta: f64,
}

impl Connection {
    /// Weight drawn uniformly from `[0, 1)`, no momentum yet.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Connection {
        Connection {
            weight: rng.gen::<f64>(),
            delta: 0.0,
        }
    }
}

/// Borrowed view of a single neuron inside a `Layer`.
#[derive(Debug, Clone, Copy)]
pub struct Neuron<'a> {
    pub value: f64,
    pub error: f64,
    /// One connection per non-bias neuron of the next layer.
    pub output_weights: &'a [Connection],
}

/// Residual at an output neuron: `target - value`.
///
/// The activation derivative is applied later, in `nudge_output_weights`.
#[inline]
pub fn output_error(value: f64, target: f64) -> f64 {
    target - value
}

/// Error of a hidden neuron: its outgoing weights dotted with the errors of
/// the next layer's non-bias neurons.
pub fn hidden_error(output_weights: &[Connection], next_layer: &Layer) -> f64 {
    debug_assert_eq!(output_weights.len(), next_layer.size());
    let mut error = 0.0;
    for (i, connection) in output_weights.iter().enumerate() {
        error += connection.weight * next_layer.error(i);
    }
    error
}

/// Applies one momentum step to every outgoing connection of a neuron whose
/// current activation is `value`.
pub fn nudge_output_weights(
    output_weights: &mut [Connection],
    value: f64,
    next_layer: &Layer,
    optimizer: &Sgd,
) {
    debug_assert_eq!(output_weights.len(), next_layer.size());
    for (i, connection) in output_weights.iter_mut().enumerate() {
        let slope = Tanh::derivative(next_layer.value(i));
        optimizer.step(connection, next_layer.error(i), slope, value);
    }
}
