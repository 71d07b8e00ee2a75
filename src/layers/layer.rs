use rand::Rng;

use crate::activation::activation::Tanh;
use crate::neuron::neuron::{self, Connection, Neuron};
use crate::optim::sgd::Sgd;

/// One layer of neurons, stored as contiguous arenas.
///
/// Neuron `j` owns `values[j]`, `errors[j]` and the connection row
/// `connections[j * fan_out .. (j + 1) * fan_out]`. When `has_bias` is set the
/// last slot is the bias neuron, whose value stays at 1.0.
#[derive(Debug, Clone)]
pub struct Layer {
    size: usize,
    has_bias: bool,
    fan_out: usize,
    values: Vec<f64>,
    errors: Vec<f64>,
    connections: Vec<Connection>,
}

impl Layer {
    /// Allocates `size` neurons (plus a bias neuron if `has_bias`), each with
    /// `fan_out` randomly weighted connections.
    pub fn new<R: Rng + ?Sized>(size: usize, has_bias: bool, fan_out: usize, rng: &mut R) -> Layer {
        let len = size + has_bias as usize;
        let connections = (0..len * fan_out)
            .map(|_| Connection::random(rng))
            .collect();

        let mut values = vec![0.0; len];
        if has_bias {
            values[size] = 1.0;
        }

        Layer {
            size,
            has_bias,
            fan_out,
            values,
            errors: vec![0.0; len],
            connections,
        }
    }

    /// Number of neurons, bias included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of non-bias neurons.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn has_bias(&self) -> bool {
        self.has_bias
    }

    /// Connections per neuron (the next layer's non-bias size).
    pub fn fan_out(&self) -> usize {
        self.fan_out
    }

    pub fn value(&self, j: usize) -> f64 {
        self.values[j]
    }

    pub fn error(&self, j: usize) -> f64 {
        self.errors[j]
    }

    /// Values of the non-bias neurons.
    pub fn outputs(&self) -> &[f64] {
        &self.values[..self.size]
    }

    pub fn connections(&self, j: usize) -> &[Connection] {
        &self.connections[self.row(j)]
    }

    pub fn connection(&self, j: usize, i: usize) -> Connection {
        self.connections(j)[i]
    }

    pub fn neuron(&self, j: usize) -> Neuron<'_> {
        Neuron {
            value: self.values[j],
            error: self.errors[j],
            output_weights: self.connections(j),
        }
    }

    pub fn neurons(&self) -> impl Iterator<Item = Neuron<'_>> + '_ {
        (0..self.len()).map(move |j| self.neuron(j))
    }

    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
            && self.connections.iter().all(|c| c.weight.is_finite() && c.delta.is_finite())
    }

    /// Copies `input` verbatim into the non-bias neurons. The caller checks
    /// the length.
    pub(crate) fn load(&mut self, input: &[f64]) {
        debug_assert_eq!(input.len(), self.size);
        self.values[..self.size].copy_from_slice(input);
    }

    /// Recomputes every non-bias value from the previous layer:
    /// `tanh(Σ_k prev[k].value * prev[k].w[j])`, bias of `prev` included.
    pub(crate) fn feed_from(&mut self, prev: &Layer) {
        debug_assert_eq!(prev.fan_out, self.size);
        for j in 0..self.size {
            let mut weighted_sum = 0.0;
            for k in 0..prev.len() {
                weighted_sum += prev.values[k] * prev.connection(k, j).weight;
            }
            self.values[j] = Tanh::function(weighted_sum);
        }
    }

    pub(crate) fn calc_output_error(&mut self, j: usize, target: f64) {
        self.errors[j] = neuron::output_error(self.values[j], target);
    }

    pub(crate) fn calc_hidden_error(&mut self, j: usize, next: &Layer) {
        let row = self.row(j);
        self.errors[j] = neuron::hidden_error(&self.connections[row], next);
    }

    pub(crate) fn nudge_output_weights(&mut self, j: usize, next: &Layer, optimizer: &Sgd) {
        let row = self.row(j);
        let value = self.values[j];
        neuron::nudge_output_weights(&mut self.connections[row], value, next, optimizer);
    }

    fn row(&self, j: usize) -> std::ops::Range<usize> {
        j * self.fan_out..(j + 1) * self.fan_out
    }
}
