pub mod neuron;

pub use neuron::{Connection, Neuron};
