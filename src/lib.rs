pub mod error;
pub mod activation;
pub mod neuron;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod data;

// Convenience re-exports
pub use error::{NetError, Result};
pub use activation::activation::Tanh;
pub use neuron::neuron::{Connection, Neuron};
pub use layers::layer::Layer;
pub use network::network::Network;
pub use network::config::NetConfig;
pub use network::spec::NetworkSpec;
pub use loss::mse::MseLoss;
pub use optim::sgd::Sgd;
pub use train::{train_loop, train_sample, TrainConfig, TrainReport};
pub use data::xor::XorSampler;
