pub mod config;
pub mod network;
pub mod spec;

pub use config::NetConfig;
pub use network::Network;
pub use spec::NetworkSpec;
