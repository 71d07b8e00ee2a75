pub mod xor;

pub use xor::XorSampler;
