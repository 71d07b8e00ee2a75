use serde::{Deserialize, Serialize};

/// Hyper-parameters and seeding for a `Network`.
///
/// Missing fields fall back to the defaults when deserialized, so a config
/// file may contain only `{"random_seed": 42}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetConfig {
    /// Scale of each gradient step (eta).
    pub learning_rate: f64,
    /// Fraction of the previous update carried into the next one (alpha).
    pub momentum: f64,
    /// Seed for initial weights; `None` draws one from the OS.
    pub random_seed: Option<u64>,
}

impl Default for NetConfig {
    fn default() -> Self {
        NetConfig {
            learning_rate: 0.15,
            momentum: 0.5,
            random_seed: None,
        }
    }
}

impl NetConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_momentum(mut self, momentum: f64) -> Self {
        self.momentum = momentum;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let config: NetConfig = serde_json::from_str(r#"{"random_seed": 42}"#).unwrap();
        assert_eq!(config, NetConfig::default().with_seed(42));
    }
}
