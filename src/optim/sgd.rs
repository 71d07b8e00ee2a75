use crate::network::config::NetConfig;
use crate::neuron::neuron::Connection;

/// Stochastic gradient step with momentum, applied one connection at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
    pub momentum: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64, momentum: f64) -> Sgd {
        Sgd { learning_rate, momentum }
    }

    /// Nudges one connection.
    ///
    /// `signal` is the downstream neuron's error, `slope` the activation
    /// derivative at its output and `input` the upstream neuron's value:
    ///
    /// `delta = learning_rate * signal * slope * input + momentum * delta_prev`
    /// `weight += delta`
    #[inline]
    pub fn step(&self, connection: &mut Connection, signal: f64, slope: f64, input: f64) {
        let new_delta =
            self.learning_rate * signal * slope * input + self.momentum * connection.delta;
        connection.delta = new_delta;
        connection.weight += new_delta;
    }
}

impl From<&NetConfig> for Sgd {
    fn from(config: &NetConfig) -> Self {
        Sgd::new(config.learning_rate, config.momentum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_carries_momentum_forward() {
        let sgd = Sgd::new(0.15, 0.5);
        let mut c = Connection { weight: 0.25, delta: 0.0 };

        sgd.step(&mut c, 1.0, 1.0, 1.0);
        assert_eq!(c.delta, 0.15);
        assert_eq!(c.weight, 0.25 + 0.15);

        // No new gradient: only the momentum term remains.
        sgd.step(&mut c, 0.0, 1.0, 1.0);
        assert_eq!(c.delta, 0.075);
        assert_eq!(c.weight, 0.25 + 0.15 + 0.075);
    }

    #[test]
    fn built_from_config() {
        let sgd = Sgd::from(&NetConfig::default());
        assert_eq!(sgd, Sgd::new(0.15, 0.5));
    }
}
