use tracing::{info, warn};

use crate::error::Result;
use crate::network::network::Network;
use crate::train::report::TrainReport;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_sample;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` online for `config.iterations` steps, drawing one
/// `(input, target)` pair from `sampler` per step.
///
/// Every `config.log_every` steps the mean loss of the window is logged at
/// `info` level. A `warn` is logged the first time the network is found to
/// contain a non-finite value; training continues regardless.
///
/// # Errors
/// Stops at the first sample whose shape disagrees with the topology.
pub fn train_loop<S>(network: &mut Network, mut sampler: S, config: &TrainConfig) -> Result<TrainReport>
where
    S: FnMut() -> (Vec<f64>, Vec<f64>),
{
    let mut window = Window::default();
    let mut last_window_loss = None;
    let mut warned = false;

    for step in 1..=config.iterations {
        let (input, target) = sampler();
        window.push(train_sample(network, &input, &target)?);

        if config.log_every > 0 && step % config.log_every == 0 {
            let loss = window.take_mean();
            info!(step, total = config.iterations, loss, "training progress");
            last_window_loss = Some(loss);
            warned |= check_finite(network, step, warned);
        }
    }

    let finite = network.is_finite();
    if !finite && !warned {
        warn!(step = config.iterations, "network contains non-finite values");
    }

    Ok(TrainReport {
        iterations: config.iterations,
        window_loss: last_window_loss.unwrap_or_else(|| window.take_mean()),
        finite,
    })
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Window {
    sum: f64,
    len: usize,
}

impl Window {
    fn push(&mut self, loss: f64) {
        self.sum += loss;
        self.len += 1;
    }

    fn take_mean(&mut self) -> f64 {
        let mean = if self.len == 0 { 0.0 } else { self.sum / self.len as f64 };
        *self = Window::default();
        mean
    }
}

/// Logs once when the network diverges. Returns whether a warning was issued.
fn check_finite(network: &Network, step: usize, already_warned: bool) -> bool {
    if already_warned || network.is_finite() {
        return false;
    }
    warn!(step, "network contains non-finite values");
    true
}
