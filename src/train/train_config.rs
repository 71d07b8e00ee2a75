/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `iterations` — number of online training steps (one sample each)
/// - `log_every`  — steps per progress window; `0` disables progress logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainConfig {
    pub iterations: usize,
    pub log_every: usize,
}

impl TrainConfig {
    pub fn new(iterations: usize) -> Self {
        TrainConfig {
            iterations,
            ..TrainConfig::default()
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            iterations: 2000,
            log_every: 500,
        }
    }
}
