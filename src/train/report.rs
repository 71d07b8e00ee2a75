/// Summary returned by `train_loop`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainReport {
    /// Steps actually performed.
    pub iterations: usize,
    /// Mean loss over the most recent progress window (or the whole run when
    /// logging is disabled).
    pub window_loss: f64,
    /// Whether every weight and value was still finite at the end.
    pub finite: bool,
}
