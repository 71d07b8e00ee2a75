use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws random boolean pairs `(a, b)` labelled with `a XOR b`.
#[derive(Debug, Clone)]
pub struct XorSampler {
    rng: StdRng,
}

impl XorSampler {
    pub fn new(seed: Option<u64>) -> XorSampler {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        XorSampler { rng }
    }

    /// Next `(input, target)` pair, both as `f64` vectors.
    pub fn sample(&mut self) -> (Vec<f64>, Vec<f64>) {
        let a: bool = self.rng.gen();
        let b: bool = self.rng.gen();
        encode(a, b)
    }
}

/// The four XOR cases in `(0,0), (0,1), (1,0), (1,1)` order.
pub fn truth_table() -> Vec<(Vec<f64>, Vec<f64>)> {
    [(false, false), (false, true), (true, false), (true, true)]
        .into_iter()
        .map(|(a, b)| encode(a, b))
        .collect()
}

fn encode(a: bool, b: bool) -> (Vec<f64>, Vec<f64>) {
    let bit = |x: bool| if x { 1.0 } else { 0.0 };
    (vec![bit(a), bit(b)], vec![bit(a ^ b)])
}
