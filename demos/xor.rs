use momentum_nn::{data::xor, train_sample, NetConfig, Network, XorSampler};

fn main() -> momentum_nn::Result<()> {
    let mut network = Network::new(&[2, 4, 1], NetConfig::default())?;
    let mut sampler = XorSampler::new(None);
    let steps = 10000;

    let mut window_loss = 0.0;
    for step in 1..=steps {
        let (input, target) = sampler.sample();
        window_loss += train_sample(&mut network, &input, &target)?;
        if step % 1000 == 0 {
            println!("Step {step}: loss = {:.6}", window_loss / 1000.0);
            window_loss = 0.0;
        }
    }

    for (input, _) in xor::truth_table() {
        network.forward_propagate(&input)?;
        println!("Input: {:?} -> Output: {:.4}", input, network.get_result()[0]);
    }
    Ok(())
}
