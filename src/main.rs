//! Trains a small network on XOR and prints the learned truth table.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use momentum_nn::data::xor::{self, XorSampler};
use momentum_nn::{train_loop, NetConfig, NetworkSpec, TrainConfig};

#[derive(Parser)]
#[command(name = "momentum-nn")]
#[command(about = "Train a tanh network with momentum backpropagation on XOR", long_about = None)]
struct Cli {
    /// Number of online training steps
    #[arg(short, long, default_value = "2000")]
    iterations: usize,

    /// Neurons in the hidden layer (ignored with --config)
    #[arg(long, default_value = "4")]
    hidden: usize,

    /// Seed for initial weights and training samples
    #[arg(short, long)]
    seed: Option<u64>,

    /// Learning rate (eta)
    #[arg(long)]
    learning_rate: Option<f64>,

    /// Momentum coefficient (alpha)
    #[arg(long)]
    momentum: Option<f64>,

    /// JSON network spec; overrides --hidden
    #[arg(short, long)]
    config: Option<String>,

    /// Steps between progress log lines (0 disables)
    #[arg(long, default_value = "500")]
    log_every: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut spec = match &cli.config {
        Some(path) => NetworkSpec::load_json(path)
            .with_context(|| format!("failed to load network spec from {path}"))?,
        None => NetworkSpec::new("xor", vec![2, cli.hidden, 1], NetConfig::default()),
    };
    if let Some(seed) = cli.seed {
        spec.config.random_seed = Some(seed);
    }
    if let Some(lr) = cli.learning_rate {
        spec.config.learning_rate = lr;
    }
    if let Some(m) = cli.momentum {
        spec.config.momentum = m;
    }

    let mut network = spec.build().context("failed to build network")?;
    info!(name = %spec.name, topology = ?spec.topology, "training on XOR");

    // Offset keeps the sample stream independent of the weight stream.
    let mut sampler = XorSampler::new(spec.config.random_seed.map(|s| s.wrapping_add(1)));
    let train_config = TrainConfig {
        iterations: cli.iterations,
        log_every: cli.log_every,
    };
    let report = train_loop(&mut network, || sampler.sample(), &train_config)?;
    info!(loss = report.window_loss, finite = report.finite, "training finished");

    for (input, _) in xor::truth_table() {
        network.forward_propagate(&input)?;
        println!("{} XOR {} = {:.4}", input[0], input[1], network.get_result()[0]);
    }
    Ok(())
}
