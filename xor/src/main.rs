use weightevo::logging::{EvolutionLogger, GenerationMemberRecord, ReportingLevel};
use weightevo::{Evolver, EvolverConfig, RngSource};
use weightevo_nn::{NetworkConfig, NeuralNet};

use serde::Deserialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use std::error::Error;

const ERROR_MARGIN: f64 = 0.3;
const MAX_FITNESS: f32 = 16.0;

#[derive(Debug, Deserialize)]
struct ExperimentConfig {
    network: NetworkConfig,
    evolver: EvolverConfig,
    generations: usize,
    seed: Option<u64>,
}

impl ExperimentConfig {
    fn default_for(network: NetworkConfig) -> ExperimentConfig {
        let mut evolver = EvolverConfig::new(150, 0.1, 0.7, network.weight_count());
        evolver.max_perturbation = 0.5;
        ExperimentConfig {
            network,
            evolver,
            generations: 500,
            seed: None,
        }
    }
}

fn evaluate_xor(network: &NeuralNet) -> f32 {
    let values = [
        ([0.0, 0.0], 0.0),
        ([0.0, 1.0], 1.0),
        ([1.0, 0.0], 1.0),
        ([1.0, 1.0], 0.0),
    ];

    let mut errors: [f64; 4] = [0.0, 0.0, 0.0, 0.0];
    for (i, (input, output)) in values.iter().enumerate() {
        // Inputs always match the configured two-input topology.
        errors[i] = match network.feed_forward(input) {
            Ok(result) => (result[0] - output).abs(),
            Err(_) => 1.0,
        };
        if errors[i] < ERROR_MARGIN {
            errors[i] = 0.0;
        }
    }

    (4.0 - errors.iter().copied().sum::<f64>()).powf(2.0) as f32
}

fn load_config() -> Result<ExperimentConfig, Box<dyn Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)?;
            let config: ExperimentConfig = ron::from_str(&text)?;
            if config.evolver.weight_count != config.network.weight_count() {
                return Err(format!(
                    "{} weights per genome configured, network needs {}",
                    config.evolver.weight_count,
                    config.network.weight_count()
                )
                .into());
            }
            Ok(config)
        }
        None => Ok(ExperimentConfig::default_for(NetworkConfig::new(2, 1, 1, 4))),
    }
}

fn run(config: ExperimentConfig) -> Result<(), Box<dyn Error>> {
    let mut network = NeuralNet::new(&config.network)?;
    let rng = match config.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    let mut evolver = Evolver::new(config.evolver, rng)?;
    let mut logger = EvolutionLogger::new(ReportingLevel::Champion);

    for _ in 0..config.generations {
        let mut fitnesses = Vec::with_capacity(evolver.population().len());
        for genome in evolver.population() {
            network.load_genome(genome)?;
            fitnesses.push(evaluate_xor(&network));
        }

        logger.log(
            &evolver,
            &fitnesses,
            &|g| [g.iter().map(f32::abs).sum::<f32>() / g.len() as f32],
            ["mean |weight|"],
        )?;
        if fitnesses.iter().any(|f| (f - MAX_FITNESS).abs() < f32::EPSILON) {
            break;
        }
        evolver.new_generation(fitnesses)?;
    }

    let last = logger.last().ok_or("no generations were evaluated")?;
    println!("{}", last);
    match &last.generation_sample {
        GenerationMemberRecord::Champion(champion)
            if (champion.fitness() - MAX_FITNESS).abs() < f32::EPSILON =>
        {
            info!(generation = last.generation_number, "solution found");
            println!("{}", champion);
            network.load_genome(champion)?;
            for input in [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]] {
                println!("{:?} -> {:.3}", input, network.feed_forward(&input)?[0]);
            }
        }
        _ => info!(
            generations = config.generations,
            best = last.fitness.maximum,
            "no solution found"
        ),
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = load_config().and_then(run) {
        error!("{}", e);
        std::process::exit(1);
    }
}
