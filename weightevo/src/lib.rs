//! A generational genetic algorithm over fixed-length
//! weight vectors, meant to search the weights of a small
//! fixed-topology neural network.
//!
//! The host application evaluates each [`Genome`] (typically
//! by loading it into a [`weightevo-nn`] `NeuralNet` and running
//! it on some task), then hands one fitness per genome to
//! [`Evolver::new_generation`], which breeds the next population
//! through elitism, roulette selection, single-point crossover
//! and weight perturbation.
//!
//! Randomness is injected through the [`RandomSource`] trait,
//! so seeded evolvers are fully reproducible.
//!
//! [`weightevo-nn`]: ../weightevo_nn/index.html
//!
//! # Example usage: Evolution of XOR function approximator, using `weightevo-nn`
//! ```
//! use weightevo::{Evolver, EvolverConfig, Genome, RngSource};
//! use weightevo_nn::{NetworkConfig, NeuralNet};
//!
//! fn evaluate_xor(network: &NeuralNet) -> f32 {
//!     let values = [
//!         ([0.0, 0.0], 0.0),
//!         ([0.0, 1.0], 1.0),
//!         ([1.0, 0.0], 1.0),
//!         ([1.0, 1.0], 0.0),
//!     ];
//!
//!     let error: f64 = values
//!         .iter()
//!         .map(|(input, output)| (network.feed_forward(input).unwrap()[0] - output).abs())
//!         .sum();
//!
//!     (4.0 - error).powf(2.0) as f32
//! }
//!
//! fn main() {
//!     let mut network = NeuralNet::new(&NetworkConfig::new(2, 1, 1, 4)).unwrap();
//!     let mut evolver = Evolver::new(
//!         EvolverConfig::new(50, 0.1, 0.7, network.weight_count()),
//!         RngSource::seeded(0),
//!     )
//!     .unwrap();
//!
//!     for _ in 0..20 {
//!         let fitnesses: Vec<f32> = evolver
//!             .population()
//!             .iter()
//!             .map(|genome: &Genome| {
//!                 network.load_genome(genome).unwrap();
//!                 evaluate_xor(&network)
//!             })
//!             .collect();
//!         evolver.new_generation(fitnesses).unwrap();
//!     }
//!
//!     assert_eq!(evolver.generation(), 20);
//! }
//! ```

mod evolver;
mod genome;
mod rng;

pub use evolver::*;
pub use genome::Genome;
pub use rng::{RandomSource, RngSource};
