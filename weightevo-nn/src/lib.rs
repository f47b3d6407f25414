//! # WeightEvo-NN
//! A layered feedforward neural network whose weights are
//! searched by the [`WeightEvo` crate](../weightevo/index.html).
//!
//! A [`NeuralNet`] is built from a [`NetworkConfig`] and has a
//! fixed topology; its weights are imported from and exported to
//! a flat vector, so any [`Genome`] of [`NetworkConfig::weight_count`]
//! weights can be loaded into it and evaluated.
//!
//! [`Genome`]: weightevo::Genome
//!
//! # Example usage: Evaluating an evolved population
//! ```
//! use weightevo::{Evolver, EvolverConfig, RngSource};
//! use weightevo_nn::{NetworkConfig, NeuralNet};
//!
//! let config = NetworkConfig::new(3, 2, 1, 5);
//! let mut network = NeuralNet::new(&config).unwrap();
//! let mut evolver = Evolver::new(
//!     EvolverConfig::new(20, 0.1, 0.7, config.weight_count()),
//!     RngSource::seeded(3),
//! )
//! .unwrap();
//!
//! // Reward networks whose first output is high.
//! let fitnesses: Vec<f32> = evolver
//!     .population()
//!     .iter()
//!     .map(|genome| {
//!         network.load_genome(genome).unwrap();
//!         network.feed_forward(&[1.0, 0.5, -0.5]).unwrap()[0] as f32
//!     })
//!     .collect();
//!
//! evolver.new_generation(fitnesses).unwrap();
//! ```

pub mod networks;

pub use networks::{sigmoid, NetworkConfig, NetworkError, NeuralNet, Neuron, NeuronLayer, BIAS};
