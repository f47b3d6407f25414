use super::EvolverError;

use serde::{Deserialize, Serialize};

/// Configuration data for population generation
/// and evolution.
///
/// # Note
/// All quantities expressing probabilities
/// should be in the range [0.0, 1.0]; [`validate`]
/// rejects anything else.
///
/// [`validate`]: EvolverConfig::validate
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvolverConfig {
    /// Number of genomes in the population.
    pub population_size: usize,
    /// Number of weights in each genome.
    pub weight_count: usize,
    /// Chance that each individual weight of an
    /// offspring is perturbed.
    pub mutation_rate: f32,
    /// Chance that a pair of parents is recombined
    /// instead of copied through.
    pub crossover_rate: f32,
    /// Top n genomes copied as-is to the next generation.
    #[serde(default = "default_elite_count")]
    pub elite_count: usize,
    /// Number of times the elite are copied.
    #[serde(default = "default_elite_copies")]
    pub elite_copies: usize,
    /// Magnitude of bound on weight perturbation
    /// during mutation.
    #[serde(default = "default_max_perturbation")]
    pub max_perturbation: f32,
}

fn default_elite_count() -> usize {
    4
}

fn default_elite_copies() -> usize {
    2
}

fn default_max_perturbation() -> f32 {
    0.3
}

impl EvolverConfig {
    /// Returns a configuration with the given sizes and rates,
    /// and default elitism (4 elite genomes, copied twice) and
    /// perturbation (0.3).
    ///
    /// # Examples
    /// ```
    /// use weightevo::EvolverConfig;
    ///
    /// let config = EvolverConfig::new(100, 0.1, 0.7, 42);
    /// assert_eq!(config.elite_count, 4);
    /// assert_eq!(config.elite_copies, 2);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(
        population_size: usize,
        mutation_rate: f32,
        crossover_rate: f32,
        weight_count: usize,
    ) -> EvolverConfig {
        EvolverConfig {
            population_size,
            weight_count,
            mutation_rate,
            crossover_rate,
            elite_count: default_elite_count(),
            elite_copies: default_elite_copies(),
            max_perturbation: default_max_perturbation(),
        }
    }

    /// Checks that the configuration describes a usable population.
    ///
    /// # Errors
    /// Returns an error if the population size or weight count
    /// is zero, if either rate lies outside `[0, 1]`, or if the
    /// perturbation is negative or not finite.
    ///
    /// # Examples
    /// ```
    /// use weightevo::{EvolverConfig, EvolverError};
    ///
    /// let config = EvolverConfig::new(0, 0.1, 0.7, 42);
    /// assert!(matches!(
    ///     config.validate(),
    ///     Err(EvolverError::DegenerateConfiguration(_))
    /// ));
    /// ```
    pub fn validate(&self) -> Result<(), EvolverError> {
        if self.population_size == 0 {
            return Err(EvolverError::DegenerateConfiguration(
                "population size is zero",
            ));
        }
        if self.weight_count == 0 {
            return Err(EvolverError::DegenerateConfiguration(
                "genome weight count is zero",
            ));
        }
        for (name, value) in [
            ("mutation rate", self.mutation_rate),
            ("crossover rate", self.crossover_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EvolverError::RateOutOfRange { name, value });
            }
        }
        if !self.max_perturbation.is_finite() || self.max_perturbation < 0.0 {
            return Err(EvolverError::RateOutOfRange {
                name: "max perturbation",
                value: self.max_perturbation,
            });
        }
        Ok(())
    }

    /// Returns the number of slots filled by elitism
    /// in a population of the configured size.
    pub fn elite_slots(&self) -> usize {
        (self.elite_count.min(self.population_size) * self.elite_copies)
            .min(self.population_size)
    }
}
