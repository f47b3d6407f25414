//! An Evolver owns a population of genomes and advances
//! it one generation at a time, using fitness values
//! supplied by the host as the source of selective pressure.
mod config;
mod errors;
pub mod logging;

use crate::{Genome, RandomSource};
pub use config::EvolverConfig;
pub use errors::EvolverError;

use tracing::{debug, trace, warn};

/// A fixed-size population of genomes evolved by
/// elitism, roulette selection, single-point crossover
/// and per-weight mutation.
#[derive(Clone, Debug)]
pub struct Evolver<R> {
    population: Vec<Genome>,
    generation: usize,
    config: EvolverConfig,
    rng: R,
}

impl<R: RandomSource> Evolver<R> {
    /// Creates a new evolver with a randomly
    /// initialized population.
    ///
    /// # Errors
    /// Returns an error if the configuration is rejected
    /// by [`EvolverConfig::validate`].
    ///
    /// # Examples
    /// ```
    /// use weightevo::{Evolver, EvolverConfig, RngSource};
    ///
    /// let evolver = Evolver::new(
    ///     EvolverConfig::new(30, 0.1, 0.7, 12),
    ///     RngSource::seeded(1),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(evolver.population().len(), 30);
    /// assert!(evolver.population().iter().all(|g| g.len() == 12));
    /// assert_eq!(evolver.generation(), 0);
    /// ```
    pub fn new(config: EvolverConfig, mut rng: R) -> Result<Evolver<R>, EvolverError> {
        config.validate()?;
        let population = Self::random_population(&config, &mut rng);
        Ok(Evolver {
            population,
            generation: 0,
            config,
            rng,
        })
    }

    fn random_population(config: &EvolverConfig, rng: &mut R) -> Vec<Genome> {
        (0..config.population_size)
            .map(|_| Genome::random(config.weight_count, rng))
            .collect()
    }

    /// Assigns the passed fitnesses to the current population,
    /// in population order, and replaces the population with
    /// the next generation.
    ///
    /// The next generation starts with [`elite_copies`] copies
    /// of the [`elite_count`] fittest genomes, and is filled
    /// with mutated offspring of roulette-selected parents.
    ///
    /// Fitness values should be non-negative. Roulette selection
    /// is not well-defined for negative fitnesses; they are
    /// accepted as-is, and selection falls back to the last genome
    /// when the cumulative fitness never reaches the drawn target.
    ///
    /// # Errors
    /// Returns an error, leaving the population untouched, if
    /// the number of fitnesses differs from the population size
    /// or any fitness is NaN or infinite.
    ///
    /// [`elite_copies`]: EvolverConfig::elite_copies
    /// [`elite_count`]: EvolverConfig::elite_count
    ///
    /// # Examples
    /// ```
    /// use weightevo::{Evolver, EvolverConfig, RngSource};
    ///
    /// let mut evolver = Evolver::new(
    ///     EvolverConfig::new(10, 0.1, 0.7, 4),
    ///     RngSource::seeded(1),
    /// )
    /// .unwrap();
    ///
    /// let fitnesses: Vec<f32> = evolver
    ///     .population()
    ///     .iter()
    ///     .map(|g| g.iter().map(f32::abs).sum())
    ///     .collect();
    /// evolver.new_generation(fitnesses).unwrap();
    ///
    /// assert_eq!(evolver.generation(), 1);
    /// assert_eq!(evolver.population().len(), 10);
    /// ```
    pub fn new_generation<I>(&mut self, fitnesses: I) -> Result<(), EvolverError>
    where
        I: IntoIterator<Item = f32>,
    {
        self.assign_fitness(fitnesses)?;
        self.generation += 1;
        debug!(
            generation = self.generation,
            best = self.champion().fitness(),
            mean = self.mean_fitness(),
            "evolving generation"
        );

        let mut next = self.elite();
        while next.len() < self.population.len() {
            let parent1 = self.select_roulette().clone();
            let parent2 = self.select_roulette().clone();

            let (offspring1, offspring2) = self.crossover(&parent1, &parent2);

            next.push(self.mutate(&offspring1));
            next.push(self.mutate(&offspring2));
        }
        next.truncate(self.population.len());

        self.population = next;
        Ok(())
    }

    /// Validates and assigns one fitness per genome.
    fn assign_fitness<I>(&mut self, fitnesses: I) -> Result<(), EvolverError>
    where
        I: IntoIterator<Item = f32>,
    {
        let fitnesses: Vec<f32> = fitnesses.into_iter().collect();
        if fitnesses.len() != self.population.len() {
            return Err(EvolverError::FitnessCountMismatch {
                expected: self.population.len(),
                actual: fitnesses.len(),
            });
        }
        if let Some((index, &value)) = fitnesses.iter().enumerate().find(|(_, f)| !f.is_finite())
        {
            return Err(EvolverError::NonFiniteFitness { index, value });
        }
        if let Some(lowest) = lowest_negative(&fitnesses) {
            warn!(
                generation = self.generation,
                fitness = lowest,
                "negative fitness passed to roulette selection"
            );
        }

        for (genome, fitness) in self.population.iter_mut().zip(fitnesses) {
            genome.fitness = fitness;
        }
        Ok(())
    }

    /// Returns the fittest genomes, repeated [`elite_copies`]
    /// times in rank order, capped at the population size.
    /// The copies have a fitness of 0.
    ///
    /// [`elite_copies`]: EvolverConfig::elite_copies
    fn elite(&self) -> Vec<Genome> {
        let mut sorted: Vec<&Genome> = self.population.iter().collect();
        // Stable, so equally fit genomes keep population order.
        sorted.sort_by(|g1, g2| g2.fitness.total_cmp(&g1.fitness));

        let best = &sorted[..self.config.elite_count.min(sorted.len())];
        let mut elite = Vec::with_capacity(self.population.len());
        for _ in 0..self.config.elite_copies {
            elite.extend(best.iter().map(|g| Genome::new(g.weights().to_vec())));
        }
        elite.truncate(self.config.elite_slots());
        elite
    }

    /// Selects a genome with probability proportional
    /// to its share of the population's total fitness.
    ///
    /// Falls back to the last genome if the running
    /// fitness sum never reaches the drawn target, which
    /// can only happen with negative fitnesses or
    /// rounding error.
    ///
    /// # Examples
    /// ```
    /// use weightevo::{Evolver, EvolverConfig, RngSource};
    ///
    /// let mut evolver = Evolver::new(
    ///     EvolverConfig::new(5, 0.0, 0.0, 2),
    ///     RngSource::seeded(9),
    /// )
    /// .unwrap();
    ///
    /// // With every fitness at 0, the first genome is always chosen.
    /// let first = evolver.population()[0].clone();
    /// assert_eq!(*evolver.select_roulette(), first);
    /// ```
    pub fn select_roulette(&mut self) -> &Genome {
        let total: f32 = self.population.iter().map(|g| g.fitness).sum();
        let slice = self.rng.uniform01() * total;

        let mut fitness_so_far = 0.0;
        for genome in &self.population {
            fitness_so_far += genome.fitness;
            if fitness_so_far >= slice {
                return genome;
            }
        }

        &self.population[self.population.len() - 1]
    }

    /// Combines two parents at a single random point,
    /// returning two complementary offspring.
    ///
    /// If the [crossover rate] is not met, or the parents
    /// have identical weights, the offspring are copies of
    /// the parents. Otherwise the crossover point `p` is drawn
    /// from `[0, L-2]`; the first offspring takes the first
    /// parent's weights before `p` and the second parent's
    /// weights from `p` on, and the second offspring the reverse.
    ///
    /// Offspring have a fitness of 0.
    ///
    /// # Panics
    /// Both parents must have the same number of weights,
    /// as every genome of one evolver does. This function
    /// panics if their lengths differ.
    ///
    /// [crossover rate]: EvolverConfig::crossover_rate
    ///
    /// # Examples
    /// ```
    /// use weightevo::{Evolver, EvolverConfig, Genome, RngSource};
    ///
    /// let mut evolver = Evolver::new(
    ///     EvolverConfig::new(4, 0.0, 1.0, 3),
    ///     RngSource::seeded(2),
    /// )
    /// .unwrap();
    ///
    /// let parent = Genome::new(vec![1.0, 2.0, 3.0]);
    /// let (a, b) = evolver.crossover(&parent, &parent);
    /// assert_eq!(a, parent);
    /// assert_eq!(b, parent);
    /// ```
    pub fn crossover(&mut self, parent1: &Genome, parent2: &Genome) -> (Genome, Genome) {
        assert_eq!(
            parent1.len(),
            parent2.len(),
            "crossover between genomes of different lengths"
        );
        if self.rng.uniform01() > self.config.crossover_rate || parent1 == parent2 {
            return (
                Genome::new(parent1.weights().to_vec()),
                Genome::new(parent2.weights().to_vec()),
            );
        }

        let point = self
            .rng
            .int_range(0, parent1.len().saturating_sub(1))
            .min(parent1.len());

        let offspring1 = parent1.weights()[..point]
            .iter()
            .chain(&parent2.weights()[point..])
            .copied()
            .collect();
        let offspring2 = parent2.weights()[..point]
            .iter()
            .chain(&parent1.weights()[point..])
            .copied()
            .collect();

        (Genome::new(offspring1), Genome::new(offspring2))
    }

    /// Returns a copy of `genome` in which each weight has
    /// had, with probability [`mutation_rate`], a random
    /// amount within [`max_perturbation`] added to it.
    ///
    /// The returned genome has a fitness of 0.
    ///
    /// [`mutation_rate`]: EvolverConfig::mutation_rate
    /// [`max_perturbation`]: EvolverConfig::max_perturbation
    ///
    /// # Examples
    /// ```
    /// use weightevo::{Evolver, EvolverConfig, Genome, RngSource};
    ///
    /// let mut evolver = Evolver::new(
    ///     EvolverConfig::new(4, 1.0, 0.0, 3),
    ///     RngSource::seeded(2),
    /// )
    /// .unwrap();
    ///
    /// let genome = Genome::new(vec![1.0, 2.0, 3.0]);
    /// let mutated = evolver.mutate(&genome);
    /// for (before, after) in genome.iter().zip(mutated.iter()) {
    ///     assert!((before - after).abs() <= 0.3);
    /// }
    /// ```
    pub fn mutate(&mut self, genome: &Genome) -> Genome {
        let mutation_rate = self.config.mutation_rate;
        let max_perturbation = self.config.max_perturbation;
        let rng = &mut self.rng;
        Genome::new(
            genome
                .iter()
                .map(|weight| {
                    if rng.uniform01() < mutation_rate {
                        weight + rng.symmetric_weight() * max_perturbation
                    } else {
                        weight
                    }
                })
                .collect(),
        )
    }

    /// Replaces the entire population with independent
    /// copies of `genome`, e.g. to resume evolution from
    /// a known solution. The generation count is kept.
    ///
    /// # Errors
    /// Returns an error if the genome's length differs
    /// from the configured weight count.
    ///
    /// # Examples
    /// ```
    /// use weightevo::{Evolver, EvolverConfig, Genome, RngSource};
    ///
    /// let mut evolver = Evolver::new(
    ///     EvolverConfig::new(8, 0.1, 0.7, 2),
    ///     RngSource::seeded(2),
    /// )
    /// .unwrap();
    ///
    /// let seed = Genome::new(vec![0.5, -0.5]);
    /// evolver.import(seed.clone()).unwrap();
    /// assert!(evolver.population().iter().all(|g| *g == seed));
    /// ```
    pub fn import(&mut self, genome: Genome) -> Result<(), EvolverError> {
        if genome.len() != self.config.weight_count {
            return Err(EvolverError::WeightCountMismatch {
                expected: self.config.weight_count,
                actual: genome.len(),
            });
        }
        trace!(generation = self.generation, "importing seed genome");
        let size = self.population.len();
        self.population = vec![genome; size];
        Ok(())
    }

    /// Resets the evolver to a freshly randomized
    /// population at generation 0.
    ///
    /// # Examples
    /// ```
    /// use weightevo::{Evolver, EvolverConfig, RngSource};
    ///
    /// let mut evolver = Evolver::new(
    ///     EvolverConfig::new(6, 0.1, 0.7, 2),
    ///     RngSource::seeded(2),
    /// )
    /// .unwrap();
    /// evolver.new_generation(vec![1.0; 6]).unwrap();
    ///
    /// evolver.reset();
    /// assert_eq!(evolver.generation(), 0);
    /// ```
    pub fn reset(&mut self) {
        trace!(generation = self.generation, "resetting population");
        self.population = Self::random_population(&self.config, &mut self.rng);
        self.generation = 0;
    }
}

/// Returns the lowest of the negative values, if any.
fn lowest_negative(fitnesses: &[f32]) -> Option<f32> {
    fitnesses
        .iter()
        .copied()
        .filter(|f| *f < 0.0)
        .reduce(f32::min)
}

impl<R> Evolver<R> {
    /// Returns the current population, in the order
    /// fitnesses are expected by [`new_generation`].
    ///
    /// [`new_generation`]: Evolver::new_generation
    pub fn population(&self) -> &[Genome] {
        &self.population
    }

    /// Returns the number of generations evolved so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Returns the genome with the highest assigned fitness.
    /// Earlier genomes win ties.
    pub fn champion(&self) -> &Genome {
        // The population is never empty.
        self.population
            .iter()
            .reduce(|best, g| if g.fitness > best.fitness { g } else { best })
            .unwrap_or(&self.population[0])
    }

    /// Returns the evolver's configuration.
    pub fn config(&self) -> &EvolverConfig {
        &self.config
    }

    /// Returns the number of weights in each genome.
    pub fn weight_count(&self) -> usize {
        self.config.weight_count
    }

    fn mean_fitness(&self) -> f32 {
        self.population.iter().map(|g| g.fitness).sum::<f32>() / self.population.len() as f32
    }
}
