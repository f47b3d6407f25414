use super::{Evolver, EvolverError};
use crate::Genome;

use std::fmt;

/// Defines different possible reporting levels for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportingLevel {
    /// Clones the entire population.
    AllGenomes,
    /// Clones the genomes that elitism will carry over.
    Elite,
    /// Clones only the population champion.
    Champion,
    /// Clones no genomes.
    NoGenomes,
}

/// A snapshot of an evaluated generation.
#[derive(Clone, Debug)]
pub struct Log {
    pub generation_number: usize,
    pub generation_sample: GenerationMemberRecord,
    pub fitness: Stats,
    pub genome_stats: Vec<(String, Stats)>,
}

impl fmt::Display for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Log {{\n\
            \tgeneration_number: {:?}\n\
            \tfitness: {:?}\n\
            {}\
            }}",
            &self.generation_number,
            &self.fitness,
            self.genome_stats
                .iter()
                .map(|(name, stats)| format!("\t{}: {:?}\n", name, stats))
                .collect::<Vec<_>>()
                .join("")
        )
    }
}

/// A struct for reporting basic statistical data.
#[derive(Clone, Debug, PartialEq)]
pub struct Stats {
    pub maximum: f32,
    pub minimum: f32,
    pub mean: f32,
    pub median: f32,
}

impl Stats {
    /// Returns statistics about numbers in a sequence,
    /// or `None` if the sequence is empty.
    ///
    /// # Examples
    /// ```
    /// use weightevo::logging::Stats;
    ///
    /// let stats = Stats::from_data([-2.0, -1.0, 0.5, 1.0, 1.5]).unwrap();
    /// assert_eq!(stats.maximum, 1.5);
    /// assert_eq!(stats.minimum, -2.0);
    /// assert_eq!(stats.mean, 0.0);
    /// assert_eq!(stats.median, 0.5);
    ///
    /// assert!(Stats::from_data(std::iter::empty()).is_none());
    /// ```
    pub fn from_data(data: impl IntoIterator<Item = f32>) -> Option<Stats> {
        let mut data: Vec<f32> = data.into_iter().collect();
        if data.is_empty() {
            return None;
        }
        data.sort_unstable_by(f32::total_cmp);

        let mid = data.len() / 2;
        let median = if data.len() % 2 == 0 {
            (data[mid - 1] + data[mid]) / 2.0
        } else {
            data[mid]
        };
        Some(Stats {
            maximum: data[data.len() - 1],
            minimum: data[0],
            mean: data.iter().sum::<f32>() / data.len() as f32,
            median,
        })
    }
}

/// A reporting-level dependant store
/// of genomes from a generation, with
/// their fitness assigned.
#[derive(Clone, Debug)]
pub enum GenerationMemberRecord {
    /// Every genome, in population order.
    AllGenomes(Vec<Genome>),
    /// The elite, in decreasing order of fitness.
    Elite(Vec<Genome>),
    /// Only the generation's champion.
    Champion(Genome),
    /// Empty.
    None,
}

/// A log of the evolution of a population over time.
#[derive(Clone, Debug)]
pub struct EvolutionLogger {
    reporting_level: ReportingLevel,
    logs: Vec<Log>,
}

impl EvolutionLogger {
    /// Returns a logger with the appropiate reporting level.
    ///
    /// # Examples
    /// ```
    /// use weightevo::logging::{EvolutionLogger, ReportingLevel};
    ///
    /// let logger = EvolutionLogger::new(ReportingLevel::NoGenomes);
    /// ```
    pub fn new(reporting_level: ReportingLevel) -> EvolutionLogger {
        EvolutionLogger {
            reporting_level,
            logs: vec![],
        }
    }

    /// Stores a snapshot of the evolver's current generation,
    /// as evaluated by `fitnesses`. Call it before passing the
    /// same fitnesses to [`Evolver::new_generation`].
    ///
    /// The `genome_stat_extractor` provides a way of
    /// obtaining arbitrary statistics on the population,
    /// where each statistic is named by `stat_names`.
    ///
    /// # Errors
    /// Returns an error if the number of fitnesses differs
    /// from the population size.
    ///
    /// # Examples
    /// ```
    /// use weightevo::{Evolver, EvolverConfig, RngSource};
    /// use weightevo::logging::{EvolutionLogger, ReportingLevel};
    ///
    /// let mut logger = EvolutionLogger::new(ReportingLevel::Champion);
    /// let mut evolver = Evolver::new(
    ///     EvolverConfig::new(10, 0.1, 0.7, 3),
    ///     RngSource::seeded(5),
    /// )
    /// .unwrap();
    ///
    /// let fitnesses = vec![1.0; 10];
    /// logger
    ///     .log(&evolver, &fitnesses, &|g| [g[0].abs()], ["first weight"])
    ///     .unwrap();
    /// evolver.new_generation(fitnesses).unwrap();
    ///
    /// assert_eq!(logger.iter().count(), 1);
    /// ```
    pub fn log<R, GSE, const N: usize>(
        &mut self,
        evolver: &Evolver<R>,
        fitnesses: &[f32],
        genome_stat_extractor: &GSE,
        stat_names: [&str; N],
    ) -> Result<(), EvolverError>
    where
        GSE: Fn(&Genome) -> [f32; N],
    {
        let population = evolver.population();
        let fitness = match Stats::from_data(fitnesses.iter().copied()) {
            Some(stats) if fitnesses.len() == population.len() => stats,
            _ => {
                return Err(EvolverError::FitnessCountMismatch {
                    expected: population.len(),
                    actual: fitnesses.len(),
                })
            }
        };

        let stats: Vec<[f32; N]> = population.iter().map(genome_stat_extractor).collect();
        let genome_stats = stat_names
            .iter()
            .map(|name| name.to_string())
            .zip(unzip_n_vecs(stats.into_iter()))
            .filter_map(|(name, data)| Stats::from_data(data).map(|s| (name, s)))
            .collect();

        let evaluated = population
            .iter()
            .zip(fitnesses)
            .map(|(g, f)| (g, *f));
        self.logs.push(Log {
            generation_number: evolver.generation(),
            generation_sample: match self.reporting_level {
                ReportingLevel::AllGenomes => GenerationMemberRecord::AllGenomes(
                    evaluated.map(|(g, f)| g.clone().with_fitness(f)).collect(),
                ),
                ReportingLevel::Elite => {
                    let mut ranked: Vec<(&Genome, f32)> = evaluated.collect();
                    ranked.sort_by(|(_, f1), (_, f2)| f2.total_cmp(f1));
                    ranked.truncate(evolver.config().elite_count);
                    GenerationMemberRecord::Elite(
                        ranked
                            .into_iter()
                            .map(|(g, f)| g.clone().with_fitness(f))
                            .collect(),
                    )
                }
                ReportingLevel::Champion => {
                    let (g, f) = evaluated
                        .reduce(|best, c| if c.1 > best.1 { c } else { best })
                        .unwrap_or((&population[0], fitnesses[0]));
                    GenerationMemberRecord::Champion(g.clone().with_fitness(f))
                }
                ReportingLevel::NoGenomes => GenerationMemberRecord::None,
            },
            fitness,
            genome_stats,
        });
        Ok(())
    }

    /// Iterate over all logged snapshots.
    ///
    /// # Examples
    /// ```
    /// use weightevo::logging::{EvolutionLogger, ReportingLevel};
    ///
    /// let logger = EvolutionLogger::new(ReportingLevel::AllGenomes);
    /// // Log some stuff... then
    /// for log in logger.iter() {
    ///     println!("{}", log);
    /// }
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = &Log> {
        self.logs.iter()
    }

    /// Returns the most recent snapshot, if any.
    pub fn last(&self) -> Option<&Log> {
        self.logs.last()
    }
}

fn unzip_n_vecs<T: Clone, const N: usize>(iter: impl Iterator<Item = [T; N]>) -> Vec<Vec<T>> {
    let mut vecs = vec![Vec::default(); N];
    for items in iter {
        for (vec, item) in vecs.iter_mut().zip(items) {
            vec.push(item);
        }
    }
    vecs
}
