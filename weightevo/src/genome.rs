use crate::RandomSource;

use std::fmt;
use std::ops::Index;

/// A fixed-length vector of weights paired
/// with a fitness score.
///
/// The weights are never modified after construction;
/// reproduction always produces new genomes. Only the
/// owning [`Evolver`] writes a genome's fitness.
///
/// Equality compares weights only, fitness is ignored.
///
/// [`Evolver`]: crate::Evolver
#[derive(Clone, Debug)]
pub struct Genome {
    weights: Box<[f32]>,
    pub(crate) fitness: f32,
}

impl Genome {
    /// Creates a genome with the given weights
    /// and a fitness of 0.
    ///
    /// # Examples
    /// ```
    /// use weightevo::Genome;
    ///
    /// let genome = Genome::new(vec![0.5, -0.25, 1.0]);
    /// assert_eq!(genome.len(), 3);
    /// assert_eq!(genome.fitness(), 0.0);
    /// ```
    pub fn new(weights: Vec<f32>) -> Genome {
        Genome {
            weights: weights.into_boxed_slice(),
            fitness: 0.0,
        }
    }

    /// Creates a genome of `len` weights drawn
    /// from `rng`'s symmetric weight range.
    pub fn random<R: RandomSource + ?Sized>(len: usize, rng: &mut R) -> Genome {
        Genome::new((0..len).map(|_| rng.symmetric_weight()).collect())
    }

    /// Returns the same genome with its fitness replaced.
    ///
    /// # Examples
    /// ```
    /// use weightevo::Genome;
    ///
    /// let genome = Genome::new(vec![1.0]).with_fitness(3.5);
    /// assert_eq!(genome.fitness(), 3.5);
    /// ```
    pub fn with_fitness(mut self, fitness: f32) -> Genome {
        self.fitness = fitness;
        self
    }

    /// Returns the genome's weights.
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Returns the genome's fitness.
    pub fn fitness(&self) -> f32 {
        self.fitness
    }

    /// Returns the number of weights.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterates over the weights in order.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.weights.iter().copied()
    }
}

impl PartialEq for Genome {
    fn eq(&self, other: &Genome) -> bool {
        self.weights == other.weights
    }
}

impl Index<usize> for Genome {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.weights[index]
    }
}

impl From<Vec<f32>> for Genome {
    fn from(weights: Vec<f32>) -> Genome {
        Genome::new(weights)
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Genome {{ fitness: {}, weights: [", self.fitness)?;
        for (i, w) in self.weights.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.4}", w)?;
        }
        write!(f, "] }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RngSource;

    #[test]
    fn equality_ignores_fitness() {
        let a = Genome::new(vec![1.0, 2.0, 3.0]).with_fitness(10.0);
        let b = Genome::new(vec![1.0, 2.0, 3.0]);
        let c = Genome::new(vec![1.0, 2.0, 3.5]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn random_weights_are_symmetric_bounded() {
        let mut rng = RngSource::seeded(3);
        let genome = Genome::random(50, &mut rng);
        assert_eq!(genome.len(), 50);
        assert!(genome.iter().all(|w| (-1.0..1.0).contains(&w)));
        assert_eq!(genome.fitness(), 0.0);
    }

    #[test]
    fn index_and_iter_agree() {
        let genome = Genome::from(vec![0.1, 0.2, 0.3]);
        for (i, w) in genome.iter().enumerate() {
            assert_eq!(genome[i], w);
        }
        assert_eq!(genome.weights(), &[0.1, 0.2, 0.3]);
    }

    #[test]
    fn display() {
        let genome = Genome::new(vec![0.5, -1.0]).with_fitness(2.0);
        assert_eq!(
            genome.to_string(),
            "Genome { fitness: 2, weights: [0.5000, -1.0000] }"
        );
    }
}
