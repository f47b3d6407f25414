use std::error::Error;
use std::fmt;

/// An error type indicating an invalid evolver
/// configuration or an invalid call to the evolver.
#[derive(Clone, Debug, PartialEq)]
pub enum EvolverError {
    /// A size parameter was zero.
    DegenerateConfiguration(&'static str),
    /// A probability or scale parameter was outside its
    /// allowed range.
    RateOutOfRange { name: &'static str, value: f32 },
    /// The number of supplied fitnesses differs from the
    /// population size.
    FitnessCountMismatch { expected: usize, actual: usize },
    /// A supplied fitness was NaN or infinite.
    NonFiniteFitness { index: usize, value: f32 },
    /// A genome's weight count differs from the
    /// configured weight count.
    WeightCountMismatch { expected: usize, actual: usize },
}

impl fmt::Display for EvolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateConfiguration(reason) => {
                write!(f, "degenerate evolver configuration: {}", reason)
            }
            Self::RateOutOfRange { name, value } => {
                write!(f, "{} out of range: {}", name, value)
            }
            Self::FitnessCountMismatch { expected, actual } => write!(
                f,
                "expected {} fitness values (one per genome), got {}",
                expected, actual
            ),
            Self::NonFiniteFitness { index, value } => {
                write!(f, "non-finite fitness {} for genome {}", value, index)
            }
            Self::WeightCountMismatch { expected, actual } => write!(
                f,
                "genome has {} weights, population requires {}",
                actual, expected
            ),
        }
    }
}

impl Error for EvolverError {}
