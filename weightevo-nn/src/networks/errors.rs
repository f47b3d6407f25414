use std::error::Error;
use std::fmt;

/// An error type indicating an invalid network
/// topology, or a vector of the wrong length
/// passed to a network.
#[derive(Clone, Debug, PartialEq)]
pub enum NetworkError {
    /// The topology has no inputs, no outputs,
    /// or empty hidden layers.
    DegenerateTopology(&'static str),
    /// The activation response was zero, negative or not finite.
    NonPositiveResponse(f64),
    /// A weight vector's length differs from the
    /// network's total weight count.
    WeightCountMismatch { expected: usize, actual: usize },
    /// An input vector's length differs from the
    /// network's input count.
    InputCountMismatch { expected: usize, actual: usize },
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateTopology(reason) => {
                write!(f, "degenerate network topology: {}", reason)
            }
            Self::NonPositiveResponse(response) => {
                write!(f, "activation response must be positive, got {}", response)
            }
            Self::WeightCountMismatch { expected, actual } => write!(
                f,
                "network has {} weights, got a vector of {}",
                expected, actual
            ),
            Self::InputCountMismatch { expected, actual } => write!(
                f,
                "network has {} inputs, got a vector of {}",
                expected, actual
            ),
        }
    }
}

impl Error for NetworkError {}
