use std::{error::Error, fmt};

use crate::core::fractals::mandelbrot::iteration_count::MAX_ITERATIONS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationCountError {
    NotANumber { input: String },
    OutOfRange { value: i64 },
}

impl fmt::Display for IterationCountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber { input } => {
                write!(f, "iteration count '{}' is not an integer", input)
            }
            Self::OutOfRange { value } => {
                write!(
                    f,
                    "iteration count {} must be between 1 and {}",
                    value, MAX_ITERATIONS
                )
            }
        }
    }
}

impl Error for IterationCountError {}
