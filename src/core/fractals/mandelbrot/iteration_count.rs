use std::str::FromStr;

use crate::core::fractals::mandelbrot::errors::IterationCountError;

pub const MIN_ITERATIONS: u32 = 1;
pub const MAX_ITERATIONS: u32 = 8192;

/// A per-pixel iteration budget in `MIN_ITERATIONS..=MAX_ITERATIONS`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct IterationCount(u32);

impl IterationCount {
    pub fn new(value: i64) -> Result<Self, IterationCountError> {
        u32::try_from(value)
            .ok()
            .filter(|v| (MIN_ITERATIONS..=MAX_ITERATIONS).contains(v))
            .map(Self)
            .ok_or(IterationCountError::OutOfRange { value })
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for IterationCount {
    type Error = IterationCountError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for IterationCount {
    type Err = IterationCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| IterationCountError::NotANumber {
                input: trimmed.to_string(),
            })?;

        Self::new(value)
    }
}

impl From<IterationCount> for u32 {
    fn from(count: IterationCount) -> Self {
        count.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_full_range() {
        assert_eq!(IterationCount::new(1).unwrap().get(), 1);
        assert_eq!(IterationCount::new(100).unwrap().get(), 100);
        assert_eq!(IterationCount::new(8192).unwrap().get(), 8192);
    }

    #[test]
    fn test_new_rejects_zero_and_negative() {
        assert_eq!(
            IterationCount::new(0),
            Err(IterationCountError::OutOfRange { value: 0 })
        );
        assert_eq!(
            IterationCount::new(-5),
            Err(IterationCountError::OutOfRange { value: -5 })
        );
    }

    #[test]
    fn test_new_rejects_above_maximum() {
        assert_eq!(
            IterationCount::new(8193),
            Err(IterationCountError::OutOfRange { value: 8193 })
        );
        assert!(IterationCount::new(i64::MAX).is_err());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("  250 ".parse::<IterationCount>().unwrap().get(), 250);
        assert_eq!(
            "abc".parse::<IterationCount>(),
            Err(IterationCountError::NotANumber {
                input: "abc".to_string()
            })
        );
        assert_eq!(
            "12.5".parse::<IterationCount>(),
            Err(IterationCountError::NotANumber {
                input: "12.5".to_string()
            })
        );
        assert_eq!(
            "-1".parse::<IterationCount>(),
            Err(IterationCountError::OutOfRange { value: -1 })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            IterationCountError::OutOfRange { value: 0 }.to_string(),
            "iteration count 0 must be between 1 and 8192"
        );
        assert_eq!(
            IterationCountError::NotANumber {
                input: "ten".to_string()
            }
            .to_string(),
            "iteration count 'ten' is not an integer"
        );
    }
}
