use std::ops::RangeInclusive;

use crate::Quantity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub warmup_count: SampleSize,
    pub strength_count: SampleSize,
    /// Used for warmup exercises whose duration is not part of the catalog.
    pub default_warmup_duration: Quantity,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            warmup_count: SampleSize { min: 3, max: 5 },
            strength_count: SampleSize { min: 1, max: 2 },
            default_warmup_duration: Quantity::Text("30 seconds".to_string()),
        }
    }
}

/// Inclusive bounds for the number of entries drawn from a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSize {
    min: usize,
    max: usize,
}

impl SampleSize {
    pub fn new(min: usize, max: usize) -> Result<Self, SampleSizeError> {
        if min > max {
            return Err(SampleSizeError::InvertedBounds(min, max));
        }

        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> usize {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> usize {
        self.max
    }

    #[must_use]
    pub fn range(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SampleSizeError {
    #[error("Minimum sample size must not exceed maximum ({0} > {1})")]
    InvertedBounds(usize, usize),
}
