//! Search-space domain bounds.

use crate::error::{Error, Result};
use rand::Rng;

/// Per-dimension lower and upper limits of the search space.
///
/// Used by initialization strategies to draw uniform-random starting
/// positions and by movement strategies to keep updated positions inside
/// the domain.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl Bounds {
    /// Creates bounds from per-dimension lower and upper vectors.
    ///
    /// Returns [`Error::InvalidBounds`] if the vectors are empty, differ
    /// in length, contain non-finite values, or any lower limit exceeds
    /// its upper limit.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self> {
        if lower.is_empty() {
            return Err(Error::InvalidBounds(
                "domain must have at least one dimension".into(),
            ));
        }
        if lower.len() != upper.len() {
            return Err(Error::InvalidBounds(format!(
                "lower has {} dimensions but upper has {}",
                lower.len(),
                upper.len()
            )));
        }
        for (i, (&lo, &hi)) in lower.iter().zip(upper.iter()).enumerate() {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(Error::InvalidBounds(format!(
                    "dimension {i} has non-finite limits [{lo}, {hi}]"
                )));
            }
            if lo > hi {
                return Err(Error::InvalidBounds(format!(
                    "dimension {i} has lower {lo} > upper {hi}"
                )));
            }
        }
        Ok(Self { lower, upper })
    }

    /// Creates the symmetric domain `[-half_width, half_width]` in every
    /// dimension.
    pub fn symmetric(dimension: usize, half_width: f64) -> Result<Self> {
        Self::new(vec![-half_width; dimension], vec![half_width; dimension])
    }

    /// Number of dimensions.
    pub fn dimension(&self) -> usize {
        self.lower.len()
    }

    /// Per-dimension lower limits.
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Per-dimension upper limits.
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Draws a uniform-random position inside the domain.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        self.lower
            .iter()
            .zip(self.upper.iter())
            .map(|(&lo, &hi)| if hi > lo { rng.random_range(lo..hi) } else { lo })
            .collect()
    }

    /// Clamps each coordinate of `position` into the domain.
    ///
    /// Trailing coordinates beyond the domain's dimension are left
    /// untouched.
    pub fn clamp(&self, position: &mut [f64]) {
        for (value, (&lo, &hi)) in position
            .iter_mut()
            .zip(self.lower.iter().zip(self.upper.iter()))
        {
            *value = value.clamp(lo, hi);
        }
    }
}
