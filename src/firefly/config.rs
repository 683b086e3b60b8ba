//! Firefly movement parameters.

/// Configuration for [`FireflyIteration`](super::FireflyIteration).
///
/// # Defaults
///
/// ```
/// use metapop::firefly::FireflyConfig;
///
/// let config = FireflyConfig::default();
/// assert_eq!(config.alpha, 0.2);
/// assert_eq!(config.beta0, 1.0);
/// assert_eq!(config.gamma, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FireflyConfig {
    /// Scale of the uniform random step, as a fraction of each
    /// dimension's domain width (0.0–1.0). Larger values explore more.
    pub alpha: f64,

    /// Attractiveness at distance zero. Controls how strongly an entity
    /// is pulled toward a brighter neighbor.
    pub beta0: f64,

    /// Light absorption coefficient. Larger values make attraction fall
    /// off faster with distance, keeping influence local.
    pub gamma: f64,
}

impl Default for FireflyConfig {
    fn default() -> Self {
        Self {
            alpha: 0.2,
            beta0: 1.0,
            gamma: 1.0,
        }
    }
}

impl FireflyConfig {
    /// Sets the random step scale, clamped to `0.0..=1.0`.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Sets the attractiveness at distance zero, floored at 0.
    pub fn with_beta0(mut self, beta0: f64) -> Self {
        self.beta0 = beta0.max(0.0);
        self
    }

    /// Sets the light absorption coefficient, floored at 0.
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma.max(0.0);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err("alpha must be within 0.0..=1.0".into());
        }
        if !self.beta0.is_finite() || self.beta0 < 0.0 {
            return Err("beta0 must be non-negative and finite".into());
        }
        if !self.gamma.is_finite() || self.gamma < 0.0 {
            return Err("gamma must be non-negative and finite".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(FireflyConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builder_clamps() {
        let config = FireflyConfig::default()
            .with_alpha(2.0)
            .with_beta0(-1.0)
            .with_gamma(-0.5);
        assert_eq!(config.alpha, 1.0);
        assert_eq!(config.beta0, 0.0);
        assert_eq!(config.gamma, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let config = FireflyConfig {
            alpha: f64::NAN,
            ..FireflyConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
