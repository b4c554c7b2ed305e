use serde::{Deserialize, Serialize};

/// Round parameters, as supplied by the host.
///
/// Every field is optional in serialized form; missing fields take the
/// [`Default`] values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    pub min_tokens: usize,
    pub max_tokens: usize,
    pub guess_count: usize,
    pub sample_range_min: f64,
    pub sample_range_max: f64,
    pub sample_count: usize,
    pub match_threshold: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            min_tokens: 3,
            max_tokens: 9,
            guess_count: 6,
            sample_range_min: -50.0,
            sample_range_max: 50.0,
            sample_count: 1000,
            match_threshold: 1e-4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("token bounds are inverted: min {min} > max {max}")]
    InvertedTokenBounds { min: usize, max: usize },

    #[error("a target needs at least one token")]
    ZeroTokens,

    #[error("need at least two sample points, got {0}")]
    TooFewSamples(usize),

    #[error("sample range [{min}, {max}] is empty")]
    EmptySampleRange { min: f64, max: f64 },

    #[error("match threshold must be positive, got {0}")]
    NonPositiveThreshold(f64),

    #[error("a round needs at least one guess")]
    NoGuesses,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_tokens > self.max_tokens {
            return Err(ConfigError::InvertedTokenBounds {
                min: self.min_tokens,
                max: self.max_tokens,
            });
        }
        if self.max_tokens == 0 {
            return Err(ConfigError::ZeroTokens);
        }
        if self.guess_count == 0 {
            return Err(ConfigError::NoGuesses);
        }
        if self.sample_count < 2 {
            return Err(ConfigError::TooFewSamples(self.sample_count));
        }
        // Written so that NaN bounds are rejected too.
        if !(self.sample_range_min < self.sample_range_max) {
            return Err(ConfigError::EmptySampleRange {
                min: self.sample_range_min,
                max: self.sample_range_max,
            });
        }
        if !(self.match_threshold > 0.0) {
            return Err(ConfigError::NonPositiveThreshold(self.match_threshold));
        }
        Ok(())
    }

    /// The x values both functions are compared and plotted at.
    pub fn samples(&self) -> Vec<f64> {
        evaluator::sample_points(
            self.sample_range_min,
            self.sample_range_max,
            self.sample_count,
        )
    }
}
