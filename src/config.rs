//! Matching knobs: per-algorithm weights, per-representation weights, and the
//! acceptance threshold.
//!
//! All three are serde-friendly and cheap to copy, so callers can embed them
//! in higher-level configuration files or pass them per request. None of the
//! weight sets is validated to sum to 1.0 — keeping them on a common scale is
//! the caller's responsibility, documented rather than enforced.

use serde::{Deserialize, Serialize};

/// Weights for the two base similarity algorithms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AlgorithmWeights {
    /// Weight of the edit-distance similarity ratio.
    #[serde(default = "AlgorithmWeights::default_half")]
    pub levenshtein: f64,
    /// Weight of the token-set overlap ratio.
    #[serde(default = "AlgorithmWeights::default_half")]
    pub token_set: f64,
}

impl AlgorithmWeights {
    pub(crate) fn default_half() -> f64 {
        0.5
    }
}

impl Default for AlgorithmWeights {
    fn default() -> Self {
        Self {
            levenshtein: 0.5,
            token_set: 0.5,
        }
    }
}

/// Weights for the two text representations the scorer compares.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ApproachWeights {
    /// Weight of the score computed over the normalized strings.
    #[serde(default = "ApproachWeights::default_half")]
    pub original: f64,
    /// Weight of the score computed over the stemmed strings.
    #[serde(default = "ApproachWeights::default_half")]
    pub stemmed: f64,
}

impl ApproachWeights {
    pub(crate) fn default_half() -> f64 {
        0.5
    }
}

impl Default for ApproachWeights {
    fn default() -> Self {
        Self {
            original: 0.5,
            stemmed: 0.5,
        }
    }
}

/// Options for a single match call.
///
/// The defaults — equal weights everywhere and a threshold of 65 on the
/// 0–100 score scale — are the recommended starting configuration.
///
/// # Examples
///
/// ```
/// use reg_normalizer::{AlgorithmWeights, ApproachWeights, MatchOptions};
///
/// // Favor token overlap and the stemmed representation, and be stricter.
/// let options = MatchOptions {
///     weights: AlgorithmWeights { levenshtein: 0.3, token_set: 0.7 },
///     approach_weights: ApproachWeights { original: 0.2, stemmed: 0.8 },
///     threshold: 70.0,
/// };
/// assert!(options.threshold > MatchOptions::default().threshold);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MatchOptions {
    /// Per-algorithm blend weights.
    #[serde(default)]
    pub weights: AlgorithmWeights,
    /// Per-representation blend weights.
    #[serde(default)]
    pub approach_weights: ApproachWeights,
    /// Minimum blended score (0–100) required to accept the best candidate.
    #[serde(default = "MatchOptions::default_threshold")]
    pub threshold: f64,
}

impl MatchOptions {
    pub(crate) fn default_threshold() -> f64 {
        65.0
    }
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            weights: AlgorithmWeights::default(),
            approach_weights: ApproachWeights::default(),
            threshold: Self::default_threshold(),
        }
    }
}
