//! Similarity scoring on the 0–100 scale.
//!
//! Two base signals are blended:
//!
//! - [`ratio`] — edit-distance similarity (normalized Levenshtein, via
//!   `strsim`). Symmetric, 100 means identical strings. Sensitive to typos
//!   and truncation, blind to word order.
//! - [`token_set_ratio`] — order-insensitive overlap of whitespace token
//!   sets. Robust to word reordering ("область московская" vs
//!   "московская область") and to subset/superset relations ("москва" vs
//!   "москва город").
//!
//! Both signals are computed over the normalized representation and again
//! over the stemmed one; [`blended`] combines the four values under two
//! independent weight sets.

use std::collections::BTreeSet;

use crate::config::{AlgorithmWeights, ApproachWeights};

/// Edit-distance similarity of two strings on the 0–100 scale.
///
/// 100 for identical strings (including two empty strings), 0 for strings
/// with nothing in common.
pub fn ratio(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b) * 100.0
}

/// Token-set overlap similarity on the 0–100 scale.
///
/// Splits both strings into whitespace-delimited token sets and compares the
/// sorted intersection against each side's sorted union with its own surplus
/// tokens, taking the best of the three pairwise [`ratio`]s. A string whose
/// tokens are a subset of the other's scores 100.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    if tokens_a.is_empty() || tokens_b.is_empty() {
        return if tokens_a.is_empty() && tokens_b.is_empty() {
            100.0
        } else {
            0.0
        };
    }

    let intersection: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    let base = intersection.join(" ");
    let combined_a = join_with_base(&base, &only_a);
    let combined_b = join_with_base(&base, &only_b);

    ratio(&base, &combined_a)
        .max(ratio(&base, &combined_b))
        .max(ratio(&combined_a, &combined_b))
}

/// Joins the shared-token prefix with one side's surplus tokens.
fn join_with_base(base: &str, extra: &[&str]) -> String {
    if extra.is_empty() {
        return base.to_string();
    }
    let mut out = String::with_capacity(base.len() + extra.len() * 8);
    out.push_str(base);
    for token in extra {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

/// Blends the four similarity signals into the final 0–100 score.
///
/// `original = w.levenshtein * ratio(qn, en) + w.token_set * token_set(qn, en)`,
/// likewise `stemmed` over the stemmed strings, and the result is
/// `a.original * original + a.stemmed * stemmed`.
pub(crate) fn blended(
    query_normalized: &str,
    query_stemmed: &str,
    entry_normalized: &str,
    entry_stemmed: &str,
    weights: &AlgorithmWeights,
    approach_weights: &ApproachWeights,
) -> f64 {
    let original = weights.levenshtein * ratio(query_normalized, entry_normalized)
        + weights.token_set * token_set_ratio(query_normalized, entry_normalized);
    let stemmed = weights.levenshtein * ratio(query_stemmed, entry_stemmed)
        + weights.token_set * token_set_ratio(query_stemmed, entry_stemmed);

    approach_weights.original * original + approach_weights.stemmed * stemmed
}
