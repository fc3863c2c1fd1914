//! Snowball stemming adapter for Russian.
//!
//! Inflection is the main reason naive string comparison fails on region
//! names: "московская", "московской", and "московскую" are all the same
//! region. Stemming each token down to its root makes those forms compare
//! equal before the fuzzy scorer ever runs.

use std::fmt;

use rust_stemmers::{Algorithm, Stemmer};

/// Word-by-word Snowball stemmer for Russian phrases.
///
/// Stateless per call: each token is stemmed independently, with no
/// cross-token context. Safe to share across threads.
pub struct RussianStemmer {
    inner: Stemmer,
}

impl RussianStemmer {
    pub fn new() -> Self {
        Self {
            inner: Stemmer::create(Algorithm::Russian),
        }
    }

    /// Stems every whitespace-delimited token of `text` and rejoins them with
    /// single spaces in their original order. Empty input yields empty output.
    ///
    /// # Examples
    ///
    /// ```
    /// use reg_normalizer::RussianStemmer;
    ///
    /// let stemmer = RussianStemmer::new();
    /// assert_eq!(stemmer.stem_phrase("московская область"), "московск област");
    /// ```
    pub fn stem_phrase(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for word in text.split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&self.inner.stem(word));
        }
        out
    }
}

impl Default for RussianStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RussianStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RussianStemmer")
    }
}
