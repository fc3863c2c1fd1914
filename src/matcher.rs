//! The matching engine: full-scan fuzzy search over a precomputed index.
//!
//! A [`RegionMatcher`] owns its catalog and abbreviation table for its whole
//! lifetime. At construction it precomputes, for every record, the normalized
//! and stemmed forms of the canonical name; queries scan that index linearly,
//! score every entry, and accept the maximum against a threshold. Linear scan
//! is a deliberate tradeoff: reference sets are sized in the low hundreds,
//! and exact full-scan semantics keep scoring and tie-breaking observable and
//! stable.
//!
//! Queries are pure: no state is mutated per call, so a constructed matcher
//! can serve concurrent read-only lookups from multiple threads.

use std::collections::HashMap;

use serde_json::Value as JsonValue;
use tracing::warn;

use crate::abbrev::{self, default_abbreviations};
use crate::config::MatchOptions;
use crate::etalon::EtalonCatalog;
use crate::normalize::{cell_text, normalize};
use crate::score;
use crate::stem::RussianStemmer;

/// An accepted match: the canonical name and its blended score.
///
/// Returned inside `Option`, so name and score are always jointly present —
/// a below-threshold or impossible match is simply `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct BestMatch {
    /// Canonical name from the etalon catalog.
    pub name: String,
    /// Blended similarity score on the 0–100 scale.
    pub score: f64,
}

/// Precomputed comparison forms for one catalog record.
#[derive(Debug)]
struct IndexEntry {
    name: String,
    normalized: String,
    stemmed: String,
}

/// Fuzzy matcher for region names against an etalon catalog.
///
/// # Examples
///
/// ```
/// use reg_normalizer::{EtalonCatalog, MatchOptions, RegionMatcher};
///
/// let catalog = EtalonCatalog::from_names(["Москва", "Московская область"]);
/// let matcher = RegionMatcher::new(catalog);
///
/// let best = matcher
///     .find_best_match("московск обл", &MatchOptions::default())
///     .expect("confident match");
/// assert_eq!(best.name, "Московская область");
/// ```
#[derive(Debug)]
pub struct RegionMatcher {
    catalog: EtalonCatalog,
    abbreviations: HashMap<String, String>,
    stemmer: RussianStemmer,
    index: Vec<IndexEntry>,
}

impl RegionMatcher {
    /// Builds a matcher over `catalog` with the stock abbreviation table.
    pub fn new(catalog: EtalonCatalog) -> Self {
        Self::with_abbreviations(catalog, default_abbreviations())
    }

    /// Builds a matcher with a caller-supplied abbreviation table.
    ///
    /// The table fully replaces the stock one; start from
    /// [`default_abbreviations`](crate::default_abbreviations) to extend it
    /// instead.
    pub fn with_abbreviations(
        catalog: EtalonCatalog,
        abbreviations: HashMap<String, String>,
    ) -> Self {
        let stemmer = RussianStemmer::new();
        let index = catalog
            .iter()
            .map(|record| {
                let normalized = normalize(&record.name_rus);
                let stemmed = stemmer.stem_phrase(&normalized);
                IndexEntry {
                    name: record.name_rus.clone(),
                    normalized,
                    stemmed,
                }
            })
            .collect();

        Self {
            catalog,
            abbreviations,
            stemmer,
            index,
        }
    }

    /// The catalog this matcher was built over.
    pub fn catalog(&self) -> &EtalonCatalog {
        &self.catalog
    }

    /// Finds the best-scoring catalog entry for `input`.
    ///
    /// The input is normalized, expanded if it exactly equals an abbreviation
    /// key, and stemmed; every index entry is then scored and the maximum is
    /// compared against `options.threshold`. Ties keep the first entry in
    /// catalog order.
    ///
    /// Returns `None` when the catalog is empty, or when the best score falls
    /// below the threshold — the latter also emits a single `tracing` warning
    /// naming the input, the rejected best candidate, and its score.
    pub fn find_best_match(&self, input: &str, options: &MatchOptions) -> Option<BestMatch> {
        let (query_normalized, query_stemmed) = self.process_input(input);

        let mut best: Option<(&IndexEntry, f64)> = None;
        for entry in &self.index {
            let total = score::blended(
                &query_normalized,
                &query_stemmed,
                &entry.normalized,
                &entry.stemmed,
                &options.weights,
                &options.approach_weights,
            );
            // Strict comparison keeps the first entry on equal scores.
            match best {
                Some((_, best_score)) if total <= best_score => {}
                _ => best = Some((entry, total)),
            }
        }

        let (entry, best_score) = best?;
        if best_score < options.threshold {
            warn!(
                input,
                candidate = %entry.name,
                score = best_score,
                threshold = options.threshold,
                "best match below threshold, check manually"
            );
            return None;
        }

        Some(BestMatch {
            name: entry.name.clone(),
            score: best_score,
        })
    }

    /// JSON-cell variant of [`find_best_match`](Self::find_best_match).
    ///
    /// Non-string values (null, numbers, booleans, containers) coerce to the
    /// empty query and therefore to an absent match — never an error.
    pub fn find_best_match_value(
        &self,
        value: &JsonValue,
        options: &MatchOptions,
    ) -> Option<BestMatch> {
        self.find_best_match(cell_text(value), options)
    }

    /// Looks up one attribute on the record backing a matched name.
    ///
    /// Degrades to `None` when the name is absent from the catalog or the
    /// field is absent from the record.
    pub fn lookup_attribute(&self, name_rus: &str, field: &str) -> Option<&JsonValue> {
        self.catalog.attribute(name_rus, field)
    }

    /// Normalization + abbreviation expansion + stemming for a raw query.
    fn process_input(&self, input: &str) -> (String, String) {
        let processed = normalize(input);
        let processed = abbrev::resolve(&processed, &self.abbreviations).into_owned();
        let stemmed = self.stemmer.stem_phrase(&processed);
        (processed, stemmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::etalon::EtalonRecord;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    fn sample_catalog() -> EtalonCatalog {
        EtalonCatalog::from_names([
            "Москва",
            "Московская область",
            "Санкт-Петербург",
            "Свердловская область",
            "Республика Татарстан",
            "Ханты-Мансийский автономный округ",
        ])
    }

    #[test]
    fn exact_name_matches_itself_at_100() {
        let matcher = RegionMatcher::new(sample_catalog());
        let options = MatchOptions::default();
        for record in matcher.catalog().iter() {
            let best = matcher
                .find_best_match(&record.name_rus, &options)
                .expect("self-match");
            assert_eq!(best.name, record.name_rus);
            assert_eq!(best.score, 100.0);
        }
    }

    #[test]
    fn shortened_form_matches_full_name() {
        let matcher = RegionMatcher::new(sample_catalog());
        let best = matcher
            .find_best_match("московск обл", &MatchOptions::default())
            .expect("match");
        assert_eq!(best.name, "Московская область");
        assert!(best.score >= 70.0, "score was {}", best.score);
    }

    #[test]
    fn abbreviation_expands_before_scoring() {
        let matcher = RegionMatcher::new(sample_catalog());
        let best = matcher
            .find_best_match("спб", &MatchOptions::default())
            .expect("match");
        assert_eq!(best.name, "Санкт-Петербург");
        assert!(best.score >= 90.0, "score was {}", best.score);
    }

    #[test]
    fn latin_confusables_are_unified_before_scoring() {
        let matcher = RegionMatcher::new(sample_catalog());
        let best = matcher
            .find_best_match("Mосковская област", &MatchOptions::default())
            .expect("match");
        assert_eq!(best.name, "Московская область");
    }

    #[test]
    fn garbage_input_is_rejected() {
        let matcher = RegionMatcher::new(sample_catalog());
        let result =
            matcher.find_best_match("совершенно неизвестный регион xyz123", &MatchOptions::default());
        assert_eq!(result, None);
    }

    #[test]
    fn empty_catalog_yields_no_match() {
        let matcher = RegionMatcher::new(EtalonCatalog::default());
        assert_eq!(
            matcher.find_best_match("Москва", &MatchOptions::default()),
            None
        );
    }

    /// Buffers formatted log output so a test can assert on emitted events.
    #[derive(Clone, Default)]
    struct LogCapture(Arc<Mutex<Vec<u8>>>);

    impl LogCapture {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl std::io::Write for LogCapture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogCapture {
        type Writer = LogCapture;

        fn make_writer(&'a self) -> LogCapture {
            self.clone()
        }
    }

    fn captured_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
        let capture = LogCapture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();
        let value = tracing::subscriber::with_default(subscriber, f);
        (value, capture.contents())
    }

    #[test]
    fn rejection_warns_once_naming_candidate_and_score() {
        let matcher = RegionMatcher::new(sample_catalog());
        let options = MatchOptions::default();

        let (result, log) =
            captured_warnings(|| matcher.find_best_match("совершенно неизвестный регион", &options));
        assert_eq!(result, None);
        assert_eq!(log.matches("WARN").count(), 1, "expected one warning, got: {log}");
        assert!(log.contains("best match below threshold"));
        assert!(log.contains("совершенно неизвестный регион"));
        assert!(log.contains("candidate="));
        assert!(log.contains("score="));
        assert!(log.contains("threshold=65"));
    }

    #[test]
    fn accepted_match_and_empty_catalog_stay_silent() {
        let matcher = RegionMatcher::new(sample_catalog());
        let options = MatchOptions::default();

        let (result, log) = captured_warnings(|| matcher.find_best_match("Москва", &options));
        assert!(result.is_some());
        assert_eq!(log, "", "accepted match should not warn: {log}");

        let empty = RegionMatcher::new(EtalonCatalog::default());
        let (result, log) = captured_warnings(|| empty.find_best_match("Москва", &options));
        assert_eq!(result, None);
        assert_eq!(log, "", "empty catalog should not warn: {log}");
    }

    #[test]
    fn ties_keep_first_catalog_entry() {
        // Both records normalize to the same form; the first one must win.
        let catalog = EtalonCatalog::new(vec![
            EtalonRecord::named("Москва"),
            EtalonRecord::named("МОСКВА"),
        ]);
        let matcher = RegionMatcher::new(catalog);
        let best = matcher
            .find_best_match("москва", &MatchOptions::default())
            .expect("match");
        assert_eq!(best.name, "Москва");
        assert_eq!(best.score, 100.0);
    }

    #[test]
    fn raising_threshold_never_creates_a_match() {
        let matcher = RegionMatcher::new(sample_catalog());
        let lenient = MatchOptions::default();
        let strict = MatchOptions {
            threshold: 99.5,
            ..MatchOptions::default()
        };

        let inputs = ["московск обл", "спб", "ерунда", "Москва"];
        for input in inputs {
            let loose = matcher.find_best_match(input, &lenient);
            let tight = matcher.find_best_match(input, &strict);
            if loose.is_none() {
                assert_eq!(tight, None, "threshold raise resurrected {input:?}");
            }
        }
        // And a present match can disappear under the stricter threshold.
        assert!(matcher.find_best_match("московск обл", &lenient).is_some());
        assert_eq!(matcher.find_best_match("московск обл", &strict), None);
    }

    #[test]
    fn repeated_queries_are_deterministic() {
        let matcher = RegionMatcher::new(sample_catalog());
        let options = MatchOptions::default();
        let first = matcher.find_best_match("свердловск обл", &options);
        for _ in 0..5 {
            assert_eq!(matcher.find_best_match("свердловск обл", &options), first);
        }
    }

    #[test]
    fn non_string_values_never_panic() {
        let matcher = RegionMatcher::new(sample_catalog());
        let options = MatchOptions::default();
        assert_eq!(matcher.find_best_match_value(&json!(null), &options), None);
        assert_eq!(matcher.find_best_match_value(&json!(12345), &options), None);
        assert_eq!(
            matcher.find_best_match_value(&json!({"region": "Москва"}), &options),
            None
        );
    }

    #[test]
    fn custom_abbreviations_replace_the_stock_table() {
        let mut table = HashMap::new();
        table.insert("мск".to_string(), "Москва".to_string());
        let matcher = RegionMatcher::with_abbreviations(sample_catalog(), table);

        let best = matcher
            .find_best_match("мск", &MatchOptions::default())
            .expect("match");
        assert_eq!(best.name, "Москва");
        assert_eq!(best.score, 100.0);
    }
}
