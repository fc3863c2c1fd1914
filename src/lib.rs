//! Fuzzy normalization of Russian region names against an etalon list.
//!
//! Free-text region names arrive abbreviated ("спб"), typo-laden
//! ("московск обл"), Latin-contaminated ("Mосква" with a Latin `M`), or
//! padded with dataset qualifiers ("Тюменская область (без АО)"). This crate
//! resolves them to canonical names from a reference catalog and can attach
//! the catalog's auxiliary attributes (English name, codes) to the result.
//!
//! ## Pipeline
//!
//! raw input → script normalization → abbreviation expansion → Snowball
//! stemming → blended fuzzy scoring against every catalog entry → argmax +
//! acceptance threshold → optional attribute lookup.
//!
//! ## Pure function guarantee
//!
//! The catalog and abbreviation table are fixed at construction; every query
//! after that is pure computation. Same input, same options, same catalog —
//! same result, on any machine. No I/O happens on the matching path, and a
//! constructed [`RegionMatcher`] can serve concurrent read-only queries.
//!
//! ## Failure model
//!
//! Matching never returns an error. Garbage input, empty catalogs, and
//! below-threshold candidates all come back as absent values; only dataset
//! loading is fallible. A rejected best candidate is reported through a
//! `tracing` warning, not an error.
//!
//! ## Example
//!
//! ```
//! use reg_normalizer::{EtalonCatalog, MatchOptions, RegionMatcher};
//!
//! let catalog = EtalonCatalog::from_names(["Москва", "Московская область"]);
//! let matcher = RegionMatcher::new(catalog);
//!
//! let best = matcher
//!     .find_best_match("Mосковская област", &MatchOptions::default())
//!     .expect("confident match");
//! assert_eq!(best.name, "Московская область");
//! ```

mod abbrev;
mod batch;
mod config;
mod error;
mod etalon;
mod matcher;
mod normalize;
mod score;
mod stem;

pub use crate::abbrev::default_abbreviations;
pub use crate::batch::{AttachedColumn, MatchedColumn};
pub use crate::config::{AlgorithmWeights, ApproachWeights, MatchOptions};
pub use crate::error::EtalonError;
pub use crate::etalon::{EtalonCatalog, EtalonRecord};
pub use crate::matcher::{BestMatch, RegionMatcher};
pub use crate::normalize::normalize;
pub use crate::score::{ratio, token_set_ratio};
pub use crate::stem::RussianStemmer;
