//! The etalon reference set: canonical region names plus their attributes.
//!
//! The dataset is an external collaborator. It arrives as a versioned YAML
//! document mapping stable record identifiers to records, each carrying the
//! canonical Russian name (`name_rus`) and zero or more auxiliary fields
//! (`name_eng`, `okato`, `iso_code`, …):
//!
//! ```yaml
//! dict:
//!   RU-MOW:
//!     name_rus: Москва
//!     name_eng: Moscow
//!     iso_code: RU-MOW
//!   RU-MOS:
//!     name_rus: Московская область
//!     name_eng: Moscow Oblast
//! ```
//!
//! The catalog trusts this data is well-formed; it neither validates nor
//! enriches it. Construction is explicit — a catalog is passed into the
//! matcher, never loaded from implicit global state — so different instances
//! can run against different datasets and tests can inject fixtures.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::EtalonError;

/// One canonical region record.
///
/// `name_rus` uniquely identifies the record within its catalog. Every other
/// field of the source document lands in `attributes`, looked up by field
/// name after a match is made.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EtalonRecord {
    /// Canonical Russian name, the match target.
    pub name_rus: String,
    /// Auxiliary fields: English name, classification codes, and whatever
    /// else the dataset carries.
    #[serde(flatten, default)]
    pub attributes: BTreeMap<String, JsonValue>,
}

impl EtalonRecord {
    /// A record with a name and no attributes.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name_rus: name.into(),
            attributes: BTreeMap::new(),
        }
    }
}

/// Wire shape of the dataset document. `serde_yaml::Mapping` keeps the
/// document's own record order, which fixes tie-breaking downstream.
#[derive(Deserialize)]
struct EtalonDocument {
    dict: serde_yaml::Mapping,
}

/// An ordered, immutable set of etalon records.
///
/// Order is irrelevant to scoring but observable through tie-breaking: when
/// two records score identically, the first one in catalog order wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EtalonCatalog {
    records: Vec<EtalonRecord>,
}

impl EtalonCatalog {
    /// Builds a catalog from explicit records.
    pub fn new(records: Vec<EtalonRecord>) -> Self {
        Self { records }
    }

    /// Builds a catalog from bare canonical names, with no attributes.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            records: names.into_iter().map(EtalonRecord::named).collect(),
        }
    }

    /// Loads a catalog from a YAML file on disk.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, EtalonError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parses a catalog from YAML text, preserving document order.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, EtalonError> {
        let document: EtalonDocument = serde_yaml::from_str(yaml)?;
        let mut records = Vec::with_capacity(document.dict.len());
        for (_, value) in document.dict {
            records.push(serde_yaml::from_value(value)?);
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &EtalonRecord> {
        self.records.iter()
    }

    /// Finds the first record whose canonical name equals `name_rus`.
    pub fn record_by_name(&self, name_rus: &str) -> Option<&EtalonRecord> {
        self.records.iter().find(|r| r.name_rus == name_rus)
    }

    /// Looks up one attribute on the record named `name_rus`.
    ///
    /// Absent record or absent field both yield `None`.
    pub fn attribute(&self, name_rus: &str, field: &str) -> Option<&JsonValue> {
        self.record_by_name(name_rus)
            .and_then(|record| record.attributes.get(field))
    }
}
