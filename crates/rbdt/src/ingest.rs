//! Loading mined rules from JSON.
//!
//! Rule records list only the items present in their antecedent. Each item is
//! a categorical value string that belongs to exactly one attribute; the
//! [`AttributeDomain`] says which. Attributes a record does not mention are
//! filled with `DC`.

use crate::conf::DONT_CARE;
use crate::rules::Rule;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("rule {rule}: value {value:?} does not belong to any attribute")]
    UnknownValue { rule: usize, value: String },

    #[error("value {value:?} is declared for both attribute {first} and attribute {second}")]
    DuplicateValue {
        value: String,
        first: usize,
        second: usize,
    },

    #[error("rule {rule}: attribute {attribute} is given both {first:?} and {second:?}")]
    ConflictingValues {
        rule: usize,
        attribute: usize,
        first: String,
        second: String,
    },

    #[error("attribute indices must be 0..{expected}, found {found}")]
    AttributeOutOfRange { expected: usize, found: usize },
}

/// One mined rule as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRecord {
    #[serde(rename = "Y")]
    pub class: String,
    #[serde(rename = "itemsInX", default)]
    pub items_in_x: Vec<String>,
    #[serde(rename = "itemsInZ", default)]
    pub items_in_z: Vec<String>,
    #[serde(rename = "freqX", default)]
    pub freq_x: u32,
    #[serde(rename = "freqY", default)]
    pub freq_y: u32,
    #[serde(rename = "freqZ", default)]
    pub freq_z: u32,
}

/// Possible values of each attribute, keyed by attribute index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDomain {
    values: BTreeMap<usize, Vec<String>>,
}

impl AttributeDomain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute<I, V>(mut self, attribute: usize, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.insert(attribute, values);
        self
    }

    pub fn insert<I, V>(&mut self, attribute: usize, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.values
            .insert(attribute, values.into_iter().map(Into::into).collect());
    }

    pub fn n_attributes(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self, attribute: usize) -> Option<&[String]> {
        self.values.get(&attribute).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.values.iter().map(|(a, v)| (*a, v.as_slice()))
    }
}

/// Reverse lookup from value string to the attribute it belongs to.
///
/// Attribute indices must be exactly `0..n_attributes` and every value must
/// belong to a single attribute.
pub fn invert_domain(domain: &AttributeDomain) -> Result<HashMap<String, usize>, IngestError> {
    let n_attributes = domain.n_attributes();
    let mut inverted: HashMap<String, usize> = HashMap::new();

    for (attribute, values) in domain.iter() {
        if attribute >= n_attributes {
            return Err(IngestError::AttributeOutOfRange {
                expected: n_attributes,
                found: attribute,
            });
        }
        for value in values {
            if let Some(&first) = inverted.get(value) {
                if first != attribute {
                    return Err(IngestError::DuplicateValue {
                        value: value.clone(),
                        first,
                        second: attribute,
                    });
                }
            }
            inverted.insert(value.clone(), attribute);
        }
    }
    Ok(inverted)
}

/// Turn records into total rules, filling unmentioned attributes with `DC`.
pub fn rules_from_records(
    records: Vec<RuleRecord>,
    domain: &AttributeDomain,
) -> Result<Vec<Rule>, IngestError> {
    let lookup = invert_domain(domain)?;
    let n_attributes = domain.n_attributes();

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| -> Result<Rule, IngestError> {
            let mut antecedents = vec![DONT_CARE.to_string(); n_attributes];
            for value in record.items_in_x {
                let attribute = *lookup.get(&value).ok_or_else(|| IngestError::UnknownValue {
                    rule: index,
                    value: value.clone(),
                })?;
                let slot = &mut antecedents[attribute];
                if *slot != DONT_CARE && *slot != value {
                    return Err(IngestError::ConflictingValues {
                        rule: index,
                        attribute,
                        first: slot.clone(),
                        second: value,
                    });
                }
                *slot = value;
            }
            Ok(Rule::new(
                record.class,
                antecedents,
                record.freq_x,
                record.freq_y,
                record.freq_z,
            ))
        })
        .collect()
}

pub fn rules_from_json_str(json: &str, domain: &AttributeDomain) -> Result<Vec<Rule>, IngestError> {
    let records: Vec<RuleRecord> = serde_json::from_str(json)?;
    debug!(n_records = records.len(), "parsed rule records");
    rules_from_records(records, domain)
}

pub fn read_rules_from_file(
    path: impl AsRef<Path>,
    domain: &AttributeDomain,
) -> Result<Vec<Rule>, IngestError> {
    let path = path.as_ref();
    debug!("Reading rules from {}", path.display());
    let json = std::fs::read_to_string(path)?;
    rules_from_json_str(&json, domain)
}
