use std::collections::BTreeMap;

use super::value::AttributeValue;
use super::RosterError;

/// A raw roster record: flat map from attribute key to value.
pub type Record = BTreeMap<String, AttributeValue>;

/// One guessable game object (a brawler or a card).
///
/// The identifier is split out of the record when the entity is built; it is
/// compared case-sensitively for identity and never takes part in attribute
/// comparison. All other keys, including hint text, stay in `attributes`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    id: String,
    attributes: BTreeMap<String, AttributeValue>,
}

impl Entity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Adds an attribute (builder pattern).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Builds an entity from a raw record, taking the identifier from `id_key`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::MissingIdentifier`] if the record has no usable
    /// value under `id_key`.
    pub fn from_record(mut record: Record, id_key: &str) -> Result<Self, RosterError> {
        let id = match record.remove(id_key) {
            Some(value) if !value.is_blank() => value.as_text().trim().to_owned(),
            _ => {
                return Err(RosterError::MissingIdentifier {
                    id_key: id_key.to_owned(),
                });
            }
        };

        Ok(Self {
            id,
            attributes: record,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Iterates attributes in key order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }
}
