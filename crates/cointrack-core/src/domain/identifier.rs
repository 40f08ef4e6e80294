use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Ordered, non-empty list of provider coin identifiers (e.g. `bitcoin`).
///
/// Every entry is trimmed and non-blank. Duplicates survive unless the list
/// was built with deduplication enabled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct IdentifierList(Vec<String>);

impl IdentifierList {
    /// Build a list from already-split tokens, trimming each and dropping blanks.
    pub fn new<I, S>(tokens: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids = tokens
            .into_iter()
            .map(|token| token.as_ref().trim().to_owned())
            .filter(|token| !token.is_empty())
            .collect::<Vec<_>>();

        if ids.is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        Ok(Self(ids))
    }

    /// Remove repeated identifiers, keeping the first occurrence of each.
    pub fn dedup(self) -> Self {
        let mut seen = Vec::with_capacity(self.0.len());
        for id in self.0 {
            if !seen.contains(&id) {
                seen.push(id);
            }
        }
        Self(seen)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true: construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Comma-joined form sent as the `cryptoIDs` form field.
    pub fn joined(&self) -> String {
        self.0.join(",")
    }
}

impl Display for IdentifierList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.joined())
    }
}

impl TryFrom<Vec<String>> for IdentifierList {
    type Error = ValidationError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<IdentifierList> for Vec<String> {
    fn from(value: IdentifierList) -> Self {
        value.0
    }
}

impl<'a> IntoIterator for &'a IdentifierList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
