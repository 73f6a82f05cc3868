use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A DOM id that can be embedded in a `$('#...')` selector as-is
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MarkupId(String);

impl MarkupId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let valid = !id.is_empty()
            && !id
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '\'' | '"' | '\\'));
        if valid {
            Ok(Self(id))
        } else {
            Err(Error::InvalidMarkupId(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `#id`, optionally followed by a descendant selector
    pub fn selector(&self, descendant: Option<&str>) -> String {
        match descendant {
            Some(sel) if !sel.trim().is_empty() => format!("#{} {}", self.0, sel.trim()),
            _ => format!("#{}", self.0),
        }
    }
}

impl fmt::Display for MarkupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for MarkupId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<MarkupId> for String {
    fn from(id: MarkupId) -> Self {
        id.0
    }
}
