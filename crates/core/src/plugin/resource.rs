//! References to client-side resources a plugin depends on

use crate::config::Settings;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    JavaScript,
    StyleSheet,
}

impl ResourceKind {
    fn extension(self) -> &'static str {
        match self {
            ResourceKind::JavaScript => "js",
            ResourceKind::StyleSheet => "css",
        }
    }
}

/// A script or style sheet identified by a scope (package-like directory)
/// and a file name within it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceReference {
    pub kind: ResourceKind,
    pub scope: String,
    pub name: String,
}

impl ResourceReference {
    pub fn javascript(scope: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: ResourceKind::JavaScript,
            scope: scope.into(),
            name: name.into(),
        }
    }

    pub fn stylesheet(scope: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: ResourceKind::StyleSheet,
            scope: scope.into(),
            name: name.into(),
        }
    }

    pub fn path(&self) -> String {
        format!("{}/{}", self.scope, self.name)
    }

    /// The reference actually served under `settings`: `x.js` becomes
    /// `x.min.js` (and `x.css` becomes `x.min.css`) when minified
    /// resources are on. Names already minified are left alone.
    pub fn resolved(&self, settings: &Settings) -> Self {
        if !settings.minified_resources {
            return self.clone();
        }

        let ext = self.kind.extension();
        let min_suffix = format!(".min.{ext}");
        let suffix = format!(".{ext}");
        let name = match self.name.strip_suffix(&suffix) {
            Some(stem) if !self.name.ends_with(&min_suffix) => format!("{stem}{min_suffix}"),
            _ => self.name.clone(),
        };

        Self {
            kind: self.kind,
            scope: self.scope.clone(),
            name,
        }
    }
}

impl fmt::Display for ResourceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
