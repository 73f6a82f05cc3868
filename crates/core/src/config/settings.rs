use crate::{
    error::{Error, Result},
    plugin::ResourceReference,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application-wide wiquery configuration
///
/// Built once at startup and handed to the emission decider and render
/// pass by value; nothing mutates it while a request is being rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct Settings {
    /// Reference the jQuery core library whenever a statement is emitted
    pub auto_import_jquery_resource: bool,

    /// Emit full-render statements as a named header script instead of an
    /// inline `<script>` tag
    pub embed_generated_statements: bool,

    /// Serve `.min.js` / `.min.css` variants of every resource
    pub minified_resources: bool,

    /// Collapse all JavaScript references of a page into one merged resource
    pub enable_resources_merging: bool,

    /// Replaces the bundled jQuery core reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jquery_core_resource: Option<ResourceReference>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_import_jquery_resource: true,
            embed_generated_statements: false,
            minified_resources: false,
            enable_resources_merging: false,
            jquery_core_resource: None,
        }
    }
}

impl Settings {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize settings: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Look for `.wiquery.json` then `wiquery.json`, walking up from `start_path`
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in [".wiquery.json", "wiquery.json"] {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Settings from the nearest config file, or the defaults when there is none
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => Self::load_from_file(&path),
            None => {
                tracing::debug!("No wiquery config above {}, using defaults", start_path.display());
                Ok(Self::default())
            }
        }
    }
}
