use crate::plugin::ResourceReference;
use std::fmt::Debug;
use std::io;
use std::path::PathBuf;

/// Finds the source text behind a resource reference
pub trait ResourceLocator: Debug + Send + Sync {
    fn locate(&self, reference: &ResourceReference) -> io::Result<String>;
}

/// Reads `root/scope/name` from disk
#[derive(Debug, Clone)]
pub struct FsResourceLocator {
    root: PathBuf,
}

impl FsResourceLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceLocator for FsResourceLocator {
    fn locate(&self, reference: &ResourceReference) -> io::Result<String> {
        let path = self.root.join(&reference.scope).join(&reference.name);
        tracing::trace!("Locating {} at {}", reference, path.display());
        std::fs::read_to_string(path)
    }
}
