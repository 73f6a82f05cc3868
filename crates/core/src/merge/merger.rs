//! Assembly of one merged script out of many JavaScript resources

use super::{Minifier, ResourceLocator};
use crate::plugin::ResourceReference;
use lru::LruCache;
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

const MERGED_TEMPLATE_NAME: &str = "wiquery-merged.js";
const MERGED_SCOPE: &str = "wiquery";
const DEFAULT_CACHE_CAPACITY: usize = 32;

/// Concatenates JavaScript resources into a single bundle
///
/// Bundles are named after the md5 of the resources they contain and
/// memoised, so the same page shape is assembled once per process.
pub struct ScriptMerger {
    locator: Arc<dyn ResourceLocator>,
    minifier: Option<Arc<dyn Minifier>>,
    cache: Mutex<LruCache<String, Arc<str>>>,
}

impl ScriptMerger {
    pub fn new(locator: Arc<dyn ResourceLocator>) -> Self {
        Self::with_capacity(locator, DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(locator: Arc<dyn ResourceLocator>, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            locator,
            minifier: None,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn with_minifier(mut self, minifier: Arc<dyn Minifier>) -> Self {
        self.minifier = Some(minifier);
        self
    }

    /// `wiquery-merged.js_<md5>` over the ordered resource paths
    pub fn merged_name(references: &[ResourceReference]) -> String {
        let joined = references
            .iter()
            .map(ResourceReference::path)
            .collect::<Vec<_>>()
            .join(",");
        format!("{MERGED_TEMPLATE_NAME}_{:x}", md5::compute(joined.as_bytes()))
    }

    /// The single reference that stands in for `references` in the header
    pub fn merged_reference(references: &[ResourceReference]) -> ResourceReference {
        ResourceReference::javascript(MERGED_SCOPE, Self::merged_name(references))
    }

    /// Build (or fetch from cache) the bundle for `references`
    ///
    /// A resource that cannot be read is logged and left out; the rest of
    /// the bundle is still produced.
    pub fn assemble(&self, references: &[ResourceReference]) -> Arc<str> {
        let name = Self::merged_name(references);
        if let Some(cached) = self.cache_lock().get(&name) {
            tracing::trace!("Merged bundle {name} served from cache");
            return cached.clone();
        }

        let mut buffer = String::new();
        for reference in references {
            let source = match self.locator.locate(reference) {
                Ok(source) => source,
                Err(e) => {
                    tracing::error!("error in merged processing of {reference}: {e}");
                    continue;
                }
            };
            buffer.push_str(&self.minified(reference, source));
            buffer.push_str("\r\n");
        }

        let bundle: Arc<str> = Arc::from(buffer);
        tracing::debug!(
            "Assembled merged bundle {name} from {} resources ({} bytes)",
            references.len(),
            bundle.len()
        );
        self.cache_lock().put(name, bundle.clone());
        bundle
    }

    /// The assembled bundle served under a merged reference's name
    pub fn bundle(&self, name: &str) -> Option<Arc<str>> {
        self.cache_lock().get(name).cloned()
    }

    pub fn cached_bundles(&self) -> usize {
        self.cache_lock().len()
    }

    fn minified(&self, reference: &ResourceReference, source: String) -> String {
        let Some(minifier) = &self.minifier else {
            return source;
        };
        match minifier.minify(&source) {
            Ok(minified) => minified,
            Err(e) => {
                tracing::warn!("Could not minify {reference}, keeping source: {e}");
                source
            }
        }
    }

    fn cache_lock(&self) -> std::sync::MutexGuard<'_, LruCache<String, Arc<str>>> {
        // A panic while holding the lock cannot leave the cache half-written
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl fmt::Debug for ScriptMerger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptMerger")
            .field("locator", &self.locator)
            .field("minifier", &self.minifier)
            .field("cached_bundles", &self.cached_bundles())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::{CommentStrippingMinifier, FsResourceLocator};
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, Vec<ResourceReference>) {
        let temp_dir = TempDir::new().unwrap();
        let scope = temp_dir.path().join("lib");
        fs::create_dir_all(&scope).unwrap();
        fs::write(scope.join("a.js"), "// a\nvar a = 1;\n").unwrap();
        fs::write(scope.join("b.js"), "var b = 2;").unwrap();
        let refs = vec![
            ResourceReference::javascript("lib", "a.js"),
            ResourceReference::javascript("lib", "b.js"),
        ];
        (temp_dir, refs)
    }

    #[test]
    fn test_merged_name_depends_on_order() {
        let a = ResourceReference::javascript("lib", "a.js");
        let b = ResourceReference::javascript("lib", "b.js");
        let ab = ScriptMerger::merged_name(&[a.clone(), b.clone()]);
        let ba = ScriptMerger::merged_name(&[b, a]);

        assert!(ab.starts_with("wiquery-merged.js_"));
        assert_eq!(ab.len(), "wiquery-merged.js_".len() + 32);
        assert_ne!(ab, ba);
    }

    #[test]
    fn test_assemble_concatenates_in_order() {
        let (temp_dir, refs) = fixture();
        let merger = ScriptMerger::new(Arc::new(FsResourceLocator::new(temp_dir.path())));

        assert_eq!(&*merger.assemble(&refs), "// a\nvar a = 1;\n\r\nvar b = 2;\r\n");
    }

    #[test]
    fn test_assemble_minifies() {
        let (temp_dir, refs) = fixture();
        let merger = ScriptMerger::new(Arc::new(FsResourceLocator::new(temp_dir.path())))
            .with_minifier(Arc::new(CommentStrippingMinifier));

        assert_eq!(&*merger.assemble(&refs), "var a = 1;\r\nvar b = 2;\r\n");
    }

    #[test]
    fn test_missing_resource_is_skipped() {
        let (temp_dir, mut refs) = fixture();
        refs.insert(1, ResourceReference::javascript("lib", "missing.js"));
        let merger = ScriptMerger::new(Arc::new(FsResourceLocator::new(temp_dir.path())));

        assert_eq!(&*merger.assemble(&refs), "// a\nvar a = 1;\n\r\nvar b = 2;\r\n");
    }

    #[test]
    fn test_bundles_are_cached() {
        let (temp_dir, refs) = fixture();
        let merger = ScriptMerger::with_capacity(Arc::new(FsResourceLocator::new(temp_dir.path())), 1);

        let first = merger.assemble(&refs);
        fs::write(temp_dir.path().join("lib").join("b.js"), "changed();").unwrap();
        let second = merger.assemble(&refs);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(merger.cached_bundles(), 1);

        // Capacity one: a different bundle evicts the first
        merger.assemble(&refs[..1]);
        assert_eq!(merger.cached_bundles(), 1);
        assert!(merger.assemble(&refs).contains("changed();"));
    }

    #[test]
    fn test_bundle_is_served_by_merged_name() {
        let (temp_dir, refs) = fixture();
        let merger = ScriptMerger::new(Arc::new(FsResourceLocator::new(temp_dir.path())));
        let reference = ScriptMerger::merged_reference(&refs);
        assert!(merger.bundle(&reference.name).is_none());

        let assembled = merger.assemble(&refs);
        let served = merger.bundle(&reference.name).unwrap();
        assert!(Arc::ptr_eq(&assembled, &served));
        assert!(merger.bundle("wiquery-merged.js_unknown").is_none());
    }
}
