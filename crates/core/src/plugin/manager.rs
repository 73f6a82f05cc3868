use super::ResourceReference;
use crate::config::Settings;
use crate::emission::HeaderResponse;
use crate::merge::ScriptMerger;

/// Collects the resources plugins ask for, once each, in request order
#[derive(Debug, Clone, Default)]
pub struct ResourceManager {
    javascript: Vec<ResourceReference>,
    stylesheets: Vec<ResourceReference>,
}

impl ResourceManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_javascript_resource(&mut self, reference: ResourceReference) {
        if !self.javascript.contains(&reference) {
            self.javascript.push(reference);
        }
    }

    pub fn add_css_resource(&mut self, reference: ResourceReference) {
        if !self.stylesheets.contains(&reference) {
            self.stylesheets.push(reference);
        }
    }

    pub fn javascript_resources(&self) -> &[ResourceReference] {
        &self.javascript
    }

    pub fn css_resources(&self) -> &[ResourceReference] {
        &self.stylesheets
    }

    pub fn is_empty(&self) -> bool {
        self.javascript.is_empty() && self.stylesheets.is_empty()
    }

    /// Write style sheets, then scripts, to the header. With merging enabled
    /// and a merger available the scripts collapse into one merged reference.
    pub fn render(&self, header: &mut dyn HeaderResponse, settings: &Settings, merger: Option<&ScriptMerger>) {
        for reference in &self.stylesheets {
            header.render_css_reference(&reference.resolved(settings));
        }

        let resolved: Vec<ResourceReference> = self
            .javascript
            .iter()
            .map(|r| r.resolved(settings))
            .collect();

        match merger {
            Some(merger) if settings.enable_resources_merging && !resolved.is_empty() => {
                merger.assemble(&resolved);
                header.render_javascript_reference(&ScriptMerger::merged_reference(&resolved));
            }
            _ => {
                for reference in &resolved {
                    header.render_javascript_reference(reference);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emission::{HeaderBuffer, HeaderItem};
    use crate::merge::FsResourceLocator;
    use std::sync::Arc;

    fn js(name: &str) -> ResourceReference {
        ResourceReference::javascript("lib", name)
    }

    #[test]
    fn test_deduplicates_in_order() {
        let mut manager = ResourceManager::new();
        manager.add_javascript_resource(js("b.js"));
        manager.add_javascript_resource(js("a.js"));
        manager.add_javascript_resource(js("b.js"));
        manager.add_css_resource(ResourceReference::stylesheet("lib", "t.css"));
        manager.add_css_resource(ResourceReference::stylesheet("lib", "t.css"));

        assert_eq!(manager.javascript_resources(), [js("b.js"), js("a.js")]);
        assert_eq!(manager.css_resources().len(), 1);
    }

    #[test]
    fn test_render_css_first_and_minified() {
        let mut manager = ResourceManager::new();
        manager.add_javascript_resource(js("a.js"));
        manager.add_css_resource(ResourceReference::stylesheet("lib", "t.css"));

        let settings = Settings {
            minified_resources: true,
            ..Default::default()
        };
        let mut header = HeaderBuffer::new();
        manager.render(&mut header, &settings, None);

        assert_eq!(
            header.items(),
            [
                HeaderItem::CssReference { path: "lib/t.min.css".into() },
                HeaderItem::JavascriptReference { path: "lib/a.min.js".into() },
            ]
        );
    }

    #[test]
    fn test_render_merged() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let merger = ScriptMerger::new(Arc::new(FsResourceLocator::new(temp_dir.path())));
        let mut manager = ResourceManager::new();
        manager.add_javascript_resource(js("a.js"));
        manager.add_javascript_resource(js("b.js"));

        let settings = Settings {
            enable_resources_merging: true,
            ..Default::default()
        };
        let mut header = HeaderBuffer::new();
        manager.render(&mut header, &settings, Some(&merger));

        let expected = ScriptMerger::merged_reference(manager.javascript_resources());
        assert_eq!(
            header.items(),
            [HeaderItem::JavascriptReference { path: expected.path() }]
        );
        assert_eq!(merger.cached_bundles(), 1);
    }

    #[test]
    fn test_merged_header_reference_resolves_to_bundle() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(temp_dir.path().join("lib")).unwrap();
        std::fs::write(temp_dir.path().join("lib/a.js"), "var a = 1;").unwrap();
        std::fs::write(temp_dir.path().join("lib/b.js"), "var b = 2;").unwrap();
        let merger = ScriptMerger::new(Arc::new(FsResourceLocator::new(temp_dir.path())));
        let mut manager = ResourceManager::new();
        manager.add_javascript_resource(js("a.js"));
        manager.add_javascript_resource(js("b.js"));

        let settings = Settings {
            enable_resources_merging: true,
            ..Default::default()
        };
        let mut header = HeaderBuffer::new();
        manager.render(&mut header, &settings, Some(&merger));

        let HeaderItem::JavascriptReference { path } = &header.items()[0] else {
            panic!("expected a script reference, got {:?}", header.items());
        };
        let (_, name) = path.rsplit_once('/').unwrap();
        assert_eq!(merger.bundle(name).as_deref(), Some("var a = 1;\r\nvar b = 2;\r\n"));
    }

    #[test]
    fn test_merging_needs_the_setting() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let merger = ScriptMerger::new(Arc::new(FsResourceLocator::new(temp_dir.path())));
        let mut manager = ResourceManager::new();
        manager.add_javascript_resource(js("a.js"));

        let mut header = HeaderBuffer::new();
        manager.render(&mut header, &Settings::default(), Some(&merger));
        assert_eq!(
            header.items(),
            [HeaderItem::JavascriptReference { path: "lib/a.js".into() }]
        );
        assert_eq!(merger.cached_bundles(), 0);
    }
}
