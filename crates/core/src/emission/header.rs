//! The header contribution sink

use crate::plugin::ResourceReference;
use serde::Serialize;

/// Receives everything a render pass contributes to the page header
pub trait HeaderResponse {
    fn render_javascript_reference(&mut self, reference: &ResourceReference);

    fn render_css_reference(&mut self, reference: &ResourceReference);

    /// A named script resource with the given content
    fn render_javascript(&mut self, content: &str, id: &str);

    /// Raw markup written as-is
    fn render_string(&mut self, markup: &str);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HeaderItem {
    JavascriptReference { path: String },
    CssReference { path: String },
    Javascript { id: String, content: String },
    Markup { markup: String },
}

/// Records header contributions in order, dropping duplicates the way a
/// page header would
#[derive(Debug, Clone, Default)]
pub struct HeaderBuffer {
    items: Vec<HeaderItem>,
}

impl HeaderBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[HeaderItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn push_unique(&mut self, item: HeaderItem) {
        let duplicate = self.items.iter().any(|existing| match (existing, &item) {
            (HeaderItem::Javascript { id: a, .. }, HeaderItem::Javascript { id: b, .. }) => a == b,
            (a, b) => a == b,
        });
        if !duplicate {
            self.items.push(item);
        }
    }

    /// Header markup, one element per line; resource paths are served under `resources/`
    pub fn to_html(&self) -> String {
        self.items
            .iter()
            .map(|item| match item {
                HeaderItem::JavascriptReference { path } => format!(
                    "<script type=\"text/javascript\" src=\"resources/{path}\"></script>"
                ),
                HeaderItem::CssReference { path } => format!(
                    "<link rel=\"stylesheet\" type=\"text/css\" href=\"resources/{path}\" />"
                ),
                HeaderItem::Javascript { id, content } => format!(
                    "<script type=\"text/javascript\" id=\"{id}\">\n/*<![CDATA[*/\n{content}\n/*]]>*/\n</script>"
                ),
                HeaderItem::Markup { markup } => markup.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl HeaderResponse for HeaderBuffer {
    fn render_javascript_reference(&mut self, reference: &ResourceReference) {
        self.push_unique(HeaderItem::JavascriptReference {
            path: reference.path(),
        });
    }

    fn render_css_reference(&mut self, reference: &ResourceReference) {
        self.push_unique(HeaderItem::CssReference {
            path: reference.path(),
        });
    }

    fn render_javascript(&mut self, content: &str, id: &str) {
        self.push_unique(HeaderItem::Javascript {
            id: id.to_string(),
            content: content.to_string(),
        });
    }

    fn render_string(&mut self, markup: &str) {
        self.push_unique(HeaderItem::Markup {
            markup: markup.to_string(),
        });
    }
}
