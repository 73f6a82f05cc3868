//! Strategies turning an [`Options`](super::Options) map into JavaScript text

use crate::javascript::JsStatement;
use crate::types::MarkupId;
use std::fmt::Debug;

/// Renders an options map piece by piece: an opening, one fragment per
/// entry in insertion order, then a closing
pub trait OptionsRenderer: Debug + Send + Sync {
    fn render_before(&self, out: &mut String);

    /// `value` is already rendered; `is_last` is true for the final entry
    fn render_option(&self, name: &str, value: &str, is_last: bool) -> String;

    fn render_after(&self, out: &mut String);
}

/// Renders `{name: value, other: value}`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultOptionsRenderer;

impl OptionsRenderer for DefaultOptionsRenderer {
    fn render_before(&self, out: &mut String) {
        out.push('{');
    }

    fn render_option(&self, name: &str, value: &str, is_last: bool) -> String {
        let mut option = format!("{name}: {value}");
        if !is_last {
            option.push_str(", ");
        }
        option
    }

    fn render_after(&self, out: &mut String) {
        out.push('}');
    }
}

/// Renders every option as a setter on a live jQuery UI widget:
/// `$('#id').widget('option', 'name', value);`
#[derive(Debug, Clone)]
pub struct UiOptionsRenderer {
    widget: String,
    markup_id: MarkupId,
}

impl UiOptionsRenderer {
    pub fn new(widget: impl Into<String>, markup_id: MarkupId) -> Self {
        Self {
            widget: widget.into(),
            markup_id,
        }
    }
}

impl OptionsRenderer for UiOptionsRenderer {
    fn render_before(&self, _out: &mut String) {}

    fn render_option(&self, name: &str, value: &str, _is_last: bool) -> String {
        let key = crate::utils::quote_single(name);
        JsStatement::for_markup(&self.markup_id, None)
            .chain(self.widget.as_str(), &["'option'", &key, value])
            .render()
    }

    fn render_after(&self, _out: &mut String) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_renderer_pieces() {
        let renderer = DefaultOptionsRenderer;
        let mut out = String::new();
        renderer.render_before(&mut out);
        out.push_str(&renderer.render_option("a", "1", false));
        out.push_str(&renderer.render_option("b", "'x'", true));
        renderer.render_after(&mut out);
        assert_eq!(out, "{a: 1, b: 'x'}");
    }

    #[test]
    fn test_ui_renderer_emits_setters() {
        let renderer = UiOptionsRenderer::new("progressbar", MarkupId::new("anId").unwrap());
        assert_eq!(
            renderer.render_option("value", "42", true),
            "$('#anId').progressbar('option', 'value', 42);"
        );
    }
}
