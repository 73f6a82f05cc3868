//! Binding statements to a component

use super::JsStatement;
use crate::emission::{EmissionDecider, EmissionTarget, RenderContext};
use crate::plugin::{Plugin, ResourceManager};
use crate::types::{Component, MarkupId};

/// Builds statements about one component and emits the bound one
///
/// ```
/// use wiquery_core::{JsQuery, MarkupId};
///
/// let query = JsQuery::new(MarkupId::new("anId").unwrap());
/// let statement = query.select().css("border", "1px solid red");
/// assert_eq!(statement.render(), "$('#anId').css('border', '1px solid red');");
/// ```
#[derive(Debug, Clone)]
pub struct JsQuery {
    markup_id: MarkupId,
    statement: Option<JsStatement>,
}

impl JsQuery {
    pub fn new(markup_id: MarkupId) -> Self {
        Self {
            markup_id,
            statement: None,
        }
    }

    pub fn for_component(component: &dyn Component) -> Self {
        Self::new(component.markup_id().clone())
    }

    pub fn markup_id(&self) -> &MarkupId {
        &self.markup_id
    }

    /// `$('#id')`
    pub fn select(&self) -> JsStatement {
        JsStatement::for_markup(&self.markup_id, None)
    }

    /// `$('#id selector')`
    pub fn select_within(&self, selector: &str) -> JsStatement {
        JsStatement::for_markup(&self.markup_id, Some(selector))
    }

    /// `$(document)`
    pub fn document(&self) -> JsStatement {
        JsStatement::for_document()
    }

    /// Make `statement` the one this query emits
    pub fn bind(mut self, statement: JsStatement) -> Self {
        self.statement = Some(statement);
        self
    }

    pub fn set_statement(&mut self, statement: JsStatement) {
        self.statement = Some(statement);
    }

    pub fn bound_statement(&self) -> Option<&JsStatement> {
        self.statement.as_ref()
    }

    /// Emit the bound statement for the current request
    pub fn render_head(&self, decider: &EmissionDecider, ctx: &mut RenderContext<'_>) -> Option<EmissionTarget> {
        let statement = self.statement.as_ref()?;
        decider.emit(statement, ctx)
    }
}

impl Plugin for JsQuery {
    fn contribute(&self, _resources: &mut ResourceManager) {}

    fn statement(&self) -> JsStatement {
        self.statement.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::emission::{AjaxRequestTarget, HeaderBuffer, HeaderItem};
    use crate::types::Container;
    use insta::assert_snapshot;

    fn query() -> JsQuery {
        JsQuery::for_component(&Container::new(MarkupId::new("anId").unwrap()))
    }

    #[test]
    fn test_select() {
        assert_snapshot!(query().select().render(), @"$('#anId');");
    }

    #[test]
    fn test_select_within() {
        assert_snapshot!(query().select_within("span").render(), @"$('#anId span');");
    }

    #[test]
    fn test_document() {
        assert_snapshot!(query().document().render(), @"$(document);");
    }

    #[test]
    fn test_unbound_query_renders_nothing() {
        let mut header = HeaderBuffer::new();
        let decider = EmissionDecider::new(Settings::default());
        let q = query();

        assert_eq!(q.render_head(&decider, &mut RenderContext::full_render(&mut header)), None);
        assert!(header.is_empty());
        assert!(Plugin::statement(&q).is_empty());
    }

    #[test]
    fn test_render_head_full_page() {
        let q = query();
        let q = q.clone().bind(q.select().chain("css", &["'border'", "'1px solid red'"]));
        let mut header = HeaderBuffer::new();
        let decider = EmissionDecider::new(Settings::default());

        let target = q.render_head(&decider, &mut RenderContext::full_render(&mut header));
        assert_eq!(target, Some(EmissionTarget::InlineScript));
        assert!(matches!(&header.items()[0], HeaderItem::JavascriptReference { path } if path.contains("jquery")));
        assert!(matches!(&header.items()[1], HeaderItem::Markup { markup } if markup.contains("$('#anId').css('border', '1px solid red');")));
    }

    #[test]
    fn test_render_head_ajax() {
        let mut q = query();
        q.set_statement(q.select().chain("hide", &[]));
        let mut header = HeaderBuffer::new();
        let mut target = AjaxRequestTarget::new();
        let decider = EmissionDecider::new(Settings::default());

        let emitted = q.render_head(&decider, &mut RenderContext::ajax_update(&mut header, &mut target));
        assert_eq!(emitted, Some(EmissionTarget::AjaxDeferred));
        assert_eq!(target.respond().evaluations, vec!["$('#anId').hide();"]);
    }
}
