//! jQuery UI progress bar

use super::resources;
use crate::error::Result;
use crate::javascript::{JsQuery, JsScope, JsStatement};
use crate::options::{Options, UiOptionsRenderer};
use crate::plugin::{Plugin, ResourceManager};
use crate::types::{Component, MarkupId};

const WIDGET: &str = "progressbar";

/// A progress bar bound to one element
///
/// Every method returning a [`JsStatement`] only builds script; to run it
/// during an Ajax request hand it to
/// [`AjaxRequestTarget::append_statement`](crate::emission::AjaxRequestTarget::append_statement).
#[derive(Debug, Clone)]
pub struct ProgressBar {
    id: MarkupId,
    options: Options,
}

impl ProgressBar {
    pub fn new(id: MarkupId) -> Self {
        Self {
            id,
            options: Options::new(),
        }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    // Options

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.options.put("disabled", disabled);
        self
    }

    pub fn is_disabled(&self) -> Result<bool> {
        Ok(self.options.get_bool("disabled")?.unwrap_or(false))
    }

    pub fn set_value(&mut self, value: i64) -> &mut Self {
        self.options.put("value", value);
        self
    }

    pub fn value(&self) -> Result<i64> {
        Ok(self.options.get_int("value")?.unwrap_or(0))
    }

    // Events

    /// Runs whenever the value changes
    pub fn set_change_event(&mut self, change: JsScope) -> &mut Self {
        self.options.put_scope("change", change);
        self
    }

    // Methods

    fn widget_call(&self, args: &[&str]) -> JsStatement {
        JsQuery::new(self.id.clone()).select().chain(WIDGET, args)
    }

    /// Re-applies the current options to a live widget, one setter per option
    pub fn update(&self) -> JsStatement {
        let renderer = UiOptionsRenderer::new(WIDGET, self.id.clone());
        JsStatement::new().append(self.options.render_with(&renderer))
    }

    pub fn destroy(&self) -> JsStatement {
        self.widget_call(&["'destroy'"])
    }

    pub fn disable(&self) -> JsStatement {
        self.widget_call(&["'disable'"])
    }

    pub fn enable(&self) -> JsStatement {
        self.widget_call(&["'enable'"])
    }

    /// Reads the client-side value
    pub fn value_statement(&self) -> JsStatement {
        self.widget_call(&["'value'"])
    }

    pub fn set_value_statement(&self, value: i64) -> JsStatement {
        self.widget_call(&["'value'", &value.to_string()])
    }

    pub fn increment(&self, by: i64) -> JsStatement {
        self.shift_value("+", by)
    }

    pub fn decrement(&self, by: i64) -> JsStatement {
        self.shift_value("-", by)
    }

    fn shift_value(&self, op: &str, by: i64) -> JsStatement {
        let current = self.value_statement().render_semicolon(false);
        self.widget_call(&["'value'", &format!("{current} {op} {by}")])
    }

    /// The `.ui-progressbar` element
    pub fn widget(&self) -> JsStatement {
        self.widget_call(&["'widget'"])
    }
}

impl Component for ProgressBar {
    fn markup_id(&self) -> &MarkupId {
        &self.id
    }

    fn as_plugin(&self) -> Option<&dyn Plugin> {
        Some(self)
    }
}

impl Plugin for ProgressBar {
    fn contribute(&self, manager: &mut ResourceManager) {
        manager.add_css_resource(resources::theme());
        manager.add_javascript_resource(resources::ui_core());
        manager.add_javascript_resource(resources::widget());
        manager.add_javascript_resource(resources::progressbar());
    }

    /// The widget creation call followed by the rendered options
    ///
    /// The trailing `{...}` parses as a block statement, which only holds
    /// one `key: value` label. With two or more options the emitted script
    /// is a syntax error; apply those with [`ProgressBar::update`] instead.
    fn statement(&self) -> JsStatement {
        JsStatement::new()
            .append(self.widget_call(&[]).render())
            .append(self.options.javascript_options())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use insta::assert_snapshot;

    fn progress_bar() -> ProgressBar {
        ProgressBar::new(MarkupId::new("anId").unwrap())
    }

    #[test]
    fn test_statement() {
        let mut bar = progress_bar();
        bar.set_value(42);
        assert_snapshot!(bar.statement().render(), @"$('#anId').progressbar();{value: 42}");
    }

    #[test]
    fn test_statement_with_several_options_is_not_a_single_block() {
        let mut bar = progress_bar();
        bar.set_value(42).set_disabled(true);
        assert_snapshot!(
            bar.statement().render(),
            @"$('#anId').progressbar();{value: 42, disabled: true}"
        );
        assert_eq!(bar.update().render().matches("progressbar('option'").count(), 2);
    }

    #[test]
    fn test_update() {
        let mut bar = progress_bar();
        bar.set_value(10).set_disabled(true);
        assert_eq!(
            bar.update().render(),
            "$('#anId').progressbar('option', 'value', 10);\
             $('#anId').progressbar('option', 'disabled', true);"
        );
    }

    #[test]
    fn test_option_accessors() {
        let mut bar = progress_bar();
        assert_eq!(bar.value().unwrap(), 0);
        assert!(!bar.is_disabled().unwrap());

        bar.set_value(7).set_disabled(true);
        assert_eq!(bar.value().unwrap(), 7);
        assert!(bar.is_disabled().unwrap());

        bar.options_mut().put("value", "seven");
        assert!(matches!(bar.value(), Err(Error::OptionTypeMismatch { .. })));
    }

    #[test]
    fn test_change_event() {
        let mut bar = progress_bar();
        bar.set_change_event(JsScope::ui_event("alert(ui.value);"));
        assert_eq!(
            bar.options().javascript_options(),
            "{change: function(event, ui) {\nalert(ui.value);\n}}"
        );
    }

    #[test]
    fn test_methods() {
        let bar = progress_bar();
        assert_snapshot!(bar.destroy().render(), @"$('#anId').progressbar('destroy');");
        assert_snapshot!(bar.disable().render(), @"$('#anId').progressbar('disable');");
        assert_snapshot!(bar.enable().render(), @"$('#anId').progressbar('enable');");
        assert_snapshot!(bar.value_statement().render(), @"$('#anId').progressbar('value');");
        assert_snapshot!(bar.set_value_statement(30).render(), @"$('#anId').progressbar('value', 30);");
        assert_snapshot!(bar.widget().render(), @"$('#anId').progressbar('widget');");
    }

    #[test]
    fn test_increment_and_decrement() {
        let bar = progress_bar();
        assert_snapshot!(
            bar.increment(1).render(),
            @"$('#anId').progressbar('value', $('#anId').progressbar('value') + 1);"
        );
        assert_snapshot!(
            bar.decrement(5).render(),
            @"$('#anId').progressbar('value', $('#anId').progressbar('value') - 5);"
        );
    }

    #[test]
    fn test_contribute() {
        let mut manager = ResourceManager::new();
        progress_bar().contribute(&mut manager);
        assert_eq!(
            manager.javascript_resources(),
            [resources::ui_core(), resources::widget(), resources::progressbar()]
        );
        assert_eq!(manager.css_resources(), [resources::theme()]);
    }
}
