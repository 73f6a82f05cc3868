//! Animation effects chained onto a selection

use super::resources;
use crate::javascript::{ChainableStatement, JsScope, JsStatement};
use crate::options::Options;
use crate::plugin::{Plugin, ResourceManager, ResourceReference};
use crate::types::MarkupId;

/// Duration of an effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffectSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
    Millis(u32),
}

impl EffectSpeed {
    fn render(self) -> String {
        match self {
            EffectSpeed::Slow => "'slow'".to_string(),
            EffectSpeed::Normal => "'normal'".to_string(),
            EffectSpeed::Fast => "'fast'".to_string(),
            EffectSpeed::Millis(ms) => ms.to_string(),
        }
    }
}

/// A single effect call such as `.fadeIn('slow', function() {...})`
#[derive(Debug, Clone)]
pub struct Effect {
    label: &'static str,
    args: Vec<String>,
    callback: Option<JsScope>,
    resources: Vec<ResourceReference>,
}

impl Effect {
    fn core(label: &'static str, speed: EffectSpeed) -> Self {
        Self {
            label,
            args: vec![speed.render()],
            callback: None,
            resources: Vec::new(),
        }
    }

    pub fn hide(speed: EffectSpeed) -> Self {
        Self::core("hide", speed)
    }

    pub fn show(speed: EffectSpeed) -> Self {
        Self::core("show", speed)
    }

    pub fn fade_in(speed: EffectSpeed) -> Self {
        Self::core("fadeIn", speed)
    }

    pub fn fade_out(speed: EffectSpeed) -> Self {
        Self::core("fadeOut", speed)
    }

    pub fn slide_up(speed: EffectSpeed) -> Self {
        Self::core("slideUp", speed)
    }

    pub fn slide_down(speed: EffectSpeed) -> Self {
        Self::core("slideDown", speed)
    }

    pub fn toggle(speed: EffectSpeed) -> Self {
        Self::core("toggle", speed)
    }

    /// jQuery UI blind effect; `options` is e.g. `{direction: 'horizontal'}`
    pub fn blind(options: &Options, speed: EffectSpeed) -> Self {
        Self {
            label: "effect",
            args: vec!["'blind'".to_string(), options.javascript_options(), speed.render()],
            callback: None,
            resources: vec![resources::effects_core(), resources::blind_effect()],
        }
    }

    /// Runs once the animation completes
    pub fn with_callback(mut self, callback: JsScope) -> Self {
        self.callback = Some(callback);
        self
    }

    /// Scripts needed beyond jQuery itself
    pub fn resources(&self) -> &[ResourceReference] {
        &self.resources
    }
}

impl ChainableStatement for Effect {
    fn chain_label(&self) -> &str {
        self.label
    }

    fn statement_args(&self) -> Vec<String> {
        let mut args = self.args.clone();
        if let Some(callback) = &self.callback {
            args.push(callback.render());
        }
        args
    }
}

/// Plays an effect on a component, then calls back the server
///
/// `handler_script` is the client-side Ajax call issued once the effect has
/// finished.
#[derive(Debug, Clone)]
pub struct AjaxEffectBehavior {
    markup_id: MarkupId,
    effect: Effect,
    handler_script: String,
}

impl AjaxEffectBehavior {
    pub fn new(markup_id: MarkupId, effect: Effect, handler_script: impl Into<String>) -> Self {
        Self {
            markup_id,
            effect,
            handler_script: handler_script.into(),
        }
    }

    pub fn effect(&self) -> &Effect {
        &self.effect
    }
}

impl Plugin for AjaxEffectBehavior {
    fn contribute(&self, manager: &mut ResourceManager) {
        for reference in self.effect.resources() {
            manager.add_javascript_resource(reference.clone());
        }
    }

    fn statement(&self) -> JsStatement {
        let effect = self
            .effect
            .clone()
            .with_callback(JsScope::quick_scope(self.handler_script.as_str()));
        JsStatement::for_markup(&self.markup_id, None).chain_statement(&effect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn target() -> MarkupId {
        MarkupId::new("panel").unwrap()
    }

    #[test]
    fn test_core_effects() {
        let select = || JsStatement::for_markup(&target(), None);
        assert_snapshot!(
            select().chain_statement(&Effect::hide(EffectSpeed::Slow)).render(),
            @"$('#panel').hide('slow');"
        );
        assert_snapshot!(
            select().chain_statement(&Effect::fade_in(EffectSpeed::Millis(250))).render(),
            @"$('#panel').fadeIn(250);"
        );
        assert_snapshot!(
            select().chain_statement(&Effect::slide_down(EffectSpeed::default())).render(),
            @"$('#panel').slideDown('normal');"
        );
        assert!(Effect::toggle(EffectSpeed::Fast).resources().is_empty());
    }

    #[test]
    fn test_callback_is_last_argument() {
        let effect = Effect::fade_out(EffectSpeed::Fast).with_callback(JsScope::quick_scope("done();"));
        assert_eq!(
            effect.statement_args(),
            vec!["'fast'".to_string(), "function() {\ndone();\n}".to_string()]
        );
    }

    #[test]
    fn test_blind() {
        let mut options = Options::new();
        options.put("direction", "horizontal");
        let effect = Effect::blind(&options, EffectSpeed::Millis(500));
        assert_snapshot!(
            JsStatement::for_markup(&target(), None).chain_statement(&effect).render(),
            @"$('#panel').effect('blind', {direction: 'horizontal'}, 500);"
        );
        assert_eq!(effect.resources(), [resources::effects_core(), resources::blind_effect()]);
    }

    #[test]
    fn test_ajax_effect_behavior() {
        let behavior = AjaxEffectBehavior::new(target(), Effect::show(EffectSpeed::Slow), "wicketAjaxGet('?x=1');");
        assert_eq!(
            behavior.statement().render(),
            "$('#panel').show('slow', function() {\nwicketAjaxGet('?x=1');\n});"
        );

        let mut manager = ResourceManager::new();
        behavior.contribute(&mut manager);
        assert!(manager.is_empty());

        let blind = AjaxEffectBehavior::new(target(), Effect::blind(&Options::new(), EffectSpeed::Fast), "go();");
        blind.contribute(&mut manager);
        assert_eq!(manager.javascript_resources().len(), 2);
    }
}
