//! One render pass over a component tree

use super::{Plugin, PluginRenderingListener, ResourceManager};
use crate::emission::{EmissionDecider, EmissionTarget, RenderContext};
use crate::javascript::JsStatement;
use crate::merge::ScriptMerger;
use crate::types::{walk, ComponentNode};
use serde::Serialize;
use std::sync::Arc;

/// What a render pass did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderSummary {
    pub plugins: usize,
    pub javascript_resources: usize,
    pub css_resources: usize,
    /// `None` when no plugin produced any script
    pub target: Option<EmissionTarget>,
}

/// Walks a component tree, gathers every plugin's resources ahead of any
/// script, then emits all plugin statements as one
pub struct RenderPass {
    decider: EmissionDecider,
    merger: Option<Arc<ScriptMerger>>,
    listeners: Vec<Arc<dyn PluginRenderingListener>>,
}

impl RenderPass {
    pub fn new(decider: EmissionDecider) -> Self {
        Self {
            decider,
            merger: None,
            listeners: Vec::new(),
        }
    }

    pub fn with_merger(mut self, merger: Arc<ScriptMerger>) -> Self {
        self.merger = Some(merger);
        self
    }

    pub fn with_listener(mut self, listener: Arc<dyn PluginRenderingListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    pub fn render(&self, root: &ComponentNode, ctx: &mut RenderContext<'_>) -> RenderSummary {
        let plugins: Vec<&dyn Plugin> = walk(root, ComponentNode::has_plugins)
            .into_iter()
            .flat_map(ComponentNode::plugins)
            .collect();
        tracing::debug!("Render pass found {} plugins under {}", plugins.len(), root.markup_id());

        let mut resources = ResourceManager::new();
        for plugin in &plugins {
            plugin.contribute(&mut resources);
        }

        let mut statement = JsStatement::new();
        for plugin in &plugins {
            let plugin_statement = plugin.statement();
            if !plugin_statement.is_empty() {
                statement = statement.append(plugin_statement.render());
            }
        }

        // jQuery has to load ahead of the plugin scripts that extend it
        let settings = self.decider.settings();
        if settings.auto_import_jquery_resource && !statement.is_empty() {
            ctx.header()
                .render_javascript_reference(&self.decider.jquery_core_reference());
        }
        resources.render(ctx.header(), settings, self.merger.as_deref());

        for plugin in &plugins {
            for listener in &self.listeners {
                listener.on_render(*plugin, &resources, ctx.header());
            }
        }

        RenderSummary {
            plugins: plugins.len(),
            javascript_resources: resources.javascript_resources().len(),
            css_resources: resources.css_resources().len(),
            target: self.decider.emit(&statement, ctx),
        }
    }
}
