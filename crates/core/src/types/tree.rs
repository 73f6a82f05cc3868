//! Component tree and the plugin discovery walk

use super::{Component, MarkupId};
use crate::plugin::Plugin;
use std::fmt;
use std::sync::Arc;

/// One node of the host component tree: a component, the behaviours
/// attached to it and its children in markup order
#[derive(Clone)]
pub struct ComponentNode {
    component: Arc<dyn Component>,
    behaviors: Vec<Arc<dyn Plugin>>,
    children: Vec<ComponentNode>,
}

impl ComponentNode {
    pub fn new(component: Arc<dyn Component>) -> Self {
        Self {
            component,
            behaviors: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_behavior(mut self, behavior: Arc<dyn Plugin>) -> Self {
        self.behaviors.push(behavior);
        self
    }

    pub fn with_child(mut self, child: ComponentNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn add_child(&mut self, child: ComponentNode) {
        self.children.push(child);
    }

    pub fn markup_id(&self) -> &MarkupId {
        self.component.markup_id()
    }

    pub fn component(&self) -> &dyn Component {
        self.component.as_ref()
    }

    pub fn children(&self) -> &[ComponentNode] {
        &self.children
    }

    /// The component itself when it is a plugin, followed by its behaviours
    pub fn plugins(&self) -> Vec<&dyn Plugin> {
        let mut plugins: Vec<&dyn Plugin> = Vec::with_capacity(self.behaviors.len() + 1);
        if let Some(plugin) = self.component.as_plugin() {
            plugins.push(plugin);
        }
        for behavior in &self.behaviors {
            plugins.push(behavior.as_ref());
        }
        plugins
    }

    pub fn has_plugins(&self) -> bool {
        self.component.as_plugin().is_some() || !self.behaviors.is_empty()
    }
}

impl fmt::Debug for ComponentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentNode")
            .field("id", self.markup_id())
            .field("behaviors", &self.behaviors.len())
            .field("children", &self.children)
            .finish()
    }
}

/// Depth-first, pre-order walk returning every node the predicate accepts
pub fn walk<'a, P>(root: &'a ComponentNode, predicate: P) -> Vec<&'a ComponentNode>
where
    P: Fn(&ComponentNode) -> bool,
{
    let mut matches = Vec::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if predicate(node) {
            matches.push(node);
        }
        // Reversed so the leftmost child is visited first
        stack.extend(node.children.iter().rev());
    }

    matches
}
