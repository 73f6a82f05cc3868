//! Partial-page (Ajax) responses and their finalization listeners

use crate::error::Result;
use crate::javascript::JsStatement;
use crate::types::MarkupId;
use serde::Serialize;
use std::fmt;

/// Script collected from listeners once the DOM patch phase is done
#[derive(Debug, Clone, Default)]
pub struct JavascriptResponse {
    scripts: Vec<String>,
}

impl JavascriptResponse {
    pub fn add_javascript(&mut self, script: impl Into<String>) {
        self.scripts.push(script.into());
    }
}

/// Hooks into the phases of [`AjaxRequestTarget::respond`]
pub trait AjaxListener: Send {
    /// Runs before any component markup is written
    fn on_before_respond(&mut self, _components: &[MarkupId]) {}

    /// Runs after every component has been written; scripts added here are
    /// evaluated on the client once the new markup is in place
    fn on_after_respond(&mut self, response: &mut JavascriptResponse);
}

/// Adds one pre-rendered script at response finalization
#[derive(Debug, Clone)]
pub struct DeferredScript {
    script: String,
}

impl DeferredScript {
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
        }
    }

    pub fn script(&self) -> &str {
        &self.script
    }
}

impl AjaxListener for DeferredScript {
    fn on_after_respond(&mut self, response: &mut JavascriptResponse) {
        response.add_javascript(self.script.as_str());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentUpdate {
    pub id: MarkupId,
    pub markup: String,
}

/// The finalized partial response, in client evaluation order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AjaxResponse {
    /// Evaluated before any component is replaced
    pub priority_evaluations: Vec<String>,
    pub components: Vec<ComponentUpdate>,
    /// Evaluated after every component has been replaced
    pub evaluations: Vec<String>,
}

impl AjaxResponse {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// An in-flight Ajax request: which components to repaint, which scripts
/// to run, and who wants to hear about finalization
#[derive(Default)]
pub struct AjaxRequestTarget {
    components: Vec<ComponentUpdate>,
    prepended: Vec<String>,
    appended: Vec<String>,
    listeners: Vec<Box<dyn AjaxListener>>,
}

impl AjaxRequestTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a component for repainting; a later call for the same id wins
    pub fn add_component(&mut self, id: MarkupId, markup: impl Into<String>) {
        let markup = markup.into();
        match self.components.iter_mut().find(|c| c.id == id) {
            Some(existing) => existing.markup = markup,
            None => self.components.push(ComponentUpdate { id, markup }),
        }
    }

    pub fn prepend_javascript(&mut self, script: impl Into<String>) {
        self.prepended.push(script.into());
    }

    pub fn append_javascript(&mut self, script: impl Into<String>) {
        self.appended.push(script.into());
    }

    pub fn append_statement(&mut self, statement: &JsStatement) {
        self.append_javascript(statement.render());
    }

    pub fn add_listener(&mut self, listener: Box<dyn AjaxListener>) {
        self.listeners.push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Finalize the response. Phases run strictly in order: before-respond
    /// listeners, component markup, after-respond listeners, appended scripts.
    pub fn respond(mut self) -> AjaxResponse {
        let ids: Vec<MarkupId> = self.components.iter().map(|c| c.id.clone()).collect();
        for listener in &mut self.listeners {
            listener.on_before_respond(&ids);
        }

        let mut response = AjaxResponse {
            priority_evaluations: std::mem::take(&mut self.prepended),
            components: std::mem::take(&mut self.components),
            evaluations: Vec::new(),
        };

        let mut javascript = JavascriptResponse::default();
        for listener in &mut self.listeners {
            listener.on_after_respond(&mut javascript);
        }
        tracing::debug!(
            "Ajax response: {} components, {} deferred scripts, {} appended scripts",
            response.components.len(),
            javascript.scripts.len(),
            self.appended.len()
        );

        response.evaluations = javascript.scripts;
        response.evaluations.append(&mut self.appended);
        response
    }
}

impl fmt::Debug for AjaxRequestTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AjaxRequestTarget")
            .field("components", &self.components)
            .field("prepended", &self.prepended)
            .field("appended", &self.appended)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
