//! JSON page descriptions rendered by `wiquery render`
//!
//! ```json
//! {
//!   "id": "page",
//!   "children": [
//!     { "id": "bar", "progressbar": { "value": 42 } },
//!     { "id": "list", "statements": [
//!       { "selector": "li", "calls": [{ "name": "addClass", "args": ["odd"] }] }
//!     ] }
//!   ]
//! }
//! ```
//!
//! The progress bar creation script appends its options as a bare `{...}`
//! block, which is only valid JavaScript for a single option such as
//! `value`. Pages that set more than one option produce a script the
//! browser rejects.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use wiquery_core::ui::ProgressBar;
use wiquery_core::{
    AjaxRequestTarget, ComponentNode, Container, JsQuery, JsStatement, MarkupId, OptionValue,
    Options,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageNode {
    pub id: MarkupId,

    /// Turns the node into a progress bar with these options
    #[serde(default)]
    pub progressbar: Option<Map<String, Value>>,

    #[serde(default)]
    pub statements: Vec<StatementSpec>,

    /// Replacement markup sent for this node in an Ajax update
    #[serde(default)]
    pub markup: Option<String>,

    #[serde(default)]
    pub children: Vec<PageNode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatementSpec {
    /// Descendant selector within the node
    #[serde(default)]
    pub selector: Option<String>,

    /// Root the statement at `$(document)` instead of the node
    #[serde(default)]
    pub document: bool,

    #[serde(default)]
    pub calls: Vec<CallSpec>,
}

/// `args` are option values: strings are quoted, `{"$literal": ...}` is
/// emitted verbatim
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CallSpec {
    pub name: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

impl PageNode {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read page file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse page file {}", path.display()))
    }

    /// Build the component tree; option values are checked here
    pub fn to_component_tree(&self) -> Result<ComponentNode> {
        let mut node = match &self.progressbar {
            Some(options) => {
                let options = Options::from_json_object(options)
                    .with_context(|| format!("Invalid progressbar options on '{}'", self.id))?;
                let bar = ProgressBar::new(self.id.clone()).with_options(options);
                ComponentNode::new(Arc::new(bar))
            }
            None => ComponentNode::new(Arc::new(Container::new(self.id.clone()))),
        };

        for spec in &self.statements {
            let statement = spec
                .build(&self.id)
                .with_context(|| format!("Invalid statement on '{}'", self.id))?;
            node = node.with_behavior(Arc::new(JsQuery::new(self.id.clone()).bind(statement)));
        }

        for child in &self.children {
            node.add_child(child.to_component_tree()?);
        }
        Ok(node)
    }

    /// Queue the markup of every node that carries some
    pub fn add_updates(&self, target: &mut AjaxRequestTarget) {
        if let Some(markup) = &self.markup {
            target.add_component(self.id.clone(), markup.as_str());
        }
        for child in &self.children {
            child.add_updates(target);
        }
    }
}

impl StatementSpec {
    fn build(&self, id: &MarkupId) -> Result<JsStatement> {
        let mut statement = if self.document {
            JsStatement::for_document()
        } else {
            JsStatement::for_markup(id, self.selector.as_deref())
        };

        for call in &self.calls {
            let args = call
                .args
                .iter()
                .map(|arg| OptionValue::from_json(&call.name, arg).map(|v| v.render()))
                .collect::<wiquery_core::Result<Vec<_>>>()?;
            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            statement = statement.chain(call.name.as_str(), &args);
        }
        Ok(statement)
    }
}
