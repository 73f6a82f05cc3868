//! Chained jQuery call expressions

use super::{ChainableStatement, JsScope};
use crate::types::MarkupId;
use crate::utils::quote_single;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Call { name: String, args: Vec<String> },
    /// An already rendered fragment, emitted verbatim
    Raw(String),
}

/// An append-only chain of calls on a jQuery selection
///
/// Rooted statements (`$('#id')`, `$(document)`, ...) render with a
/// terminating `;`. A root-less statement only concatenates the fragments
/// appended to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsStatement {
    root: Option<String>,
    nodes: Vec<Node>,
}

impl JsStatement {
    /// A root-less statement, used to concatenate rendered fragments
    pub fn new() -> Self {
        Self::default()
    }

    /// `$('#id')`, or `$('#id descendant')` when a descendant selector is given
    pub fn for_markup(id: &MarkupId, descendant: Option<&str>) -> Self {
        Self::rooted(format!("$({})", quote_single(&id.selector(descendant))))
    }

    /// `$('selector')` for an arbitrary CSS selector
    pub fn for_selector(selector: &str) -> Self {
        Self::rooted(format!("$({})", quote_single(selector)))
    }

    /// `$(document)`
    pub fn for_document() -> Self {
        Self::rooted("$(document)".to_string())
    }

    fn rooted(root: String) -> Self {
        Self {
            root: Some(root),
            nodes: Vec::new(),
        }
    }

    /// Append `.name(args...)`; arguments must already be rendered
    pub fn chain(mut self, name: impl Into<String>, args: &[&str]) -> Self {
        self.nodes.push(Node::Call {
            name: name.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        });
        self
    }

    pub fn chain_statement(mut self, chainable: &dyn ChainableStatement) -> Self {
        self.nodes.push(Node::Call {
            name: chainable.chain_label().to_string(),
            args: chainable.statement_args(),
        });
        self
    }

    /// Append an already rendered fragment
    pub fn append(mut self, fragment: impl Into<String>) -> Self {
        self.nodes.push(Node::Raw(fragment.into()));
        self
    }

    pub fn ready(self, scope: &JsScope) -> Self {
        self.chain("ready", &[&scope.render()])
    }

    pub fn each(self, scope: &JsScope) -> Self {
        self.chain("each", &[&scope.render()])
    }

    pub fn css(self, name: &str, value: &str) -> Self {
        self.chain("css", &[&quote_single(name), &quote_single(value)])
    }

    pub fn attr(self, name: &str, value: &str) -> Self {
        self.chain("attr", &[&quote_single(name), &quote_single(value)])
    }

    pub fn add_class(self, class: &str) -> Self {
        self.chain("addClass", &[&quote_single(class)])
    }

    pub fn remove_class(self, class: &str) -> Self {
        self.chain("removeClass", &[&quote_single(class)])
    }

    pub fn is_rooted(&self) -> bool {
        self.root.is_some()
    }

    /// True when rendering would produce nothing but whitespace
    pub fn is_empty(&self) -> bool {
        crate::utils::is_blank(&self.render())
    }

    pub fn render(&self) -> String {
        self.render_semicolon(true)
    }

    /// With `semicolon` false the statement can be nested as an argument
    /// of another statement
    pub fn render_semicolon(&self, semicolon: bool) -> String {
        let mut out = String::new();
        if let Some(root) = &self.root {
            out.push_str(root);
        }
        for node in &self.nodes {
            match node {
                Node::Call { name, args } => {
                    out.push('.');
                    out.push_str(name);
                    out.push('(');
                    out.push_str(&args.join(", "));
                    out.push(')');
                }
                Node::Raw(fragment) => out.push_str(fragment),
            }
        }
        match (&self.root, semicolon) {
            (Some(_), true) => out.push(';'),
            // A concatenation already carries the `;` of its last fragment
            (None, false) if out.ends_with(';') => {
                out.pop();
            }
            _ => {}
        }
        out
    }
}

impl fmt::Display for JsStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
