//! Typed option maps rendered as JavaScript object literals

mod complex;
mod renderer;
mod value;

pub use complex::ComplexOption;
pub use renderer::{DefaultOptionsRenderer, OptionsRenderer, UiOptionsRenderer};
pub use value::OptionValue;

use crate::error::{Error, Result};
use crate::javascript::JsScope;
use serde_json::{Map, Value};
use std::sync::Arc;

/// An insertion-ordered map of option names to typed values
///
/// Putting an existing key replaces its value in place, so the rendered
/// order is always the order in which keys were first inserted.
#[derive(Debug, Clone, Default)]
pub struct Options {
    entries: Vec<(String, OptionValue)>,
    renderer: Option<Arc<dyn OptionsRenderer>>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_renderer(renderer: Arc<dyn OptionsRenderer>) -> Self {
        Self {
            entries: Vec::new(),
            renderer: Some(renderer),
        }
    }

    /// Build from a JSON object, rejecting values with no JavaScript form
    pub fn from_json_object(object: &Map<String, Value>) -> Result<Self> {
        let mut options = Self::new();
        for (key, value) in object {
            options.put(key.as_str(), OptionValue::from_json(key, value)?);
        }
        Ok(options)
    }

    pub fn set_renderer(&mut self, renderer: Arc<dyn OptionsRenderer>) {
        self.renderer = Some(renderer);
    }

    pub fn put(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Store text that is already valid JavaScript; it is never re-quoted
    pub fn put_literal(&mut self, key: impl Into<String>, literal: impl Into<String>) -> &mut Self {
        self.put(key, OptionValue::Literal(literal.into()))
    }

    pub fn put_complex(&mut self, key: impl Into<String>, option: Arc<dyn ComplexOption>) -> &mut Self {
        self.put(key, OptionValue::Complex(option))
    }

    pub fn put_scope(&mut self, key: impl Into<String>, scope: JsScope) -> &mut Self {
        self.put(key, OptionValue::Scope(scope))
    }

    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        self.typed(key, "boolean", |v| match v {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        })
    }

    pub fn get_int(&self, key: &str) -> Result<Option<i64>> {
        self.typed(key, "integer", |v| match v {
            OptionValue::Int(i) => Some(*i),
            _ => None,
        })
    }

    /// Integers are accepted and widened
    pub fn get_float(&self, key: &str) -> Result<Option<f64>> {
        self.typed(key, "float", |v| match v {
            OptionValue::Float(f) => Some(*f),
            OptionValue::Int(i) => Some(*i as f64),
            _ => None,
        })
    }

    pub fn get_string(&self, key: &str) -> Result<Option<&str>> {
        self.typed(key, "string", |v| match v {
            OptionValue::String(s) => Some(s.as_str()),
            _ => None,
        })
    }

    pub fn get_literal(&self, key: &str) -> Result<Option<&str>> {
        self.typed(key, "literal", |v| match v {
            OptionValue::Literal(s) => Some(s.as_str()),
            _ => None,
        })
    }

    pub fn get_complex(&self, key: &str) -> Result<Option<&Arc<dyn ComplexOption>>> {
        self.typed(key, "complex option", |v| match v {
            OptionValue::Complex(c) => Some(c),
            _ => None,
        })
    }

    pub fn get_scope(&self, key: &str) -> Result<Option<&JsScope>> {
        self.typed(key, "scope", |v| match v {
            OptionValue::Scope(s) => Some(s),
            _ => None,
        })
    }

    fn typed<'a, T>(
        &'a self,
        key: &str,
        expected: &'static str,
        extract: impl Fn(&'a OptionValue) -> Option<T>,
    ) -> Result<Option<T>> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        extract(value)
            .map(Some)
            .ok_or_else(|| Error::OptionTypeMismatch {
                key: key.to_string(),
                expected,
                found: value.type_name(),
            })
    }

    /// Render through the configured renderer, `{...}` by default
    pub fn javascript_options(&self) -> String {
        let renderer: &dyn OptionsRenderer = match &self.renderer {
            Some(r) => r.as_ref(),
            None => &DefaultOptionsRenderer,
        };
        self.render_with(renderer)
    }

    pub fn render_with(&self, renderer: &dyn OptionsRenderer) -> String {
        let mut out = String::new();
        renderer.render_before(&mut out);
        let count = self.entries.len();
        for (i, (key, value)) in self.entries.iter().enumerate() {
            out.push_str(&renderer.render_option(key, &value.render(), i + 1 == count));
        }
        renderer.render_after(&mut out);
        out
    }
}

impl ComplexOption for Options {
    fn javascript_option(&self) -> String {
        self.javascript_options()
    }
}
