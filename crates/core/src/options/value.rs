//! Typed option values and their JavaScript rendering

use super::ComplexOption;
use crate::error::{Error, Result};
use crate::javascript::JsScope;
use crate::utils::quote_single;
use serde_json::Value;
use std::sync::Arc;

/// A single value in an [`Options`](super::Options) map
#[derive(Debug, Clone)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Rendered single-quoted
    String(String),
    /// Already valid JavaScript; rendered verbatim
    Literal(String),
    Complex(Arc<dyn ComplexOption>),
    /// A callback, rendered as a function expression
    Scope(JsScope),
}

impl OptionValue {
    pub fn render(&self) -> String {
        match self {
            OptionValue::Bool(b) => b.to_string(),
            OptionValue::Int(i) => i.to_string(),
            OptionValue::Float(f) => render_float(*f),
            OptionValue::String(s) => quote_single(s),
            OptionValue::Literal(s) => s.clone(),
            OptionValue::Complex(c) => c.javascript_option(),
            OptionValue::Scope(scope) => scope.render(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            OptionValue::Bool(_) => "boolean",
            OptionValue::Int(_) => "integer",
            OptionValue::Float(_) => "float",
            OptionValue::String(_) => "string",
            OptionValue::Literal(_) => "literal",
            OptionValue::Complex(_) => "complex option",
            OptionValue::Scope(_) => "scope",
        }
    }

    /// Convert a JSON value, failing on anything without a JavaScript rendering.
    ///
    /// Besides scalars, two tagged objects are understood:
    /// `{"$literal": "..."}` and `{"$function": "body", "$args": ["a", "b"]}`.
    pub fn from_json(key: &str, value: &Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(OptionValue::Bool(*b)),
            // Integers past i64::MAX are unsupported
            Value::Number(n) if n.is_u64() && n.as_i64().is_none() => Err(unsupported(key, value)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(OptionValue::Int(i)),
                None => n
                    .as_f64()
                    .map(OptionValue::Float)
                    .ok_or_else(|| unsupported(key, value)),
            },
            Value::String(s) => Ok(OptionValue::String(s.clone())),
            Value::Object(map) => {
                if let (1, Some(Value::String(literal))) = (map.len(), map.get("$literal")) {
                    return Ok(OptionValue::Literal(literal.clone()));
                }
                if let Some(Value::String(body)) = map.get("$function") {
                    let args = match map.get("$args") {
                        None => Vec::new(),
                        Some(Value::Array(items)) => items
                            .iter()
                            .map(|item| item.as_str().map(str::to_string))
                            .collect::<Option<Vec<_>>>()
                            .ok_or_else(|| unsupported(key, value))?,
                        Some(_) => return Err(unsupported(key, value)),
                    };
                    let known = map.keys().all(|k| k == "$function" || k == "$args");
                    if known {
                        return Ok(OptionValue::Scope(JsScope::with_args(&args, body)));
                    }
                }
                Err(unsupported(key, value))
            }
            Value::Null | Value::Array(_) => Err(unsupported(key, value)),
        }
    }
}

fn unsupported(key: &str, value: &Value) -> Error {
    Error::UnsupportedOptionValue {
        key: key.to_string(),
        found: value.to_string(),
    }
}

fn render_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        let token = if f > 0.0 { "Infinity" } else { "-Infinity" };
        token.to_string()
    } else {
        f.to_string()
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Int(value.into())
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Float(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::String(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::String(value)
    }
}

impl From<JsScope> for OptionValue {
    fn from(value: JsScope) -> Self {
        OptionValue::Scope(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_rendering() {
        assert_eq!(OptionValue::Bool(true).render(), "true");
        assert_eq!(OptionValue::Int(42).render(), "42");
        assert_eq!(OptionValue::Float(0.5).render(), "0.5");
        assert_eq!(OptionValue::Float(f64::NAN).render(), "NaN");
        assert_eq!(OptionValue::Float(f64::NEG_INFINITY).render(), "-Infinity");
        assert_eq!(OptionValue::from("slow").render(), "'slow'");
        assert_eq!(OptionValue::Literal("'#target'".into()).render(), "'#target'");
    }

    #[test]
    fn test_scope_renders_unquoted() {
        let value = OptionValue::from(JsScope::quick_scope("alert('x');"));
        assert_eq!(value.render(), "function() {\nalert('x');\n}");
    }

    #[test]
    fn test_from_json_scalars() {
        assert!(matches!(OptionValue::from_json("a", &json!(true)), Ok(OptionValue::Bool(true))));
        assert!(matches!(OptionValue::from_json("a", &json!(7)), Ok(OptionValue::Int(7))));
        assert!(matches!(OptionValue::from_json("a", &json!(i64::MAX)), Ok(OptionValue::Int(i64::MAX))));
        assert!(matches!(OptionValue::from_json("a", &json!(i64::MIN)), Ok(OptionValue::Int(i64::MIN))));
        assert!(matches!(OptionValue::from_json("a", &json!(1.5)), Ok(OptionValue::Float(f)) if f == 1.5));
        assert!(matches!(OptionValue::from_json("a", &json!("x")), Ok(OptionValue::String(s)) if s == "x"));
    }

    #[test]
    fn test_from_json_tagged_objects() {
        let literal = OptionValue::from_json("of", &json!({"$literal": "window"})).unwrap();
        assert_eq!(literal.render(), "window");

        let scope = OptionValue::from_json(
            "change",
            &json!({"$function": "console.log(ui.value);", "$args": ["event", "ui"]}),
        )
        .unwrap();
        assert_eq!(scope.render(), "function(event, ui) {\nconsole.log(ui.value);\n}");
    }

    #[test]
    fn test_from_json_fails_fast() {
        for bad in [
            json!(null),
            json!([1, 2]),
            json!({"nested": 1}),
            json!({"$literal": 3}),
            json!({"$function": "x", "$args": [1]}),
            json!({"$literal": "x", "extra": true}),
            json!(u64::MAX),
            json!(i64::MAX as u64 + 1),
        ] {
            let err = OptionValue::from_json("key", &bad).unwrap_err();
            assert!(
                matches!(&err, Error::UnsupportedOptionValue { key, .. } if key == "key"),
                "{bad} should be rejected, got {err}"
            );
        }
    }
}
