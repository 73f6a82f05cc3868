use std::fmt;

/// A JavaScript function expression: `function(args) {\nbody\n}`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JsScope {
    args: Vec<String>,
    body: String,
}

impl JsScope {
    /// An argument-less function running `body`
    pub fn quick_scope(body: impl Into<String>) -> Self {
        Self {
            args: Vec::new(),
            body: body.into(),
        }
    }

    pub fn with_args<S: AsRef<str>>(args: &[S], body: impl Into<String>) -> Self {
        Self {
            args: args.iter().map(|a| a.as_ref().to_string()).collect(),
            body: body.into(),
        }
    }

    /// jQuery UI event callback, `function(event, ui)`
    pub fn ui_event(body: impl Into<String>) -> Self {
        Self::with_args(&["event", "ui"], body)
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn render(&self) -> String {
        format!("function({}) {{\n{}\n}}", self.args.join(", "), self.body)
    }
}

impl fmt::Display for JsScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
