use std::fmt::Debug;

/// An option value that knows how to render itself, usually as a nested
/// `{...}` object or a bespoke token
pub trait ComplexOption: Debug + Send + Sync {
    fn javascript_option(&self) -> String;
}
