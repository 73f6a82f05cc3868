//! Small helpers shared across modules

pub mod serde_helpers;
pub mod text;

pub use text::{is_blank, quote_single};
