//! wiquery - server-side jQuery statement building
//!
//! Re-exports [`wiquery_core`]; the workspace's cross-module integration
//! tests live alongside this crate.

pub use wiquery_core::*;
