//! wiquery-core - Server-side jQuery statement building and emission
//!
//! This crate provides functionality to:
//! - Serialize typed option maps into JavaScript object literals
//! - Build chained jQuery call expressions rooted at a component or the document
//! - Decide where generated script goes for a full page render or an Ajax update
//! - Collect the client-side resources that plugins in a component tree need
pub mod config;
pub mod emission;
pub mod error;
pub mod javascript;
pub mod merge;
pub mod options;
pub mod plugin;
pub mod types;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::{walk, Component, ComponentNode, Container, MarkupId};

// Re-export main API components
pub use config::Settings;
pub use emission::{
    AjaxRequestTarget, AjaxResponse, EmissionDecider, EmissionTarget, HeaderBuffer,
    HeaderResponse, RenderContext, RequestMode,
};
pub use javascript::{ChainableStatement, JsQuery, JsScope, JsStatement};
pub use options::{ComplexOption, OptionValue, Options, OptionsRenderer};
pub use plugin::{Plugin, RenderPass, ResourceManager, ResourceReference};
