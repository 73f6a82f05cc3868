//! Merged script bundles and minification

mod locator;
mod merger;
mod minify;

pub use locator::{FsResourceLocator, ResourceLocator};
pub use merger::ScriptMerger;
pub use minify::{CommentStrippingMinifier, Minifier};
