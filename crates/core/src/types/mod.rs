pub mod component;
pub mod markup_id;
pub mod tree;

// Re-export commonly used types
pub use component::{Component, Container};
pub use markup_id::MarkupId;
pub use tree::{walk, ComponentNode};
