//! Plugin contribution protocol
//!
//! Components and behaviours that need client-side scripts implement
//! [`Plugin`]. A [`RenderPass`] finds them in the component tree, asks each
//! one which resources it needs, renders those references, then emits the
//! combined statement of all plugins once.

mod manager;
mod render_pass;
mod resource;

pub use manager::ResourceManager;
pub use render_pass::{RenderPass, RenderSummary};
pub use resource::{ResourceKind, ResourceReference};

use crate::emission::HeaderResponse;
use crate::javascript::JsStatement;

pub trait Plugin: Send + Sync {
    /// Declare the resources this plugin needs on the client
    fn contribute(&self, resources: &mut ResourceManager);

    /// The statement to run once the plugin's markup is live
    fn statement(&self) -> JsStatement;
}

/// Observes each plugin as a render pass reaches it
pub trait PluginRenderingListener: Send + Sync {
    fn on_render(
        &self,
        plugin: &dyn Plugin,
        resources: &ResourceManager,
        header: &mut dyn HeaderResponse,
    );
}
