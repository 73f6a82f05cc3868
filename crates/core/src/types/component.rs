use super::MarkupId;
use crate::plugin::Plugin;

/// Anything in the host tree that owns a stable DOM id
pub trait Component: Send + Sync {
    fn markup_id(&self) -> &MarkupId;

    /// Components that bring their own client-side behaviour return themselves here
    fn as_plugin(&self) -> Option<&dyn Plugin> {
        None
    }
}

/// A component with no behaviour of its own
#[derive(Debug, Clone)]
pub struct Container {
    id: MarkupId,
}

impl Container {
    pub fn new(id: MarkupId) -> Self {
        Self { id }
    }
}

impl Component for Container {
    fn markup_id(&self) -> &MarkupId {
        &self.id
    }
}
