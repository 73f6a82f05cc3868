use super::{AjaxRequestTarget, HeaderResponse};
use serde::Serialize;

/// What kind of request is being answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestMode {
    /// The whole page is rendered
    FullRender,
    /// Parts of an already loaded page are replaced in place
    AjaxUpdate,
}

/// Where a statement was placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmissionTarget {
    /// `<script>` tag written straight into the header
    InlineScript,
    /// Named, timestamp-suffixed script resource referenced from the header
    NamedResource,
    /// Appended to the Ajax response after the DOM has been patched
    AjaxDeferred,
}

/// The collaborators a single render pass writes to
///
/// The request mode follows from how the context was built and cannot
/// change afterwards.
pub struct RenderContext<'a> {
    pub(crate) header: &'a mut dyn HeaderResponse,
    pub(crate) ajax: Option<&'a mut AjaxRequestTarget>,
}

impl<'a> RenderContext<'a> {
    pub fn full_render(header: &'a mut dyn HeaderResponse) -> Self {
        Self { header, ajax: None }
    }

    pub fn ajax_update(header: &'a mut dyn HeaderResponse, target: &'a mut AjaxRequestTarget) -> Self {
        Self {
            header,
            ajax: Some(target),
        }
    }

    pub fn mode(&self) -> RequestMode {
        match self.ajax {
            Some(_) => RequestMode::AjaxUpdate,
            None => RequestMode::FullRender,
        }
    }

    pub fn header(&mut self) -> &mut dyn HeaderResponse {
        &mut *self.header
    }
}
