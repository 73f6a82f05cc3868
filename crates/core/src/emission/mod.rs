//! Deciding where generated script text ends up in the response

mod ajax;
mod context;
mod decider;
mod header;

pub use ajax::{
    AjaxListener, AjaxRequestTarget, AjaxResponse, ComponentUpdate, DeferredScript,
    JavascriptResponse,
};
pub use context::{EmissionTarget, RenderContext, RequestMode};
pub use decider::{generated_resource_name, EmissionDecider};
pub use header::{HeaderBuffer, HeaderItem, HeaderResponse};
