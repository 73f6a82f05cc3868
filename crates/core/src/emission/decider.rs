//! Chooses between inline, named-resource and Ajax-deferred emission

use super::{DeferredScript, EmissionTarget, RenderContext, RequestMode};
use crate::config::Settings;
use crate::javascript::{JsScope, JsStatement};
use crate::merge::Minifier;
use crate::plugin::ResourceReference;
use crate::ui::resources;
use crate::utils::is_blank;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static LAST_GENERATED_SUFFIX: AtomicU64 = AtomicU64::new(0);

/// `wiquery-gen-<millis>`; the suffix never repeats within a process, even
/// for two names requested in the same millisecond
pub fn generated_resource_name() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();

    let mut previous = LAST_GENERATED_SUFFIX.load(Ordering::Relaxed);
    loop {
        let next = now.max(previous + 1);
        match LAST_GENERATED_SUFFIX.compare_exchange_weak(
            previous,
            next,
            Ordering::AcqRel,
            Ordering::Relaxed,
        ) {
            Ok(_) => return format!("wiquery-gen-{next}"),
            Err(actual) => previous = actual,
        }
    }
}

/// Places rendered statements in the response according to the request
/// mode and the application settings
#[derive(Clone)]
pub struct EmissionDecider {
    settings: Settings,
    minifier: Option<Arc<dyn Minifier>>,
}

impl EmissionDecider {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            minifier: None,
        }
    }

    /// Used on named resources when `minified_resources` is on
    pub fn with_minifier(mut self, minifier: Arc<dyn Minifier>) -> Self {
        self.minifier = Some(minifier);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn target_for(&self, mode: RequestMode) -> EmissionTarget {
        match mode {
            RequestMode::AjaxUpdate => EmissionTarget::AjaxDeferred,
            RequestMode::FullRender if self.settings.embed_generated_statements => {
                EmissionTarget::NamedResource
            }
            RequestMode::FullRender => EmissionTarget::InlineScript,
        }
    }

    /// The jQuery core reference that auto-import contributes
    pub fn jquery_core_reference(&self) -> ResourceReference {
        self.settings
            .jquery_core_resource
            .clone()
            .unwrap_or_else(resources::jquery_core)
            .resolved(&self.settings)
    }

    /// Emit `statement` into `ctx`. Returns where it went, or `None` when the
    /// statement rendered blank, in which case nothing at all was touched.
    pub fn emit(&self, statement: &JsStatement, ctx: &mut RenderContext<'_>) -> Option<EmissionTarget> {
        let js = statement.render();
        if is_blank(&js) {
            tracing::trace!("Skipping emission of a blank statement");
            return None;
        }

        if self.settings.auto_import_jquery_resource {
            ctx.header
                .render_javascript_reference(&self.jquery_core_reference());
        }

        let target = self.target_for(ctx.mode());
        tracing::debug!("Emitting {} bytes of generated script as {:?}", js.len(), target);

        match target {
            EmissionTarget::InlineScript => {
                let markup = format!(
                    "<script type=\"text/javascript\">{}</script>",
                    on_dom_ready(&js)
                );
                ctx.header.render_string(&markup);
            }
            EmissionTarget::NamedResource => {
                let content = self.generated_code(on_dom_ready(&js));
                ctx.header
                    .render_javascript(&content, &generated_resource_name());
            }
            EmissionTarget::AjaxDeferred => {
                // The DOM is already live, so no ready handler; the listener
                // runs after the component markup has been written.
                if let Some(ajax) = ctx.ajax.as_mut() {
                    ajax.add_listener(Box::new(DeferredScript::new(js)));
                }
            }
        }

        Some(target)
    }

    fn generated_code(&self, code: String) -> String {
        match (&self.minifier, self.settings.minified_resources) {
            (Some(minifier), true) => match minifier.minify(&code) {
                Ok(minified) => minified,
                Err(e) => {
                    tracing::warn!("Minifier failed on generated statements, keeping source: {e}");
                    code
                }
            },
            _ => code,
        }
    }
}

impl fmt::Debug for EmissionDecider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmissionDecider")
            .field("settings", &self.settings)
            .field("minifier", &self.minifier.is_some())
            .finish()
    }
}

fn on_dom_ready(js: &str) -> String {
    JsStatement::for_document()
        .ready(&JsScope::quick_scope(js))
        .render()
}
