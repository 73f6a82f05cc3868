use anyhow::{Context, Result};
use serde::Serialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};
use wiquery_core::emission::HeaderItem;
use wiquery_core::merge::{CommentStrippingMinifier, FsResourceLocator, ScriptMerger};
use wiquery_core::{
    AjaxRequestTarget, AjaxResponse, EmissionDecider, HeaderBuffer, RenderContext, RenderPass,
    Settings,
};

use crate::page::PageNode;

/// What `render --ajax` prints
#[derive(Debug, Serialize)]
struct AjaxOutput<'a> {
    header: &'a [HeaderItem],
    response: AjaxResponse,
}

pub fn render_command(page: &str, ajax: bool, settings: Option<&str>) -> Result<()> {
    let page_path = PathBuf::from(page);
    let settings = load_settings(&page_path, settings)?;
    debug!("Rendering {} with {:?}", page_path.display(), settings);

    let page = PageNode::load(&page_path)?;
    let tree = page.to_component_tree()?;

    let mut decider = EmissionDecider::new(settings.clone());
    if settings.minified_resources {
        decider = decider.with_minifier(Arc::new(CommentStrippingMinifier));
    }
    let mut pass = RenderPass::new(decider);
    // Header paths are served from `resources/` next to the page
    let resources_dir = page_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
        .join("resources");
    let merger = settings
        .enable_resources_merging
        .then(|| Arc::new(ScriptMerger::new(Arc::new(FsResourceLocator::new(&resources_dir)))));
    if let Some(merger) = &merger {
        pass = pass.with_merger(merger.clone());
    }

    let mut header = HeaderBuffer::new();
    if ajax {
        let mut target = AjaxRequestTarget::new();
        page.add_updates(&mut target);
        let summary = {
            let mut ctx = RenderContext::ajax_update(&mut header, &mut target);
            pass.render(&tree, &mut ctx)
        };
        debug!("Render summary: {:?}", summary);

        if let Some(merger) = &merger {
            write_bundles(&header, merger, &resources_dir)?;
        }

        let output = AjaxOutput {
            header: header.items(),
            response: target.respond(),
        };
        let json = serde_json::to_string_pretty(&output).context("Failed to serialize Ajax response")?;
        println!("{json}");
    } else {
        let summary = {
            let mut ctx = RenderContext::full_render(&mut header);
            pass.render(&tree, &mut ctx)
        };
        debug!("Render summary: {:?}", summary);
        if let Some(merger) = &merger {
            write_bundles(&header, merger, &resources_dir)?;
        }
        println!("{}", header.to_html());
    }

    Ok(())
}

/// Write every merged bundle the header references under `resources_dir`
fn write_bundles(header: &HeaderBuffer, merger: &ScriptMerger, resources_dir: &Path) -> Result<()> {
    for item in header.items() {
        let HeaderItem::JavascriptReference { path } = item else {
            continue;
        };
        let Some(bundle) = path.rsplit_once('/').and_then(|(_, name)| merger.bundle(name)) else {
            continue;
        };

        let target = resources_dir.join(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&target, bundle.as_bytes())
            .with_context(|| format!("Failed to write merged bundle {}", target.display()))?;
        info!("Wrote merged bundle {}", target.display());
    }
    Ok(())
}

/// An explicit settings file, else the nearest one above the page, else defaults
fn load_settings(page_path: &Path, explicit: Option<&str>) -> Result<Settings> {
    if let Some(path) = explicit {
        return Settings::load_from_file(Path::new(path))
            .with_context(|| format!("Failed to load settings from {path}"));
    }

    let start = match page_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => env::current_dir().context("Failed to get current directory")?,
    };
    Settings::discover(&start).context("Failed to load discovered settings")
}
