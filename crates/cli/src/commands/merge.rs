use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};
use walkdir::WalkDir;
use wiquery_core::merge::{CommentStrippingMinifier, FsResourceLocator, ScriptMerger};
use wiquery_core::ResourceReference;

pub fn merge_command(dir: &str, minify: bool, output: Option<&str>) -> Result<()> {
    let root = PathBuf::from(dir);
    if !root.is_dir() {
        bail!("{} is not a directory", root.display());
    }

    let references = collect_scripts(&root)?;
    if references.is_empty() {
        bail!("No .js files found under {}", root.display());
    }
    debug!("Merging {} scripts from {}", references.len(), root.display());

    let mut merger = ScriptMerger::new(Arc::new(FsResourceLocator::new(&root)));
    if minify {
        merger = merger.with_minifier(Arc::new(CommentStrippingMinifier));
    }
    let bundle = merger.assemble(&references);

    eprintln!("{}", ScriptMerger::merged_name(&references));
    match output {
        Some(path) => {
            fs::write(path, bundle.as_bytes())
                .with_context(|| format!("Failed to write bundle to {path}"))?;
            info!("Wrote {} bytes to {}", bundle.len(), path);
        }
        None => print!("{bundle}"),
    }

    Ok(())
}

/// Every `.js` file under `root`, sorted by path, as references relative to it
fn collect_scripts(root: &Path) -> Result<Vec<ResourceReference>> {
    let mut references = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "js") {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        let scope = match relative.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_string_lossy().replace('\\', "/"),
            _ => ".".to_string(),
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        references.push(ResourceReference::javascript(scope, name));
    }
    Ok(references)
}
