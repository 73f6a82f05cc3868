use anyhow::{Context, Result};
use std::{env, path::PathBuf};
use tracing::info;
use wiquery_core::Settings;

pub fn init_command(cwd: Option<&str>, force: bool) -> Result<()> {
    let project_root = match cwd {
        Some(cwd) => PathBuf::from(cwd),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let project_root = project_root
        .canonicalize()
        .context("Failed to canonicalize project root")?;

    let config_path = project_root.join(".wiquery.json");
    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    Settings::default()
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    info!("Initialized wiquery in {}", project_root.display());

    println!("✅ Created config: {}", config_path.display());
    Ok(())
}
