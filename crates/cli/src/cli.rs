use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{init_command, merge_command, render_command};

#[derive(Parser, Debug)]
#[command(name = "wiquery")]
#[command(version, about = "Render jQuery statements for a component tree", long_about = None)]
#[command(subcommand_required = true, arg_required_else_help = true)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Wiquery {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the scripts of a JSON page description
    #[command(visible_alias = "r")]
    Render {
        /// Path to the page file
        page: String,

        /// Render as a partial Ajax update instead of a full page
        #[arg(short, long)]
        ajax: bool,

        /// Settings file (defaults to the nearest .wiquery.json)
        #[arg(short, long)]
        settings: Option<String>,
    },
    /// Merge every script under a directory into one bundle
    #[command(visible_alias = "m")]
    Merge {
        /// Directory holding the scripts
        dir: String,

        /// Strip comments and blank lines from each script
        #[arg(long)]
        minify: bool,

        /// Write the bundle here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Write a default .wiquery.json
    Init {
        /// Directory to initialize (defaults to the current one)
        #[arg(short, long)]
        cwd: Option<String>,

        /// Overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Render {
                page,
                ajax,
                settings,
            } => render_command(&page, ajax, settings.as_deref()),
            Commands::Merge {
                dir,
                minify,
                output,
            } => merge_command(&dir, minify, output.as_deref()),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
