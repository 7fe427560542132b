//! CLI entry point for the `bicolor` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use bicolor::cli::commands;

#[derive(Parser)]
#[command(
    name = "bicolor",
    about = "bicolor CLI — red/blue colorability checks for undirected graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a graph from path tokens and check red/blue colorability
    Check {
        /// Path tokens, e.g. "a-b-c" (commas and newlines also separate tokens)
        tokens: Vec<String>,
        /// Read additional tokens from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Emit the graph as JSON for a visualization layer
    Export {
        /// Path tokens, e.g. "a-b-c"
        tokens: Vec<String>,
        /// Read additional tokens from a file
        #[arg(long)]
        file: Option<PathBuf>,
        /// Emit only nodes, no edges
        #[arg(long)]
        nodes_only: bool,
        /// Map colors to display hex values instead of symbolic names
        #[arg(long)]
        display: bool,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let result = match cli.command {
        Commands::Check { tokens, file } => commands::cmd_check(&tokens, file.as_deref(), json),
        Commands::Export {
            tokens,
            file,
            nodes_only,
            display,
            pretty,
        } => commands::cmd_export(&tokens, file.as_deref(), nodes_only, display, pretty)
            .map(|()| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            let code = match &e {
                bicolor::BicolorError::Io(_) => 2,
                bicolor::BicolorError::InvalidPath(_) => 3,
                _ => 5,
            };
            process::exit(code);
        }
    }
}
