//! Simplemark CLI - plain-text to markup rendering.
//!
//! Provides commands for:
//! - `render`: Render a plain-text document to HTML
//! - `outline`: Print the structural events the rule engine produces

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{OutlineArgs, RenderArgs};
use output::Output;

/// Simplemark - text in, markup out.
#[derive(Parser)]
#[command(name = "simplemark", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a plain-text document to HTML.
    Render(RenderArgs),
    /// Print the structural event stream for a document.
    Outline(OutlineArgs),
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let output = Output::new();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Outline(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
