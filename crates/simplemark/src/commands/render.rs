//! `simplemark render` command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use sm_config::{CliSettings, Config, SubstitutionsConfig};
use sm_markup::{HtmlHandler, InlineFilter, InlineFilters, TextParser};
use tracing::info;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Plain-text document to render.
    pub file: PathBuf,

    /// Write rendered HTML to this file (default: stdout).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Page title (overrides config; default: the input file stem).
    #[arg(long)]
    pub title: Option<String>,

    /// Path to configuration file (default: auto-discover simplemark.toml).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable all inline substitutions.
    #[arg(long)]
    pub no_substitutions: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, reading, or writing fails.
    pub fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            title: self.title,
            output_dir: None,
            substitutions_enabled: if self.no_substitutions {
                Some(false)
            } else {
                None
            },
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let text = std::fs::read_to_string(&self.file)?;
        let title = config
            .render
            .title
            .clone()
            .or_else(|| file_stem(&self.file))
            .unwrap_or_else(|| "...".to_owned());

        let mut handler = HtmlHandler::new().with_title(title);
        TextParser::new()
            .with_filters(filters_from_config(&config.substitutions))
            .parse(&text, &mut handler);
        let html = handler.into_html();

        match self.output {
            Some(path) => {
                let target = match &config.output_resolved.dir {
                    Some(dir) if path.is_relative() => dir.join(&path),
                    _ => path,
                };
                if let Some(parent) = target.parent()
                    && !parent.as_os_str().is_empty()
                {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&target, &html)?;
                info!(path = %target.display(), bytes = html.len(), "document written");
                output.success(&format!("Rendered {} -> {}", self.file.display(), target.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(html.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
        }

        Ok(())
    }
}

/// Build the inline filter set the config asks for.
fn filters_from_config(subs: &SubstitutionsConfig) -> InlineFilters {
    let mut filters = InlineFilters::empty();
    if subs.url {
        filters = filters.with_filter(InlineFilter::url());
    }
    if subs.mail {
        filters = filters.with_filter(InlineFilter::mail());
    }
    if subs.emphasis {
        filters = filters.with_filter(InlineFilter::emphasis());
    }
    filters
}

/// The input file's stem, for use as a default page title.
fn file_stem(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().into_owned())
}
