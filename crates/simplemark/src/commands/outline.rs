//! `simplemark outline` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use sm_markup::{InlineFilters, TextParser, TraceHandler};

use crate::error::CliError;

/// Arguments for the outline command.
#[derive(Args)]
pub struct OutlineArgs {
    /// Plain-text document to inspect.
    pub file: PathBuf,
}

impl OutlineArgs {
    /// Execute the outline command: print the structural event stream the
    /// rule engine produces for a document, without rendering it.
    ///
    /// Substitutions are skipped so the outline shows the source text.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or stdout fails.
    pub fn execute(self) -> Result<(), CliError> {
        let text = std::fs::read_to_string(&self.file)?;

        let mut handler = TraceHandler::new();
        TextParser::new()
            .with_filters(InlineFilters::empty())
            .parse(&text, &mut handler);

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(handler.outline().as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_reads_and_traces() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("doc.txt");
        std::fs::write(&input, "Top\n\n- leaf\n").unwrap();

        let args = OutlineArgs { file: input };
        args.execute().unwrap();
    }

    #[test]
    fn test_outline_missing_file_errors() {
        let args = OutlineArgs {
            file: PathBuf::from("/nonexistent/doc.txt"),
        };
        assert!(args.execute().is_err());
    }
}
