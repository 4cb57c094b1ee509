//! Block segmentation: splitting a document into classification targets.
//!
//! A block is a maximal run of non-blank lines. Blank (whitespace-only)
//! lines separate blocks; interior line breaks are preserved.

/// Iterator over the blank-line separated blocks of a text document.
///
/// Each yielded block is trimmed of leading and trailing whitespace.
/// Runs of blank lines collapse into a single separator, and a trailing
/// run of lines with no terminating blank line still yields its block.
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    lines: std::str::Lines<'a>,
}

impl<'a> Blocks<'a> {
    /// Create a block iterator over `text`.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
        }
    }
}

impl Iterator for Blocks<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut run: Vec<&str> = Vec::new();
        for line in self.lines.by_ref() {
            if line.trim().is_empty() {
                if !run.is_empty() {
                    break;
                }
                // Leading blank lines carry no block.
            } else {
                run.push(line);
            }
        }
        if run.is_empty() {
            None
        } else {
            Some(run.join("\n").trim().to_owned())
        }
    }
}

/// Convenience constructor for [`Blocks`].
///
/// # Example
///
/// ```
/// let blocks: Vec<String> = sm_markup::blocks("one\n\ntwo\nthree").collect();
/// assert_eq!(blocks, vec!["one", "two\nthree"]);
/// ```
#[must_use]
pub fn blocks(text: &str) -> Blocks<'_> {
    Blocks::new(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<String> {
        blocks(text).collect()
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(collect("").is_empty());
        assert!(collect("\n\n\n").is_empty());
        assert!(collect("   \n\t\n").is_empty());
    }

    #[test]
    fn test_single_block() {
        assert_eq!(collect("hello"), vec!["hello"]);
    }

    #[test]
    fn test_blank_line_separates_blocks() {
        assert_eq!(collect("one\n\ntwo"), vec!["one", "two"]);
    }

    #[test]
    fn test_multi_line_block_preserves_interior_breaks() {
        assert_eq!(collect("a\nb\n\nc"), vec!["a\nb", "c"]);
    }

    #[test]
    fn test_blank_run_collapses() {
        assert_eq!(collect("one\n\n\n\ntwo"), vec!["one", "two"]);
    }

    #[test]
    fn test_whitespace_only_line_is_a_separator() {
        assert_eq!(collect("one\n   \ntwo"), vec!["one", "two"]);
    }

    #[test]
    fn test_blocks_are_trimmed() {
        assert_eq!(collect("  padded  "), vec!["padded"]);
    }

    #[test]
    fn test_no_trailing_blank_line() {
        assert_eq!(collect("one\n\ntwo\nthree"), vec!["one", "two\nthree"]);
    }

    #[test]
    fn test_leading_blank_lines_skipped() {
        assert_eq!(collect("\n\nfirst"), vec!["first"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(collect("one\r\n\r\ntwo"), vec!["one", "two"]);
    }
}
