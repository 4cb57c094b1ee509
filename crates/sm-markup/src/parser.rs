//! Document parser: the top-level driver.

use tracing::debug;

use crate::block::blocks;
use crate::chain::RuleChain;
use crate::handler::{Handler, Region};
use crate::inline::InlineFilters;

/// Drives one document render: segments the text into blocks, runs each
/// block through the inline filters and then the rule chain, and brackets
/// the whole run in document start/end calls on the handler.
///
/// A parser is consumed by [`parse`](Self::parse) because the chain it owns
/// carries document-scoped rule state; constructing a fresh parser per
/// document is what makes concurrent renders safe (each unit of work is one
/// parser plus one handler, created and discarded together).
///
/// # Example
///
/// ```
/// use sm_markup::{HtmlHandler, TextParser};
///
/// let text = "Shopping\n\nThings to buy today:\n\n- milk\n\n- rye bread";
/// let mut handler = HtmlHandler::new();
/// TextParser::new().parse(text, &mut handler);
/// assert_eq!(
///     handler.html(),
///     "<html><head><title>...</title></head><body>\
///      <h1>Shopping</h1>\
///      <p>Things to buy today:</p>\
///      <ul><li>milk</li><li>rye bread</li></ul>\
///      </body></html>"
/// );
/// ```
pub struct TextParser {
    chain: RuleChain,
    filters: InlineFilters,
}

impl TextParser {
    /// A parser with the standard rule chain and the standard inline
    /// filters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            chain: RuleChain::standard(),
            filters: InlineFilters::standard(),
        }
    }

    /// Replace the rule chain.
    #[must_use]
    pub fn with_chain(mut self, chain: RuleChain) -> Self {
        self.chain = chain;
        self
    }

    /// Replace the inline filters.
    #[must_use]
    pub fn with_filters(mut self, filters: InlineFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Render `text` through `handler`.
    ///
    /// Inline filters run over each block before classification, so rule
    /// conditions see the substituted text.
    pub fn parse(mut self, text: &str, handler: &mut dyn Handler) {
        handler.start(Region::Document);
        let mut count = 0usize;
        for block in blocks(text) {
            let fed = self.filters.apply(&block, handler);
            self.chain.process(&fed, handler);
            count += 1;
        }
        self.chain.finish(handler);
        handler.end(Region::Document);
        debug!(blocks = count, "document rendered");
    }
}

impl Default for TextParser {
    fn default() -> Self {
        Self::new()
    }
}
