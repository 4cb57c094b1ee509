//! Content rules: recognizing and rendering one structural category each.
//!
//! A rule does two things: decide whether a block satisfies its condition,
//! and transform the block by driving the handler. Rules are evaluated in
//! priority order by a [`RuleChain`](crate::RuleChain); an action returning
//! `true` terminates evaluation for the current block.
//!
//! Two rules carry state scoped to a single document render: [`TitleRule`]
//! spends a one-shot flag on its first condition check, and [`ListRule`]
//! tracks whether the document is currently inside a run of list items.
//! Because of that, rule instances must not be reused across documents.

use crate::handler::{Handler, Region};

/// A (condition, action) pair recognizing one structural category.
///
/// # Thread Safety
///
/// Rules implement `Send` only (not `Sync`); each document render gets its
/// own rule instances.
pub trait Rule: Send {
    /// Does this block satisfy the rule's condition?
    ///
    /// Takes `&mut self` deliberately: some conditions consume
    /// document-scoped state ([`TitleRule`] spends its one-shot flag here),
    /// so a condition is not necessarily idempotent.
    fn condition(&mut self, block: &str) -> bool;

    /// Render the block through the handler.
    ///
    /// Returns `true` when the block is handled and chain evaluation must
    /// stop, `false` to let later rules inspect the same block.
    fn action(&mut self, block: &str, handler: &mut dyn Handler) -> bool;

    /// Called once after the last block of a document.
    ///
    /// Rules that track open regions flush them here.
    fn finish(&mut self, _handler: &mut dyn Handler) {}
}

/// Emit a block as a single region: start, feed, end.
fn emit(region: Region, block: &str, handler: &mut dyn Handler) -> bool {
    handler.start(region);
    handler.feed(block);
    handler.end(region);
    true
}

/// The heading shape test: a single line of at most 70 bytes that does not
/// end in a colon.
#[must_use]
pub fn heading_shape(block: &str) -> bool {
    !block.contains('\n') && block.len() <= 70 && !block.ends_with(':')
}

/// Whether a block is a list item: its first character is `-`.
///
/// The empty block is not a list item.
fn list_item_shape(block: &str) -> bool {
    block.starts_with('-')
}

/// Renders heading-shaped blocks as [`Region::Heading`].
#[derive(Debug, Default)]
pub struct HeadingRule;

impl Rule for HeadingRule {
    fn condition(&mut self, block: &str) -> bool {
        heading_shape(block)
    }

    fn action(&mut self, block: &str, handler: &mut dyn Handler) -> bool {
        emit(Region::Heading, block, handler)
    }
}

/// Renders the first block of a document as [`Region::Title`], provided it
/// is heading-shaped.
///
/// The one-shot flag is spent on the *first condition check* regardless of
/// its outcome: a first block that fails the shape test forfeits the title
/// for the whole document.
#[derive(Debug)]
pub struct TitleRule {
    first: bool,
}

impl TitleRule {
    /// A title rule with its one-shot flag unspent.
    #[must_use]
    pub fn new() -> Self {
        Self { first: true }
    }
}

impl Default for TitleRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for TitleRule {
    fn condition(&mut self, block: &str) -> bool {
        if !self.first {
            return false;
        }
        self.first = false;
        heading_shape(block)
    }

    fn action(&mut self, block: &str, handler: &mut dyn Handler) -> bool {
        emit(Region::Title, block, handler)
    }
}

/// Renders `-`-prefixed blocks as [`Region::ListItem`], stripping the
/// marker and surrounding whitespace from the fed text.
#[derive(Debug, Default)]
pub struct ListItemRule;

impl Rule for ListItemRule {
    fn condition(&mut self, block: &str) -> bool {
        list_item_shape(block)
    }

    fn action(&mut self, block: &str, handler: &mut dyn Handler) -> bool {
        handler.start(Region::ListItem);
        handler.feed(block[1..].trim());
        handler.end(Region::ListItem);
        true
    }
}

/// Detects runs of list items and wraps them in [`Region::List`].
///
/// The condition is unconditionally true and the action always returns
/// `false`: this rule inspects every block to find list boundaries but
/// never renders a block's content itself. Whichever rule actually renders
/// the block (typically [`ListItemRule`] or [`ParagraphRule`]) runs after
/// it in the chain.
#[derive(Debug, Default)]
pub struct ListRule {
    inside: bool,
}

impl ListRule {
    /// A list rule starting outside any list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Rule for ListRule {
    fn condition(&mut self, _block: &str) -> bool {
        true
    }

    fn action(&mut self, block: &str, handler: &mut dyn Handler) -> bool {
        if !self.inside && list_item_shape(block) {
            handler.start(Region::List);
            self.inside = true;
        } else if self.inside && !list_item_shape(block) {
            handler.end(Region::List);
            self.inside = false;
        }
        false
    }

    fn finish(&mut self, handler: &mut dyn Handler) {
        // A document may end while still inside a list; close it so the
        // handler sees balanced start/end pairs.
        if self.inside {
            handler.end(Region::List);
            self.inside = false;
        }
    }
}

/// The catch-all rule: any block that nothing else claimed is a paragraph.
#[derive(Debug, Default)]
pub struct ParagraphRule;

impl Rule for ParagraphRule {
    fn condition(&mut self, _block: &str) -> bool {
        true
    }

    fn action(&mut self, block: &str, handler: &mut dyn Handler) -> bool {
        emit(Region::Paragraph, block, handler)
    }
}
