//! Ordered rule evaluation.

use tracing::trace;

use crate::handler::Handler;
use crate::rules::{HeadingRule, ListItemRule, ListRule, ParagraphRule, Rule, TitleRule};

/// An ordered sequence of rules; order encodes priority.
///
/// For each block, rules are evaluated front to back. A rule whose
/// condition holds gets to run its action; the first action returning
/// `true` ends evaluation for that block. The chain must end with an
/// unconditional terminal rule ([`ParagraphRule`] in the standard chain) so
/// every block is handled by construction.
///
/// A chain holds the document-scoped state of its rules, so one fresh chain
/// is constructed per document render.
///
/// # Example
///
/// ```
/// use sm_markup::{HtmlHandler, RuleChain};
///
/// let mut chain = RuleChain::standard();
/// let mut handler = HtmlHandler::new();
/// chain.process("A lone block, first in its document.", &mut handler);
/// chain.finish(&mut handler);
/// ```
#[derive(Default)]
pub struct RuleChain {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleChain {
    /// An empty chain. Useful only as a base for [`with_rule`](Self::with_rule);
    /// an empty chain handles nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard chain: list boundary detection, list item, title,
    /// heading, paragraph.
    ///
    /// The ordering is load-bearing. The list rule comes first — it is
    /// non-terminal, so it observes every block and can open or close a
    /// list region before the block's own renderer runs. The list item rule
    /// must precede title and heading, whose shape tests would otherwise
    /// claim `-`-prefixed blocks. The paragraph catch-all is last so every
    /// block is handled.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_rule(ListRule::new())
            .with_rule(ListItemRule)
            .with_rule(TitleRule::new())
            .with_rule(HeadingRule)
            .with_rule(ParagraphRule)
    }

    /// Append a rule at the lowest priority position.
    #[must_use]
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Number of rules in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the chain has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate the chain against one block.
    ///
    /// Returns `true` when a terminal rule handled the block. `false` means
    /// the chain is misconfigured (no unconditional catch-all at the end);
    /// that is a construction defect, not a runtime condition, so it only
    /// trips a debug assertion.
    pub fn process(&mut self, block: &str, handler: &mut dyn Handler) -> bool {
        for (idx, rule) in self.rules.iter_mut().enumerate() {
            if rule.condition(block) {
                trace!(rule = idx, "rule condition matched");
                if rule.action(block, handler) {
                    return true;
                }
            }
        }
        debug_assert!(false, "no terminal rule fired; chain lacks a catch-all");
        false
    }

    /// Run every rule's end-of-document hook, in chain order.
    ///
    /// Call exactly once, after the last block of the document.
    pub fn finish(&mut self, handler: &mut dyn Handler) {
        for rule in &mut self.rules {
            rule.finish(handler);
        }
    }
}
