//! Handler contract: the pluggable rendering surface.
//!
//! The rule engine never emits markup itself. It reports *structure* — region
//! starts, region ends, block text — and a [`Handler`] turns that structure
//! into a concrete output format.

use regex::Captures;

/// Structural region kinds emitted by the rule engine.
///
/// Every region is bounded by a matched start/end pair on the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// The whole document; started before the first block, ended after the last.
    Document,
    /// The first block of a document, when heading-shaped.
    Title,
    /// A single-line block of at most 70 bytes not ending in a colon.
    Heading,
    /// A contiguous run of list items.
    List,
    /// One `-`-prefixed block inside a list.
    ListItem,
    /// The catch-all block category.
    Paragraph,
}

impl Region {
    /// Lowercase wire name of the region (`"listitem"`, not `"list_item"`).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Title => "title",
            Self::Heading => "heading",
            Self::List => "list",
            Self::ListItem => "listitem",
            Self::Paragraph => "paragraph",
        }
    }
}

/// Rendering sink receiving structural and substitution callbacks.
///
/// One handler instance is bound per document render. Every member has a
/// default no-op body: a concrete handler implements only the regions and
/// substitutions it cares to render, and everything else is silently
/// skipped. Calls arrive in document order with balanced start/end pairs
/// per region.
///
/// The [`start`](Self::start) and [`end`](Self::end) provided methods are
/// the dispatch seam: rules address regions by [`Region`] tag and the
/// default bodies route to the matching per-region member.
///
/// # Thread Safety
///
/// Handlers implement `Send` only (not `Sync`) since each document render
/// gets its own handler instance.
///
/// # Example
///
/// ```
/// use sm_markup::{Handler, Region};
///
/// #[derive(Default)]
/// struct HeadingCounter {
///     headings: usize,
/// }
///
/// impl Handler for HeadingCounter {
///     fn start_heading(&mut self) {
///         self.headings += 1;
///     }
/// }
///
/// let mut counter = HeadingCounter::default();
/// counter.start(Region::Heading);
/// counter.start(Region::Paragraph); // no member, silently skipped
/// assert_eq!(counter.headings, 1);
/// ```
pub trait Handler: Send {
    /// Opening of the whole document.
    fn start_document(&mut self) {}
    /// Closing of the whole document.
    fn end_document(&mut self) {}

    /// Opening of the document title region.
    fn start_title(&mut self) {}
    /// Closing of the document title region.
    fn end_title(&mut self) {}

    /// Opening of a heading region.
    fn start_heading(&mut self) {}
    /// Closing of a heading region.
    fn end_heading(&mut self) {}

    /// Opening of a list region (wraps a run of list items).
    fn start_list(&mut self) {}
    /// Closing of a list region.
    fn end_list(&mut self) {}

    /// Opening of a single list item.
    fn start_listitem(&mut self) {}
    /// Closing of a single list item.
    fn end_listitem(&mut self) {}

    /// Opening of a paragraph region.
    fn start_paragraph(&mut self) {}
    /// Closing of a paragraph region.
    fn end_paragraph(&mut self) {}

    /// Receive the text of the block whose region was most recently started.
    ///
    /// The text has already passed inline substitution, so it may contain
    /// markup produced by the `sub_*` members.
    fn feed(&mut self, _text: &str) {}

    /// Replacement for one URL match; capture group 1 is the address.
    ///
    /// Returning `None` leaves the matched text unchanged.
    fn sub_url(&mut self, _caps: &Captures<'_>) -> Option<String> {
        None
    }

    /// Replacement for one mail-address match; capture group 1 is the address.
    ///
    /// Returning `None` leaves the matched text unchanged.
    fn sub_mail(&mut self, _caps: &Captures<'_>) -> Option<String> {
        None
    }

    /// Replacement for one `*emphasis*` match; capture group 1 is the
    /// emphasized text.
    ///
    /// Returning `None` leaves the matched text unchanged.
    fn sub_emphasis(&mut self, _caps: &Captures<'_>) -> Option<String> {
        None
    }

    /// Dispatch a region start to the matching `start_*` member.
    fn start(&mut self, region: Region) {
        match region {
            Region::Document => self.start_document(),
            Region::Title => self.start_title(),
            Region::Heading => self.start_heading(),
            Region::List => self.start_list(),
            Region::ListItem => self.start_listitem(),
            Region::Paragraph => self.start_paragraph(),
        }
    }

    /// Dispatch a region end to the matching `end_*` member.
    fn end(&mut self, region: Region) {
        match region {
            Region::Document => self.end_document(),
            Region::Title => self.end_title(),
            Region::Heading => self.end_heading(),
            Region::List => self.end_list(),
            Region::ListItem => self.end_listitem(),
            Region::Paragraph => self.end_paragraph(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Selective {
        log: Vec<&'static str>,
    }

    impl Handler for Selective {
        fn start_heading(&mut self) {
            self.log.push("start_heading");
        }

        fn end_heading(&mut self) {
            self.log.push("end_heading");
        }

        fn feed(&mut self, _text: &str) {
            self.log.push("feed");
        }
    }

    #[test]
    fn test_region_names() {
        assert_eq!(Region::Document.name(), "document");
        assert_eq!(Region::ListItem.name(), "listitem");
        assert_eq!(Region::Paragraph.name(), "paragraph");
    }

    #[test]
    fn test_dispatch_routes_to_member() {
        let mut handler = Selective::default();
        handler.start(Region::Heading);
        handler.feed("text");
        handler.end(Region::Heading);
        assert_eq!(handler.log, vec!["start_heading", "feed", "end_heading"]);
    }

    #[test]
    fn test_missing_member_is_silent() {
        let mut handler = Selective::default();
        handler.start(Region::List);
        handler.end(Region::List);
        handler.start(Region::Document);
        assert!(handler.log.is_empty());
    }

    #[test]
    fn test_default_substitutions_decline() {
        let mut handler = Selective::default();
        let re = regex::Regex::new(r"(\w+)").unwrap();
        let caps = re.captures("word").unwrap();
        assert_eq!(handler.sub_url(&caps), None);
        assert_eq!(handler.sub_mail(&caps), None);
        assert_eq!(handler.sub_emphasis(&caps), None);
    }
}
