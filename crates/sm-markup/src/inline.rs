//! Inline substitution filters.
//!
//! Filters run over block text independently of block classification: each
//! filter pairs a compiled pattern with the handler member that produces
//! its replacement. A handler that declines a match (returns `None`, or
//! does not implement the member at all) leaves the matched text unchanged.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::handler::Handler;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(https?://[^\s<>"]+)"#).expect("invalid url regex"));

static MAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,})\b")
        .expect("invalid mail regex")
});

static EMPHASIS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^\s*][^*]*)\*").expect("invalid emphasis regex"));

/// Which handler member a filter's matches dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstitutionKind {
    /// Dispatches to [`Handler::sub_url`].
    Url,
    /// Dispatches to [`Handler::sub_mail`].
    Mail,
    /// Dispatches to [`Handler::sub_emphasis`].
    Emphasis,
}

impl SubstitutionKind {
    fn dispatch(self, handler: &mut dyn Handler, caps: &Captures<'_>) -> Option<String> {
        match self {
            Self::Url => handler.sub_url(caps),
            Self::Mail => handler.sub_mail(caps),
            Self::Emphasis => handler.sub_emphasis(caps),
        }
    }
}

/// One compiled pattern paired with its substitution kind.
///
/// Capture group 1 is the canonical payload for all stock patterns.
#[derive(Debug, Clone)]
pub struct InlineFilter {
    pattern: Regex,
    kind: SubstitutionKind,
}

impl InlineFilter {
    /// Pair a custom pattern with a substitution kind.
    #[must_use]
    pub fn new(pattern: Regex, kind: SubstitutionKind) -> Self {
        Self { pattern, kind }
    }

    /// The stock `http(s)://` address filter.
    #[must_use]
    pub fn url() -> Self {
        Self::new(URL_PATTERN.clone(), SubstitutionKind::Url)
    }

    /// The stock bare mail-address filter.
    #[must_use]
    pub fn mail() -> Self {
        Self::new(MAIL_PATTERN.clone(), SubstitutionKind::Mail)
    }

    /// The stock `*emphasis*` filter.
    #[must_use]
    pub fn emphasis() -> Self {
        Self::new(EMPHASIS_PATTERN.clone(), SubstitutionKind::Emphasis)
    }
}

/// Ordered collection of inline filters.
///
/// Filters are applied in registration order; every match of a filter's
/// pattern is offered to the handler once.
///
/// # Example
///
/// ```
/// use sm_markup::{HtmlHandler, InlineFilters};
///
/// let filters = InlineFilters::standard();
/// let mut handler = HtmlHandler::new();
/// let out = filters.apply("see https://example.org today", &mut handler);
/// assert_eq!(
///     out,
///     r#"see <a href="https://example.org">https://example.org</a> today"#
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct InlineFilters {
    filters: Vec<InlineFilter>,
}

impl InlineFilters {
    /// An empty filter set; [`apply`](Self::apply) returns its input verbatim.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The stock url, mail, and emphasis filters, in that order.
    #[must_use]
    pub fn standard() -> Self {
        Self::empty()
            .with_filter(InlineFilter::url())
            .with_filter(InlineFilter::mail())
            .with_filter(InlineFilter::emphasis())
    }

    /// Append a filter.
    #[must_use]
    pub fn with_filter(mut self, filter: InlineFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Number of registered filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether no filters are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Run every filter over `text`, dispatching matches to `handler`.
    ///
    /// A match the handler declines is spliced back in unchanged.
    #[must_use]
    pub fn apply(&self, text: &str, handler: &mut dyn Handler) -> String {
        let mut out = text.to_owned();
        for filter in &self.filters {
            out = filter
                .pattern
                .replace_all(&out, |caps: &Captures<'_>| {
                    filter
                        .kind
                        .dispatch(handler, caps)
                        .unwrap_or_else(|| caps[0].to_owned())
                })
                .into_owned();
        }
        out
    }
}
