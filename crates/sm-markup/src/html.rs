//! HTML handler: the stock rendering target.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};
use regex::Captures;

use crate::handler::Handler;

/// Handler rendering the structural event stream as an HTML page.
///
/// Output accumulates in an internal buffer; retrieve it with
/// [`html`](Self::html) or [`into_html`](Self::into_html) after the render.
/// Feed text is emitted as-is (it may contain markup produced by the
/// substitution members); substitution payloads themselves are escaped.
///
/// # Example
///
/// ```
/// use sm_markup::{HtmlHandler, TextParser};
///
/// let text = "Welcome\n\nA first paragraph, padded well past the seventy byte ceiling so it stays prose.";
/// let mut handler = HtmlHandler::new().with_title("Notes");
/// TextParser::new().parse(text, &mut handler);
/// let html = handler.into_html();
/// assert!(html.starts_with("<html><head><title>Notes</title>"));
/// assert!(html.contains("<h1>Welcome</h1>"));
/// assert!(html.contains("<p>A first paragraph"));
/// ```
#[derive(Debug)]
pub struct HtmlHandler {
    out: String,
    title: String,
}

impl HtmlHandler {
    /// A handler with the placeholder page title.
    #[must_use]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
            title: "...".to_owned(),
        }
    }

    /// Set the page title used in the document head.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// The HTML rendered so far.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.out
    }

    /// Consume the handler, returning the rendered HTML.
    #[must_use]
    pub fn into_html(self) -> String {
        self.out
    }
}

impl Default for HtmlHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for HtmlHandler {
    fn start_document(&mut self) {
        let _ = write!(
            self.out,
            "<html><head><title>{}</title></head><body>",
            encode_text(&self.title)
        );
    }

    fn end_document(&mut self) {
        self.out.push_str("</body></html>");
    }

    fn start_title(&mut self) {
        self.out.push_str("<h1>");
    }

    fn end_title(&mut self) {
        self.out.push_str("</h1>");
    }

    fn start_heading(&mut self) {
        self.out.push_str("<h2>");
    }

    fn end_heading(&mut self) {
        self.out.push_str("</h2>");
    }

    fn start_list(&mut self) {
        self.out.push_str("<ul>");
    }

    fn end_list(&mut self) {
        self.out.push_str("</ul>");
    }

    fn start_listitem(&mut self) {
        self.out.push_str("<li>");
    }

    fn end_listitem(&mut self) {
        self.out.push_str("</li>");
    }

    fn start_paragraph(&mut self) {
        self.out.push_str("<p>");
    }

    fn end_paragraph(&mut self) {
        self.out.push_str("</p>");
    }

    fn feed(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn sub_url(&mut self, caps: &Captures<'_>) -> Option<String> {
        let url = &caps[1];
        Some(format!(
            r#"<a href="{}">{}</a>"#,
            encode_double_quoted_attribute(url),
            encode_text(url)
        ))
    }

    fn sub_mail(&mut self, caps: &Captures<'_>) -> Option<String> {
        let addr = &caps[1];
        Some(format!(
            r#"<a href="mailto:{}">{}</a>"#,
            encode_double_quoted_attribute(addr),
            encode_text(addr)
        ))
    }

    fn sub_emphasis(&mut self, caps: &Captures<'_>) -> Option<String> {
        Some(format!("<em>{}</em>", encode_text(&caps[1])))
    }
}
