//! Event-recording handler.
//!
//! [`TraceHandler`] captures the structural event stream instead of
//! rendering it, which makes it both the debugging surface behind the CLI
//! `outline` command and the assertion vehicle for tests. It implements no
//! substitution members, so inline filters leave its feed text untouched.

use std::fmt::Write;

use crate::handler::{Handler, Region};

/// One structural call observed during a document render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A region was started.
    Start(Region),
    /// Block text was fed to the most recently started region.
    Feed(String),
    /// A region was ended.
    End(Region),
}

/// Handler that records every structural call in document order.
///
/// Intercepts the dispatch seam itself ([`Handler::start`]/[`Handler::end`])
/// rather than the per-region members, so it observes all regions without
/// naming each one.
///
/// # Example
///
/// ```
/// use sm_markup::{TextParser, TraceHandler};
///
/// let mut handler = TraceHandler::new();
/// TextParser::new().parse("Overview\n\n- first\n\n- second", &mut handler);
/// println!("{}", handler.outline());
/// ```
#[derive(Debug, Default)]
pub struct TraceHandler {
    events: Vec<Event>,
}

impl TraceHandler {
    /// A trace handler with no recorded events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded events, in call order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Consume the handler, returning the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    /// Render the event stream as an indented outline, one region or feed
    /// per line.
    #[must_use]
    pub fn outline(&self) -> String {
        let mut out = String::new();
        let mut depth = 0usize;
        for event in &self.events {
            match event {
                Event::Start(region) => {
                    indent(&mut out, depth);
                    out.push_str(region.name());
                    out.push('\n');
                    depth += 1;
                }
                Event::Feed(text) => {
                    indent(&mut out, depth);
                    let _ = writeln!(out, "{text:?}");
                }
                Event::End(_) => depth = depth.saturating_sub(1),
            }
        }
        out
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

impl Handler for TraceHandler {
    fn start(&mut self, region: Region) {
        self.events.push(Event::Start(region));
    }

    fn end(&mut self, region: Region) {
        self.events.push(Event::End(region));
    }

    fn feed(&mut self, text: &str) {
        self.events.push(Event::Feed(text.to_owned()));
    }
}
