//! Rule-based plain-text to markup rendering engine.
//!
//! This crate turns plain-text documents into a markup-rendered form by
//! splitting the text into blank-line separated blocks, classifying each
//! block against an ordered chain of content rules, and emitting
//! structural begin/end events plus inline substitutions into a pluggable
//! [`Handler`].
//!
//! # Architecture
//!
//! Two subsystems cooperate:
//!
//! - The **rule chain** ([`RuleChain`]): stateful content rules evaluated
//!   per block in priority order. Terminal rules render a block and stop
//!   the chain; the non-terminal [`ListRule`] inspects every block to
//!   wrap contiguous runs of list items in a list region.
//! - The **handler contract** ([`Handler`]): a closed set of region
//!   callbacks with default no-op bodies, so any output format can plug in
//!   by implementing only the members it renders. [`HtmlHandler`] is the
//!   stock HTML target; [`TraceHandler`] records the raw event stream.
//!
//! Inline substitutions ([`InlineFilters`]) run over block text
//! independently of classification, dispatching url, mail address, and
//! `*emphasis*` matches to the handler's `sub_*` members.
//!
//! # Example
//!
//! ```
//! use sm_markup::{HtmlHandler, TextParser};
//!
//! let text = "\
//! Water Towers
//!
//! Things seen from the train:
//!
//! - a water tower
//!
//! - another water tower";
//!
//! let mut handler = HtmlHandler::new().with_title("Water Towers");
//! TextParser::new().parse(text, &mut handler);
//! let html = handler.into_html();
//! assert!(html.contains("<h1>Water Towers</h1>"));
//! assert!(html.contains("<ul><li>a water tower</li><li>another water tower</li></ul>"));
//! ```

mod block;
mod chain;
mod handler;
mod html;
mod inline;
mod parser;
mod rules;
mod trace;

pub use block::{Blocks, blocks};
pub use chain::RuleChain;
pub use handler::{Handler, Region};
pub use html::HtmlHandler;
pub use inline::{InlineFilter, InlineFilters, SubstitutionKind};
pub use parser::TextParser;
pub use rules::{
    HeadingRule, ListItemRule, ListRule, ParagraphRule, Rule, TitleRule, heading_shape,
};
pub use trace::{Event, TraceHandler};
