//! Selective HTML parsing into an arena DOM.
//!
//! Documents are parsed with html5ever's full tree builder so that `<area>`
//! elements land where a browser would put them, but only the attributes of
//! the requested tags are materialized.

mod arena;
mod tree_sink;

pub use arena::{ArenaDom, ArenaNodeId};

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;

use tree_sink::StrainingSink;

/// Parse `html`, keeping attributes only for elements named in `keep`.
///
/// Scripting is off so that `<noscript>` content is parsed as markup rather
/// than raw text.
pub fn parse_strained(html: &str, keep: &'static [&'static str]) -> ArenaDom {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    parse_document(StrainingSink::new(keep), opts)
        .one(html)
        .into_dom()
}
