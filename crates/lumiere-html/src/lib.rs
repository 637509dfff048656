//! Lumière HTML parser
//!
//! html5ever front end producing a `lumiere_dom::Document`.

mod parser;

pub use parser::HtmlParser;

use lumiere_dom::Document;

/// Parse an HTML string into a Document
pub fn parse(html: &str) -> Result<Document, HtmlError> {
    HtmlParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("Failed to read HTML input: {0}")]
    Read(#[from] std::io::Error),
}
