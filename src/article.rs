//! Extraction result types.
//!
//! [`Extraction`] is the detailed view of one extraction call: the text handed
//! to the summarizer plus which strategy produced it.
//!
//! ## Example
//!
//! ```rust
//! use gistrs::{Extractor, Strategy};
//! use scraper::Html;
//!
//! let body = "<p>".to_string() + &"Long enough article sentence. ".repeat(10) + "</p>";
//! let html = format!("<html><body><article>{body}</article></body></html>");
//! let document = Html::parse_document(&html);
//!
//! let extraction = Extractor::default().extract_detailed(document.root_element());
//! assert_eq!(extraction.strategy, Some(Strategy::KnownContainer));
//! assert!(!extraction.is_failure());
//! ```

use crate::constants::EXTRACTION_FAILED;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The cascade step that produced an extraction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// A known article container matched first.
    KnownContainer,
    /// The longest qualifying block won.
    LargestBlock,
    /// Standalone paragraphs were joined.
    ParagraphSalvage,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::KnownContainer => "known_container",
            Strategy::LargestBlock => "largest_block",
            Strategy::ParagraphSalvage => "paragraph_salvage",
        };
        f.write_str(name)
    }
}

/// Outcome of one extraction call.
///
/// `text` is never empty: when every strategy fails it holds
/// [`EXTRACTION_FAILED`] and `strategy` is `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Extraction {
    /// Cleaned article text, or the failure sentinel.
    pub text: String,

    /// The strategy that produced `text`.
    pub strategy: Option<Strategy>,

    /// Length of `text` in characters.
    pub length: usize,
}

impl Extraction {
    pub(crate) fn found(text: String, strategy: Strategy) -> Self {
        let length = text.chars().count();
        Self {
            text,
            strategy: Some(strategy),
            length,
        }
    }

    pub(crate) fn failed() -> Self {
        Self {
            text: EXTRACTION_FAILED.to_string(),
            strategy: None,
            length: EXTRACTION_FAILED.chars().count(),
        }
    }

    /// Whether every strategy came up empty.
    pub fn is_failure(&self) -> bool {
        self.strategy.is_none()
    }
}
