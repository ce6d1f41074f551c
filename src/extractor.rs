//! Main Extractor struct and extraction entry points.
//!
//! This module contains the [`Extractor`] struct which runs the extraction
//! cascade over any [`TreeNode`] document, plus convenience functions for
//! callers holding raw HTML.
//!
//! ## Example
//!
//! ```rust
//! use gistrs::{extract, Extractor, EXTRACTION_FAILED};
//! use scraper::Html;
//!
//! let document = Html::parse_document("<html><body><p>Hi</p></body></html>");
//!
//! // Nothing long enough to keep, so the failure sentinel comes back.
//! assert_eq!(extract(document.root_element()), EXTRACTION_FAILED);
//!
//! let extraction = Extractor::default().extract_detailed(document.root_element());
//! assert!(extraction.is_failure());
//! ```

use crate::{
    article::Extraction, content_extractor::grab_article, dom_utils::TreeNode,
    options::ExtractOptions,
};
use scraper::Html;
use tracing::debug;

/// The article-body extractor.
///
/// Holds only its options, so one instance can be shared across threads and
/// called any number of times. Every call is a pure read of the tree it is
/// given; calling twice on an unchanged tree returns the same text.
///
/// ## Example
///
/// ```rust
/// use gistrs::{ExtractOptions, Extractor};
/// use scraper::Html;
///
/// let html = format!(
///     "<html><body><nav><a>Home</a></nav><article><p>{}</p></article></body></html>",
///     "The council approved the new budget on Tuesday. ".repeat(6)
/// );
/// let document = Html::parse_document(&html);
///
/// let extractor = Extractor::new(ExtractOptions::default());
/// let text = extractor.extract(document.root_element());
/// assert!(text.starts_with("The council approved"));
/// assert!(!text.contains("Home"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    /// Create a new Extractor with the given options
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract the article text from the document rooted at `root`.
    ///
    /// Never fails and never returns an empty string: when nothing qualifies
    /// the result is [`EXTRACTION_FAILED`](crate::EXTRACTION_FAILED).
    pub fn extract<N: TreeNode>(&self, root: N) -> String {
        self.extract_detailed(root).text
    }

    /// Like [`extract`](Self::extract), also reporting which strategy won.
    pub fn extract_detailed<N: TreeNode>(&self, root: N) -> Extraction {
        let extraction = grab_article(root, &self.options);
        debug!(
            strategy = ?extraction.strategy,
            length = extraction.length,
            "extraction finished"
        );
        extraction
    }

    /// Parse `html` as a full document and extract from it.
    pub fn extract_html(&self, html: &str) -> Extraction {
        let document = Html::parse_document(html);
        self.extract_detailed(document.root_element())
    }
}

/// Extract with default options.
pub fn extract<N: TreeNode>(root: N) -> String {
    Extractor::default().extract(root)
}

/// Parse `html` and extract with default options.
pub fn extract_html(html: &str) -> String {
    Extractor::default().extract_html(html).text
}
