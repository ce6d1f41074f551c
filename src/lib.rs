//! # gistrs
//!
//! Heuristic article-body extraction from noisy HTML, ready to hand to a
//! summarizer.
//!
//! ## Overview
//!
//! gistrs finds "the article" in a web page using only structure and text
//! statistics: no language understanding, no rendering. The extracted text is
//! cleaned of whitespace noise and common promotional boilerplate and then
//! handed to a summarization endpoint.
//!
//! ## Key Features
//!
//! - **Cascading Extraction**: known containers, then the longest qualifying
//!   block, then salvaged paragraphs
//! - **Boilerplate Removal**: pattern table for newsletter pitches, share
//!   prompts, ads and copyright lines
//! - **Tree Abstraction**: the heuristics run over any [`TreeNode`]
//!   implementation; `scraper` is supported out of the box
//! - **Eligibility Check**: news-site allow-list plus an article-shape check
//! - **Summarization Client**: blocking HTTP client for a `/summarize` endpoint
//!
//! ## Basic Usage
//!
//! ```rust
//! use gistrs::{extract, EXTRACTION_FAILED};
//! use scraper::Html;
//!
//! let html = format!(
//!     "<html><body><article><p>{}</p></article></body></html>",
//!     "Voters went to the polls in record numbers on Sunday. ".repeat(5)
//! );
//! let document = Html::parse_document(&html);
//!
//! let text = extract(document.root_element());
//! assert_ne!(text, EXTRACTION_FAILED);
//! ```
//!
//! ## Summarizing
//!
//! ```rust,no_run
//! use gistrs::{summarize_document, Extractor, GistError, HttpSummarizer, SummarizerConfig};
//! use scraper::Html;
//!
//! let document = Html::parse_document("<html>...</html>");
//! let summarizer = HttpSummarizer::new(SummarizerConfig::default()).unwrap();
//!
//! match summarize_document(&Extractor::default(), document.root_element(), &summarizer) {
//!     Ok(summary) => println!("{summary}"),
//!     Err(GistError::InsufficientContent { length }) => {
//!         eprintln!("only {length} characters extracted");
//!     }
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```
//!
//! ## Algorithm
//!
//! Known article containers are tried first, in a fixed priority order; the
//! first one with enough text wins even if a larger block exists elsewhere.
//! Failing that, every `div`, `section` and `article` is scored by text length
//! and paragraph count, skipping blocks that hold a `nav` or carry navigation,
//! menu, sidebar, header or footer classes, and the longest survivor wins. As
//! a last resort, individual paragraphs outside page chrome are joined
//! together. When nothing qualifies the fixed [`EXTRACTION_FAILED`] string is
//! returned, so extraction itself never fails.

mod article;
mod constants;
mod content_extractor;
mod dom_utils;
mod error;
mod extractor;
mod navigation;
mod options;
mod post_processor;
mod readerable;
mod summarizer;

// Public exports
pub use article::{Extraction, Strategy};
pub use constants::{EXTRACTION_FAILED, MIN_SUMMARY_CHARS};
pub use dom_utils::{Matcher, TreeNode};
pub use error::{GistError, Result};
pub use extractor::{extract, extract_html, Extractor};
pub use navigation::{NavigationWatcher, DEFAULT_DEBOUNCE};
pub use options::{ExtractOptions, ExtractOptionsBuilder};
pub use post_processor::{normalize_whitespace, strip_boilerplate};
pub use readerable::{
    has_article_content, is_news_site, is_news_url, should_offer_summary, ReaderableOptions,
};
pub use summarizer::{
    decode_response, summarize_document, validate_extraction, HttpSummarizer, SummarizeRequest,
    SummarizeResponse, Summarizer, SummarizerConfig, DEFAULT_ENDPOINT,
};
