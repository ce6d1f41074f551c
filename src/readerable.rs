//! Quick eligibility check: is this a news page worth offering a summary for?
//!
//! This module provides [`should_offer_summary`] and its two halves, a hostname
//! allow-list and a cheap "does this page carry an article" check. Neither runs
//! the extraction cascade.
//!
//! ## Example
//!
//! ```rust
//! use gistrs::{is_news_url, should_offer_summary};
//! use scraper::Html;
//!
//! let html = "<html><body><p>Short</p></body></html>";
//! let document = Html::parse_document(html);
//!
//! assert!(is_news_url("https://www.bbc.com/news/world"));
//! assert!(!should_offer_summary("https://www.bbc.com/news/world", document.root_element(), None));
//! ```

use crate::constants::{ARTICLE_INDICATORS, NEWS_SITE_PATTERNS, PARAGRAPH};
use crate::dom_utils::{text_length, TreeNode};
use tracing::trace;
use url::Url;

/// Options for the article-content check.
///
/// ## Example
///
/// ```rust
/// use gistrs::{has_article_content, ReaderableOptions};
/// use scraper::Html;
///
/// let document = Html::parse_document("<html><body><article>Brief</article></body></html>");
/// let options = ReaderableOptions {
///     min_indicator_chars: 3,
///     ..ReaderableOptions::default()
/// };
///
/// assert!(has_article_content(document.root_element(), Some(options)));
/// ```
#[derive(Debug, Clone)]
pub struct ReaderableOptions {
    /// An article indicator counts when its text is longer than this.
    ///
    /// Default: `500`
    pub min_indicator_chars: usize,

    /// A paragraph counts as long when its text is longer than this.
    ///
    /// Default: `100`
    pub min_paragraph_chars: usize,

    /// Number of long paragraphs that make a page look like an article.
    ///
    /// Default: `3`
    pub min_long_paragraphs: usize,
}

impl Default for ReaderableOptions {
    fn default() -> Self {
        Self {
            min_indicator_chars: 500,
            min_paragraph_chars: 100,
            min_long_paragraphs: 3,
        }
    }
}

/// Whether `hostname` belongs to a known news site.
///
/// Matching is a case-insensitive substring test against the allow-list, so
/// subdomains such as `edition.cnn.com` qualify.
pub fn is_news_site(hostname: &str) -> bool {
    let hostname = hostname.to_lowercase();
    NEWS_SITE_PATTERNS
        .iter()
        .any(|pattern| hostname.contains(pattern))
}

/// [`is_news_site`] applied to the host of `url`; unparseable URLs are not news.
pub fn is_news_url(url: &str) -> bool {
    Url::parse(url)
        .ok()
        .and_then(|url| url.host_str().map(is_news_site))
        .unwrap_or(false)
}

/// Whether the document looks like it carries an article.
///
/// True when the first match of any article indicator has enough text, or
/// when enough individual paragraphs are long.
pub fn has_article_content<N: TreeNode>(root: N, options: Option<ReaderableOptions>) -> bool {
    let options = options.unwrap_or_default();

    for matcher in ARTICLE_INDICATORS.iter() {
        if let Some(node) = root.find_first(matcher) {
            let length = text_length(&node.visible_text());
            if length > options.min_indicator_chars {
                trace!(?matcher, length, "article indicator found");
                return true;
            }
        }
    }

    let long_paragraphs = root
        .find_all(&PARAGRAPH)
        .iter()
        .filter(|paragraph| text_length(&paragraph.visible_text()) > options.min_paragraph_chars)
        .count();

    long_paragraphs >= options.min_long_paragraphs
}

/// Both checks: a news host and article-shaped content.
pub fn should_offer_summary<N: TreeNode>(
    url: &str,
    root: N,
    options: Option<ReaderableOptions>,
) -> bool {
    is_news_url(url) && has_article_content(root, options)
}
