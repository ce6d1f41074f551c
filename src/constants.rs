//! Selector tables, thresholds and compiled regex patterns.
//!
//! Everything the extraction heuristics match against lives here as data so the
//! lists can be extended and tested without touching traversal code.

use crate::dom_utils::Matcher;
use once_cell::sync::Lazy;
use regex::Regex;

/// Returned when no strategy yields usable content.
pub const EXTRACTION_FAILED: &str = "Could not extract meaningful content.";

/// Strategy 1 accepts a container whose text is longer than this.
pub const MIN_CONTAINER_CHARS: usize = 200;

/// Strategy 2 accepts a block whose text is longer than this.
pub const MIN_BLOCK_CHARS: usize = 300;

/// Strategy 2 requires at least this many paragraph descendants.
pub const MIN_BLOCK_PARAGRAPHS: usize = 2;

/// Strategy 3 keeps a paragraph whose text is longer than this.
pub const MIN_PARAGRAPH_CHARS: usize = 50;

/// Callers refuse to summarize extractions shorter than this.
pub const MIN_SUMMARY_CHARS: usize = 50;

/// Known article containers, most trustworthy first.
pub static CONTAINER_SELECTORS: [Matcher; 10] = [
    Matcher::Tag("article"),
    Matcher::Role("main"),
    Matcher::Class("article-body"),
    Matcher::Class("story-body"),
    Matcher::Class("entry-content"),
    Matcher::Class("post-content"),
    Matcher::Class("article-content"),
    Matcher::Class("main-content"),
    Matcher::Class("content"),
    Matcher::Tag("main"),
];

/// Elements enumerated as candidate blocks.
pub static BLOCK_CANDIDATES: Matcher =
    Matcher::AnyOf(&[Matcher::Tag("div"), Matcher::Tag("section"), Matcher::Tag("article")]);

pub static PARAGRAPH: Matcher = Matcher::Tag("p");

pub static NAVIGATION: Matcher = Matcher::Tag("nav");

/// Ancestors that disqualify a salvaged paragraph.
pub static CHROME_ANCESTORS: Matcher = Matcher::AnyOf(&[
    Matcher::Tag("nav"),
    Matcher::Tag("header"),
    Matcher::Tag("footer"),
    Matcher::Tag("aside"),
    Matcher::ClassContains("nav"),
    Matcher::ClassContains("menu"),
    Matcher::IdContains("nav"),
    Matcher::IdContains("menu"),
]);

/// Indicators the eligibility gate looks for substantial article regions.
pub static ARTICLE_INDICATORS: [Matcher; 8] = [
    Matcher::Tag("article"),
    Matcher::Class("article"),
    Matcher::Role("article"),
    Matcher::Class("story"),
    Matcher::Class("post"),
    Matcher::Class("entry"),
    Matcher::Descendant(&Matcher::Class("content"), &Matcher::Tag("article")),
    Matcher::Descendant(&Matcher::Tag("main"), &Matcher::Tag("article")),
];

/// Hostname fragments of sites where summaries are offered.
pub const NEWS_SITE_PATTERNS: &[&str] = &[
    // Major outlets
    "reuters.com",
    "bbc.com",
    "cnn.com",
    "nytimes.com",
    "washingtonpost.com",
    "theguardian.com",
    "wsj.com",
    "bloomberg.com",
    "ap.org",
    "npr.org",
    "reuters.co.uk",
    "news.google.com",
    "abcnews.go.com",
    "cbsnews.com",
    "nbcnews.com",
    "foxnews.com",
    "usatoday.com",
    "latimes.com",
    "chicagotribune.com",
    "nydailynews.com",
    "nypost.com",
    // Tech
    "techcrunch.com",
    "theverge.com",
    "wired.com",
    "arstechnica.com",
    "engadget.com",
    "gizmodo.com",
    "mashable.com",
    // Business
    "cnbc.com",
    "marketwatch.com",
    "fortune.com",
    "businessinsider.com",
    "forbes.com",
    "economist.com",
    "ft.com",
    // International
    "aljazeera.com",
    "dw.com",
    "euronews.com",
    "france24.com",
];

/// Compiled regex patterns used by the extraction heuristics.
pub struct RegexPatterns {
    /// Class tokens marking non-content blocks.
    pub noise_class: Regex,
    /// `noise_class` plus ad and promo markers, used on paragraph parents.
    pub noise_class_extended: Regex,
    /// Paragraphs opening with a site-chrome label.
    pub chrome_label: Regex,
    pub excess_newlines: Regex,
    pub tab: Regex,
    pub space_run: Regex,
}

pub static REGEXPS: Lazy<RegexPatterns> = Lazy::new(|| RegexPatterns {
    noise_class: Regex::new(r"(?i)nav|menu|sidebar|footer|header").unwrap(),
    noise_class_extended: Regex::new(r"(?i)nav|menu|sidebar|footer|header|ad|promo").unwrap(),
    chrome_label: Regex::new(r"(?i)^(Home|About|Contact|Login|Sign up|Subscribe|Follow|Share)")
        .unwrap(),
    excess_newlines: Regex::new(r"\n\s*\n\s*\n").unwrap(),
    tab: Regex::new(r"\t").unwrap(),
    space_run: Regex::new(r" {2,}").unwrap(),
});

/// Promotional and legal filler stripped from accepted text, as
/// `(pattern, replacement)` rows applied in order.
pub static BOILERPLATE_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        r"(?i)Sign up here\.?",
        r"(?i)Subscribe.*?newsletter",
        r"(?i)Follow us on",
        r"(?i)Share this article",
        r"(?i)Read more:",
        r"(?i)Related articles?:",
        r"(?i)Advertisement",
        r"(?im)© [0-9]{4}.*$",
    ]
    .iter()
    .map(|pattern| (Regex::new(pattern).unwrap(), ""))
    .collect()
});
