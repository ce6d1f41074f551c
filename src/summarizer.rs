//! Hand-off from extracted text to a summarization endpoint.
//!
//! The endpoint contract is a `POST /summarize` with `{"text": ...}`. A success
//! status carries `{"summary": ...}`; anything else carries `{"detail": ...}`
//! or is reported with the HTTP status text.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gistrs::{summarize_document, Extractor, HttpSummarizer, SummarizerConfig};
//! use scraper::Html;
//!
//! let html = std::fs::read_to_string("article.html")?;
//! let document = Html::parse_document(&html);
//!
//! let summarizer = HttpSummarizer::new(SummarizerConfig::default())?;
//! let summary = summarize_document(&Extractor::default(), document.root_element(), &summarizer)?;
//! println!("{summary}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::constants::{EXTRACTION_FAILED, MIN_SUMMARY_CHARS};
use crate::dom_utils::{text_length, TreeNode};
use crate::error::{GistError, Result};
use crate::extractor::Extractor;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Where the summarization service listens unless told otherwise.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";

const USER_AGENT: &str = concat!("gistrs/", env!("CARGO_PKG_VERSION"));

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
pub struct SummarizeRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

/// Connection settings for [`HttpSummarizer`].
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// Service base URL; `summarize` is resolved against it.
    ///
    /// Default: `http://127.0.0.1:8000`
    pub base_url: String,

    /// Whole-request timeout.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,

    pub user_agent: String,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ENDPOINT.to_string(),
            timeout: REQUEST_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Anything that turns article text into a summary.
pub trait Summarizer {
    fn summarize(&self, text: &str) -> Result<String>;
}

/// Blocking HTTP client for the summarization endpoint.
///
/// Uses `reqwest`'s blocking client, so it must not be called from inside an
/// async runtime.
#[derive(Debug, Clone)]
pub struct HttpSummarizer {
    client: Client,
    endpoint: Url,
}

impl HttpSummarizer {
    pub fn new(config: SummarizerConfig) -> Result<Self> {
        let endpoint = summarize_endpoint(&config.base_url)?;
        let client = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Summarizer for HttpSummarizer {
    fn summarize(&self, text: &str) -> Result<String> {
        debug!(endpoint = %self.endpoint, chars = text_length(text), "requesting summary");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&SummarizeRequest { text })
            .send()?;

        let status = response.status();
        let body = response.text()?;
        decode_response(status.as_u16(), status.canonical_reason(), &body)
    }
}

/// Resolve the `summarize` route against a base URL, keeping any base path.
fn summarize_endpoint(base_url: &str) -> Result<Url> {
    let mut base = base_url.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Url::parse(&base)
        .and_then(|url| url.join("summarize"))
        .map_err(|_| GistError::InvalidUrl(base_url.to_string()))
}

/// Turn a raw HTTP outcome into a summary or a labeled error.
pub fn decode_response(status: u16, reason: Option<&str>, body: &str) -> Result<String> {
    if (200..300).contains(&status) {
        let response: SummarizeResponse = serde_json::from_str(body)?;
        return Ok(response.summary);
    }

    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|error| error.detail)
        .map(|detail| match detail {
            Value::String(text) => text,
            other => other.to_string(),
        })
        .filter(|detail| !detail.trim().is_empty())
        .or_else(|| reason.map(str::to_string))
        .unwrap_or_else(|| "Unknown server error".to_string());

    warn!(status, %detail, "summarization endpoint returned an error");
    Err(GistError::Server { status, detail })
}

/// Reject the failure sentinel and texts too short to summarize.
pub fn validate_extraction(text: &str) -> Result<&str> {
    let length = text_length(text);
    if text == EXTRACTION_FAILED || length < MIN_SUMMARY_CHARS {
        return Err(GistError::InsufficientContent { length });
    }
    Ok(text)
}

/// Extract, validate, then summarize. Failures are returned, never retried.
pub fn summarize_document<N, S>(extractor: &Extractor, root: N, summarizer: &S) -> Result<String>
where
    N: TreeNode,
    S: Summarizer + ?Sized,
{
    let text = extractor.extract(root);
    let text = validate_extraction(&text)?;
    summarizer.summarize(text)
}
