//! Reads HTML from stdin and prints the extracted article as JSON.
//!
//! Usage: `gist [--summarize [BASE_URL]] < page.html`
//!
//! With `--summarize` the text is sent to the summarization service instead
//! and `{"summary": ...}` is printed. Set `RUST_LOG=gistrs=debug` to see
//! which strategy won.

use gistrs::{
    summarize_document, Extractor, GistError, HttpSummarizer, SummarizeResponse,
    SummarizerConfig, DEFAULT_ENDPOINT,
};
use scraper::Html;
use std::io::{self, Read};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

enum Mode {
    Extract,
    Summarize(String),
}

fn parse_args() -> Mode {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("--summarize") => {
            Mode::Summarize(args.next().unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()))
        }
        _ => Mode::Extract,
    }
}

fn run(mode: Mode) -> gistrs::Result<String> {
    let mut html = String::new();
    io::stdin()
        .read_to_string(&mut html)
        .map_err(|e| GistError::Other(format!("failed to read stdin: {e}")))?;

    let document = Html::parse_document(&html);
    let extractor = Extractor::default();

    match mode {
        Mode::Extract => {
            let extraction = extractor.extract_detailed(document.root_element());
            Ok(serde_json::to_string(&extraction)?)
        }
        Mode::Summarize(base_url) => {
            let summarizer = HttpSummarizer::new(SummarizerConfig {
                base_url,
                ..SummarizerConfig::default()
            })?;
            let summary = summarize_document(&extractor, document.root_element(), &summarizer)?;
            Ok(serde_json::to_string(&SummarizeResponse { summary })?)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run(parse_args()) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
