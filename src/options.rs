//! Configuration options for content extraction.
//!
//! This module provides [`ExtractOptions`] and [`ExtractOptionsBuilder`]
//! for configuring the thresholds of the extraction cascade.
//!
//! ## Example
//!
//! ```rust
//! use gistrs::{ExtractOptions, Extractor};
//!
//! // Using default options
//! let extractor = Extractor::new(ExtractOptions::default());
//!
//! // Using builder for custom options
//! let options = ExtractOptions::builder()
//!     .min_block_chars(500)
//!     .strip_boilerplate(false)
//!     .build();
//!
//! let extractor = Extractor::new(options);
//! ```

use crate::constants::{
    MIN_BLOCK_CHARS, MIN_BLOCK_PARAGRAPHS, MIN_CONTAINER_CHARS, MIN_PARAGRAPH_CHARS,
};

/// Configuration options for the [`Extractor`](crate::Extractor).
///
/// The defaults are the contract thresholds of the extraction cascade. Changing
/// them changes which pages yield content, so most callers should leave them
/// alone.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// A known container is accepted when its text is longer than this.
    ///
    /// Default: `200`
    pub min_container_chars: usize,

    /// A candidate block must have more text than this.
    ///
    /// Default: `300`
    pub min_block_chars: usize,

    /// A candidate block must contain at least this many `<p>` descendants.
    ///
    /// Default: `2`
    pub min_block_paragraphs: usize,

    /// A salvaged paragraph must have more text than this.
    ///
    /// Default: `50`
    pub min_paragraph_chars: usize,

    /// Remove promotional and legal boilerplate from accepted containers.
    ///
    /// Default: `true`
    pub strip_boilerplate: bool,

    /// Maximum number of elements examined by the block and paragraph
    /// strategies. Set to 0 to disable the limit.
    ///
    /// Default: `0` (no limit)
    pub max_elems_to_parse: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            min_container_chars: MIN_CONTAINER_CHARS,
            min_block_chars: MIN_BLOCK_CHARS,
            min_block_paragraphs: MIN_BLOCK_PARAGRAPHS,
            min_paragraph_chars: MIN_PARAGRAPH_CHARS,
            strip_boilerplate: true,
            max_elems_to_parse: 0,
        }
    }
}

impl ExtractOptions {
    /// Creates a new builder for ExtractOptions
    pub fn builder() -> ExtractOptionsBuilder {
        ExtractOptionsBuilder::default()
    }
}

/// Builder for [`ExtractOptions`].
#[derive(Default)]
pub struct ExtractOptionsBuilder {
    min_container_chars: Option<usize>,
    min_block_chars: Option<usize>,
    min_block_paragraphs: Option<usize>,
    min_paragraph_chars: Option<usize>,
    strip_boilerplate: Option<bool>,
    max_elems_to_parse: Option<usize>,
}

impl ExtractOptionsBuilder {
    /// Set the known-container text threshold
    pub fn min_container_chars(mut self, chars: usize) -> Self {
        self.min_container_chars = Some(chars);
        self
    }

    /// Set the candidate-block text threshold
    pub fn min_block_chars(mut self, chars: usize) -> Self {
        self.min_block_chars = Some(chars);
        self
    }

    /// Set the candidate-block paragraph count
    pub fn min_block_paragraphs(mut self, count: usize) -> Self {
        self.min_block_paragraphs = Some(count);
        self
    }

    /// Set the salvaged-paragraph text threshold
    pub fn min_paragraph_chars(mut self, chars: usize) -> Self {
        self.min_paragraph_chars = Some(chars);
        self
    }

    /// Enable or disable boilerplate removal
    pub fn strip_boilerplate(mut self, strip: bool) -> Self {
        self.strip_boilerplate = Some(strip);
        self
    }

    /// Set maximum number of elements to examine
    pub fn max_elems_to_parse(mut self, max: usize) -> Self {
        self.max_elems_to_parse = Some(max);
        self
    }

    /// Build the ExtractOptions
    pub fn build(self) -> ExtractOptions {
        let defaults = ExtractOptions::default();
        ExtractOptions {
            min_container_chars: self
                .min_container_chars
                .unwrap_or(defaults.min_container_chars),
            min_block_chars: self.min_block_chars.unwrap_or(defaults.min_block_chars),
            min_block_paragraphs: self
                .min_block_paragraphs
                .unwrap_or(defaults.min_block_paragraphs),
            min_paragraph_chars: self
                .min_paragraph_chars
                .unwrap_or(defaults.min_paragraph_chars),
            strip_boilerplate: self.strip_boilerplate.unwrap_or(defaults.strip_boilerplate),
            max_elems_to_parse: self
                .max_elems_to_parse
                .unwrap_or(defaults.max_elems_to_parse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_contract_thresholds() {
        let options = ExtractOptions::default();
        assert_eq!(options.min_container_chars, 200);
        assert_eq!(options.min_block_chars, 300);
        assert_eq!(options.min_block_paragraphs, 2);
        assert_eq!(options.min_paragraph_chars, 50);
        assert!(options.strip_boilerplate);
    }

    #[test]
    fn test_builder_keeps_unset_defaults() {
        let options = ExtractOptions::builder().min_block_chars(1000).build();
        assert_eq!(options.min_block_chars, 1000);
        assert_eq!(options.min_container_chars, 200);
        assert_eq!(ExtractOptions::builder().build(), ExtractOptions::default());
    }
}
