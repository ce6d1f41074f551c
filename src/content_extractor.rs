//! The three-strategy extraction cascade.
//!
//! Strategies run in priority order and the first one that produces text wins:
//! known article containers, then the longest qualifying block, then salvaged
//! standalone paragraphs. The first two hand their node's visible text to the
//! post-processor; salvaged paragraphs are returned as joined.

use crate::article::{Extraction, Strategy};
use crate::constants::{
    BLOCK_CANDIDATES, CHROME_ANCESTORS, CONTAINER_SELECTORS, NAVIGATION, PARAGRAPH, REGEXPS,
};
use crate::dom_utils::{text_length, TreeNode};
use crate::options::ExtractOptions;
use crate::post_processor;
use tracing::{debug, trace};

/// A block considered by the largest-block strategy.
#[derive(Debug, Clone)]
pub(crate) struct CandidateBlock<N> {
    pub node: N,
    pub text: String,
    pub length: usize,
    pub paragraph_count: usize,
}

/// Run the cascade over the tree rooted at `root`.
pub fn grab_article<N: TreeNode>(root: N, options: &ExtractOptions) -> Extraction {
    if let Some(text) = find_known_container(root, options) {
        return finish(&text, Strategy::KnownContainer, options);
    }

    if let Some(block) = find_largest_block(root, options) {
        debug!(
            tag = block.node.tag_name(),
            length = block.length,
            paragraphs = block.paragraph_count,
            "largest block selected"
        );
        return finish(&block.text, Strategy::LargestBlock, options);
    }

    match salvage_paragraphs(root, options) {
        Some(text) => Extraction::found(text, Strategy::ParagraphSalvage),
        None => {
            debug!("no strategy produced content");
            Extraction::failed()
        }
    }
}

fn finish(text: &str, strategy: Strategy, options: &ExtractOptions) -> Extraction {
    match post_processor::clean_text(text, options.strip_boilerplate) {
        Some(cleaned) => Extraction::found(cleaned, strategy),
        None => {
            debug!(%strategy, "winning node was empty after cleanup");
            Extraction::failed()
        }
    }
}

fn limited<N>(nodes: Vec<N>, options: &ExtractOptions) -> impl Iterator<Item = N> {
    let limit = match options.max_elems_to_parse {
        0 => usize::MAX,
        max => max,
    };
    nodes.into_iter().take(limit)
}

/// First known container whose text clears the container threshold.
///
/// Only the first match of each selector is looked at; a short first match
/// moves the search on to the next selector.
pub(crate) fn find_known_container<N: TreeNode>(root: N, options: &ExtractOptions) -> Option<String> {
    for matcher in CONTAINER_SELECTORS.iter() {
        let Some(node) = root.find_first(matcher) else {
            continue;
        };

        let text = node.visible_text();
        let length = text_length(&text);
        if length > options.min_container_chars {
            debug!(?matcher, length, "known container accepted");
            return Some(text);
        }
        trace!(?matcher, length, "known container too short");
    }
    None
}

/// Whether a block's classes mark it as page chrome.
fn has_noise_class<N: TreeNode>(node: &N) -> bool {
    REGEXPS.noise_class.is_match(&node.class_string())
}

/// Longest block that clears the block thresholds, first in document order on
/// ties.
pub(crate) fn find_largest_block<N: TreeNode>(
    root: N,
    options: &ExtractOptions,
) -> Option<CandidateBlock<N>> {
    let mut best: Option<CandidateBlock<N>> = None;

    for node in limited(root.find_all(&BLOCK_CANDIDATES), options) {
        if has_noise_class(&node) || node.has_descendant(&NAVIGATION) {
            continue;
        }

        let paragraph_count = node.count_descendants(&PARAGRAPH);
        if paragraph_count < options.min_block_paragraphs {
            continue;
        }

        let text = node.visible_text();
        let length = text_length(&text);
        if length <= options.min_block_chars {
            continue;
        }

        if best.as_ref().map_or(true, |current| length > current.length) {
            best = Some(CandidateBlock {
                node,
                text,
                length,
                paragraph_count,
            });
        }
    }

    best
}

fn keep_paragraph<N: TreeNode>(paragraph: &N, text: &str, options: &ExtractOptions) -> bool {
    if text_length(text) <= options.min_paragraph_chars {
        return false;
    }
    if REGEXPS.chrome_label.is_match(text) {
        trace!(text, "paragraph starts with a chrome label");
        return false;
    }
    match paragraph.parent_node() {
        Some(parent) => {
            !REGEXPS.noise_class_extended.is_match(&parent.class_string())
                && parent.closest(&CHROME_ANCESTORS).is_none()
        }
        None => true,
    }
}

/// Join every paragraph that survives the salvage filters.
pub(crate) fn salvage_paragraphs<N: TreeNode>(root: N, options: &ExtractOptions) -> Option<String> {
    let kept: Vec<String> = limited(root.find_all(&PARAGRAPH), options)
        .filter_map(|paragraph| {
            let text = paragraph.visible_text();
            keep_paragraph(&paragraph, &text, options).then_some(text)
        })
        .collect();

    debug!(paragraphs = kept.len(), "paragraph salvage");

    let joined = kept.join("\n\n");
    if joined.trim().is_empty() {
        None
    } else {
        Some(joined)
    }
}
