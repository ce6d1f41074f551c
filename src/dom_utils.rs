//! Read-only tree queries the extraction heuristics run against.
//!
//! [`TreeNode`] is the boundary between the heuristics and whatever document
//! model hosts them. Implementors supply five primitives (tag name, attribute
//! lookup, parent, children, visible text); the query shapes the extractor
//! needs are provided on top of them. `scraper::ElementRef` implements it here.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Node};

/// A typed stand-in for the handful of CSS selectors the heuristics use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Element name, ASCII case-insensitive (`article`).
    Tag(&'static str),
    /// Exact `role` attribute value (`[role="main"]`).
    Role(&'static str),
    /// Whole class token (`.content`).
    Class(&'static str),
    /// Substring of the raw class attribute (`[class*="nav"]`).
    ClassContains(&'static str),
    /// Substring of the raw id attribute (`[id*="nav"]`).
    IdContains(&'static str),
    AnyOf(&'static [Matcher]),
    /// `inner` with an ancestor matching `outer` (`main article`).
    Descendant(&'static Matcher, &'static Matcher),
}

impl Matcher {
    pub fn matches<N: TreeNode>(&self, node: &N) -> bool {
        match *self {
            Matcher::Tag(tag) => node.tag_name().eq_ignore_ascii_case(tag),
            Matcher::Role(role) => node.role() == Some(role),
            Matcher::Class(class) => node.class_tokens().contains(&class),
            Matcher::ClassContains(needle) => node
                .attribute("class")
                .is_some_and(|class| class.contains(needle)),
            Matcher::IdContains(needle) => {
                node.attribute("id").is_some_and(|id| id.contains(needle))
            }
            Matcher::AnyOf(matchers) => matchers.iter().any(|m| m.matches(node)),
            Matcher::Descendant(outer, inner) => {
                inner.matches(node) && node.ancestor_elements().any(|a| outer.matches(&a))
            }
        }
    }
}

/// An element in a parsed document, viewed read-only.
pub trait TreeNode: Copy {
    /// Lowercase element name.
    fn tag_name(&self) -> &str;

    fn attribute(&self, name: &str) -> Option<&str>;

    /// Parent element, `None` at the document root.
    fn parent_node(&self) -> Option<Self>;

    /// Child elements in document order.
    fn child_nodes(&self) -> Vec<Self>;

    /// Rendered text of this node and its descendants, trimmed.
    fn visible_text(&self) -> String;

    fn class_tokens(&self) -> Vec<&str> {
        self.attribute("class")
            .map(|class| class.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Class tokens joined by single spaces, like `classList.toString()`.
    fn class_string(&self) -> String {
        self.class_tokens().join(" ")
    }

    fn role(&self) -> Option<&str> {
        self.attribute("role")
    }

    /// Ancestors from the parent outwards.
    fn ancestor_elements(&self) -> std::iter::Successors<Self, fn(&Self) -> Option<Self>> {
        std::iter::successors(
            self.parent_node(),
            Self::parent_node as fn(&Self) -> Option<Self>,
        )
    }

    /// Descendants in document (pre-)order, excluding `self`.
    fn descendant_elements(&self) -> Vec<Self> {
        let mut out = Vec::new();
        let mut stack: Vec<Self> = self.child_nodes().into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.child_nodes().into_iter().rev());
        }
        out
    }

    /// First match in document order, `self` included.
    fn find_first(&self, matcher: &Matcher) -> Option<Self> {
        if matcher.matches(self) {
            return Some(*self);
        }
        self.descendant_elements()
            .into_iter()
            .find(|node| matcher.matches(node))
    }

    /// All matches in document order, `self` included.
    fn find_all(&self, matcher: &Matcher) -> Vec<Self> {
        std::iter::once(*self)
            .chain(self.descendant_elements())
            .filter(|node| matcher.matches(node))
            .collect()
    }

    /// Nearest ancestor-or-self matching `matcher`.
    fn closest(&self, matcher: &Matcher) -> Option<Self> {
        if matcher.matches(self) {
            return Some(*self);
        }
        self.ancestor_elements().find(|node| matcher.matches(node))
    }

    fn has_descendant(&self, matcher: &Matcher) -> bool {
        self.descendant_elements()
            .iter()
            .any(|node| matcher.matches(node))
    }

    fn count_descendants(&self, matcher: &Matcher) -> usize {
        self.descendant_elements()
            .into_iter()
            .filter(|node| matcher.matches(node))
            .count()
    }
}

impl<'a> TreeNode for ElementRef<'a> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn parent_node(&self) -> Option<Self> {
        self.parent().and_then(ElementRef::wrap)
    }

    fn child_nodes(&self) -> Vec<Self> {
        self.children().filter_map(ElementRef::wrap).collect()
    }

    fn visible_text(&self) -> String {
        render_text(&collect_text(*self))
    }
}

/// Subtrees that never render text.
const SKIPPED_TAGS: &[&str] = &[
    "script", "style", "noscript", "template", "head", "title", "iframe", "object", "svg",
    "canvas",
];

const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "caption", "dd", "details", "dialog",
    "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3",
    "h4", "h5", "h6", "header", "hgroup", "hr", "html", "legend", "li", "main", "menu", "nav",
    "ol", "pre", "section", "summary", "table", "tbody", "tfoot", "thead", "tr", "ul",
];

static HIDDEN_STYLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)display\s*:\s*none|visibility\s*:\s*hidden").unwrap());

#[derive(Debug)]
enum TextPiece<'a> {
    Text(&'a str),
    /// Literal newline from `<br>`.
    LineFeed,
    /// Cell separator.
    Tab,
    /// Required line break; adjacent ones merge to the largest count.
    Break(usize),
}

fn is_hidden(element: &ElementRef) -> bool {
    let value = element.value();
    SKIPPED_TAGS.contains(&value.name())
        || value.attr("hidden").is_some()
        || value
            .attr("style")
            .is_some_and(|style| HIDDEN_STYLE.is_match(style))
}

/// One step of the explicit-stack walk behind [`collect_text`].
enum Step<'a> {
    Open(ElementRef<'a>),
    Text(&'a str),
    Close(ElementRef<'a>, usize),
}

/// Flatten `root` into text pieces without recursing, so nesting depth is
/// bounded by heap rather than call stack.
fn collect_text(root: ElementRef<'_>) -> Vec<TextPiece<'_>> {
    let mut pieces = Vec::new();
    let mut stack = vec![Step::Open(root)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Text(text) => pieces.push(TextPiece::Text(text)),
            Step::Open(element) => {
                if is_hidden(&element) {
                    continue;
                }

                let name = element.value().name();
                if name == "br" {
                    pieces.push(TextPiece::LineFeed);
                    continue;
                }

                let breaks = match name {
                    "p" => 2,
                    _ if BLOCK_TAGS.contains(&name) => 1,
                    _ => 0,
                };
                if breaks > 0 {
                    pieces.push(TextPiece::Break(breaks));
                }

                stack.push(Step::Close(element, breaks));
                let children: Vec<Step> = element
                    .children()
                    .filter_map(|child| match child.value() {
                        Node::Text(text) => Some(Step::Text(text)),
                        Node::Element(_) => ElementRef::wrap(child).map(Step::Open),
                        _ => None,
                    })
                    .collect();
                stack.extend(children.into_iter().rev());
            }
            Step::Close(element, breaks) => {
                if breaks > 0 {
                    pieces.push(TextPiece::Break(breaks));
                }
                if matches!(element.value().name(), "td" | "th") && has_next_cell(&element) {
                    pieces.push(TextPiece::Tab);
                }
            }
        }
    }

    pieces
}

fn has_next_cell(cell: &ElementRef) -> bool {
    cell.next_siblings()
        .filter_map(ElementRef::wrap)
        .any(|sibling| matches!(sibling.value().name(), "td" | "th"))
}

/// Collapse ASCII whitespace inside a line, keeping cell tabs. Non-breaking
/// spaces survive, as they do in rendered text.
fn collapse_line(line: &str) -> String {
    line.split('\t')
        .map(|cell| {
            cell.split(|c: char| c.is_ascii_whitespace())
                .filter(|word| !word.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\t")
}

fn render_text(pieces: &[TextPiece]) -> String {
    let mut out = String::new();
    let mut line = String::new();
    let mut pending_breaks = 0usize;

    fn flush(out: &mut String, line: &mut String, pending_breaks: &mut usize) {
        let collapsed = collapse_line(line);
        line.clear();
        if collapsed.trim().is_empty() {
            return;
        }
        if !out.is_empty() && *pending_breaks > 0 {
            out.push_str(&"\n".repeat(*pending_breaks));
        }
        *pending_breaks = 0;
        out.push_str(&collapsed);
    }

    for piece in pieces {
        match piece {
            // Source tabs are ordinary whitespace; only `Tab` separates cells.
            TextPiece::Text(text) => line.extend(text.chars().map(|c| match c {
                '\t' => ' ',
                c => c,
            })),
            TextPiece::Tab => line.push('\t'),
            TextPiece::LineFeed => {
                flush(&mut out, &mut line, &mut pending_breaks);
                if !out.is_empty() {
                    out.push_str(&"\n".repeat(pending_breaks));
                    out.push('\n');
                }
                pending_breaks = 0;
            }
            TextPiece::Break(count) => {
                flush(&mut out, &mut line, &mut pending_breaks);
                pending_breaks = pending_breaks.max(*count);
            }
        }
    }
    flush(&mut out, &mut line, &mut pending_breaks);

    out.trim().to_string()
}

/// Length as the heuristics count it: Unicode scalar values.
pub fn text_length(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first<'a>(document: &'a Html, css: &str) -> ElementRef<'a> {
        let selector = Selector::parse(css).unwrap();
        document.select(&selector).next().unwrap()
    }

    #[test]
    fn test_visible_text_separates_paragraphs() {
        let document = Html::parse_document(
            "<html><body><div><p>One   two</p>\n<p>three</p><span>four</span> five</div></body></html>",
        );
        let div = first(&document, "div");
        assert_eq!(div.visible_text(), "One two\n\nthree\n\nfour five");
    }

    #[test]
    fn test_visible_text_skips_scripts_and_hidden() {
        let document = Html::parse_document(
            r#"<html><body><div>Shown<script>var x = 1;</script><style>p{}</style>
            <span hidden>secret</span><span style="display: none">gone</span>
            <noscript>enable js</noscript></div></body></html>"#,
        );
        let div = first(&document, "div");
        assert_eq!(div.visible_text(), "Shown");
    }

    #[test]
    fn test_visible_text_table_cells_and_breaks() {
        let document = Html::parse_document(
            "<html><body><div>a<br>b<table><tr><td>x</td><td>y</td></tr><tr><td>z</td></tr></table></div></body></html>",
        );
        let div = first(&document, "div");
        assert_eq!(div.visible_text(), "a\nb\nx\ty\nz");
    }

    #[test]
    fn test_visible_text_keeps_non_breaking_spaces() {
        let document =
            Html::parse_document("<html><body><div>a&nbsp;&nbsp;b \n\t c</div></body></html>");
        let div = first(&document, "div");
        assert_eq!(div.visible_text(), "a\u{a0}\u{a0}b c");
    }

    #[test]
    fn test_visible_text_survives_deep_nesting() {
        let depth = 20_000;
        let html = format!(
            "<html><body><div>{}<p>deep</p>{}</div></body></html>",
            "<span>".repeat(depth),
            "</span>".repeat(depth)
        );
        let document = Html::parse_document(&html);
        let div = first(&document, "div");
        assert_eq!(div.visible_text(), "deep");
    }

    #[test]
    fn test_matchers() {
        let document = Html::parse_document(
            r#"<html><body><main class="site content"><article role="main" id="top-nav-wrap">x</article></main></body></html>"#,
        );
        let article = first(&document, "article");
        assert!(Matcher::Tag("ARTICLE").matches(&article));
        assert!(Matcher::Role("main").matches(&article));
        assert!(Matcher::IdContains("nav").matches(&article));
        assert!(!Matcher::Class("content").matches(&article));
        assert!(Matcher::Descendant(&Matcher::Class("content"), &Matcher::Tag("article"))
            .matches(&article));

        let main = first(&document, "main");
        assert!(Matcher::Class("content").matches(&main));
        assert!(!Matcher::Class("cont").matches(&main));
        assert!(Matcher::ClassContains("cont").matches(&main));
    }

    #[test]
    fn test_queries_follow_document_order() {
        let document = Html::parse_document(
            r#"<html><body><div id="a"><p>1</p><div id="b"><p>2</p></div></div><p>3</p></body></html>"#,
        );
        let root = document.root_element();
        let divs = root.find_all(&Matcher::Tag("div"));
        let ids: Vec<_> = divs.iter().filter_map(|d| d.attribute("id")).collect();
        assert_eq!(ids, vec!["a", "b"]);

        let outer = divs[0];
        assert_eq!(outer.count_descendants(&Matcher::Tag("p")), 2);
        assert_eq!(root.count_descendants(&Matcher::Tag("div")), 2);
        assert!(!outer.has_descendant(&Matcher::Tag("nav")));

        let inner_p = first(&document, "#b p");
        let nearest_div = inner_p.closest(&Matcher::Tag("div")).unwrap();
        assert_eq!(nearest_div.attribute("id"), Some("b"));
        assert_eq!(
            inner_p.ancestor_elements().last().map(|n| n.tag_name().to_string()),
            Some("html".to_string())
        );
        assert!(root.find_first(&Matcher::Tag("html")).is_some());
    }

    #[test]
    fn test_text_length_counts_chars() {
        assert_eq!(text_length("café"), 4);
    }
}
