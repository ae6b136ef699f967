//! Formatter for the markdown-like bodies of blog posts.
//!
//! The grammar is small: fenced code blocks, `#` headings,
//! unordered and ordered lists, paragraphs, and four inline spans (code,
//! strong, emphasis, links). Input is tokenized line by line into a flat
//! sequence of [`Block`]s; anything outside the grammar is kept as text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Language reported for fences without a tag.
pub const DEFAULT_CODE_LANGUAGE: &str = "text";

static FENCE_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^```(\w+)?$").expect("fence pattern is valid"));
static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6}) (.+)$").expect("heading pattern is valid"));
static UNORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[-*+]\s+(.+)$").expect("unordered item pattern is valid"));
static ORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+\.\s+(.+)$").expect("ordered item pattern is valid"));
static INLINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"`(?P<code>[^`]+)`|\*\*(?P<strong>[^*]+)\*\*|\*(?P<em>[^*]+)\*|\[(?P<text>[^\]]+)\]\((?P<href>[^)]+)\)",
    )
    .expect("inline pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading { level: u8, content: Vec<Inline> },
    Paragraph { content: Vec<Inline> },
    UnorderedList { items: Vec<Vec<Inline>> },
    OrderedList { items: Vec<Vec<Inline>> },
    CodeBlock { id: String, language: String, code: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    Text { value: String },
    Code { value: String },
    Strong { value: String },
    Emphasis { value: String },
    Link { text: String, href: String },
}

impl Inline {
    fn text(value: impl Into<String>) -> Self {
        Inline::Text { value: value.into() }
    }

    /// Visible text of the span without markup.
    pub fn plain_text(&self) -> &str {
        match self {
            Inline::Text { value }
            | Inline::Code { value }
            | Inline::Strong { value }
            | Inline::Emphasis { value } => value,
            Inline::Link { text, .. } => text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn item<'a>(&self, line: &'a str) -> Option<&'a str> {
        let pattern = match self {
            ListKind::Unordered => &UNORDERED_ITEM,
            ListKind::Ordered => &ORDERED_ITEM,
        };
        pattern
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    fn detect(line: &str) -> Option<ListKind> {
        [ListKind::Unordered, ListKind::Ordered]
            .into_iter()
            .find(|kind| kind.item(line).is_some())
    }

    fn into_block(self, items: Vec<Vec<Inline>>) -> Block {
        match self {
            ListKind::Unordered => Block::UnorderedList { items },
            ListKind::Ordered => Block::OrderedList { items },
        }
    }
}

/// Splits a post body into typed blocks in document order.
pub fn parse_blocks(content: &str) -> Vec<Block> {
    let lines: Vec<&str> = content.lines().collect();
    let mut blocks = Vec::new();
    let mut code_blocks = 0usize;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if let Some(language) = fence_language(line) {
            if let Some(close) = closing_fence(&lines, i + 1) {
                blocks.push(Block::CodeBlock {
                    id: format!("code-{code_blocks}"),
                    language: language.to_string(),
                    code: lines[i + 1..close].join("\n"),
                });
                code_blocks += 1;
                i = close + 1;
                continue;
            }
        }

        if line.trim().is_empty() {
            i += 1;
            continue;
        }

        if let Some(caps) = HEADING.captures(line) {
            let level = caps[1].len() as u8;
            blocks.push(Block::Heading {
                level,
                content: parse_inline(caps[2].trim()),
            });
            i += 1;
            continue;
        }

        if let Some(kind) = ListKind::detect(line) {
            let (items, next) = collect_list(&lines, i, kind);
            blocks.push(kind.into_block(items));
            i = next;
            continue;
        }

        blocks.push(Block::Paragraph {
            content: parse_inline(line.trim()),
        });
        i += 1;
    }

    blocks
}

/// Language of an opening fence line, or `None` when the line does not open one.
fn fence_language(line: &str) -> Option<&str> {
    FENCE_OPEN.captures(line).map(|caps| {
        caps.get(1)
            .map(|m| m.as_str())
            .unwrap_or(DEFAULT_CODE_LANGUAGE)
    })
}

fn closing_fence(lines: &[&str], from: usize) -> Option<usize> {
    (from..lines.len()).find(|&j| lines[j].starts_with("```"))
}

/// Groups consecutive items of one list kind, stepping over blank lines
/// between items. Returns the items and the index of the first line after
/// the list; the list stops at the first line that is not an item.
fn collect_list(lines: &[&str], start: usize, kind: ListKind) -> (Vec<Vec<Inline>>, usize) {
    let mut items = Vec::new();
    let mut i = start;
    let mut end = start;

    while i < lines.len() {
        let line = lines[i];
        if line.trim().is_empty() {
            i += 1;
            continue;
        }
        match kind.item(line) {
            Some(text) => {
                items.push(parse_inline(text.trim()));
                i += 1;
                end = i;
            }
            None => break,
        }
    }

    (items, end)
}

/// Splits a line of text into inline spans. Unbalanced markers stay literal.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut literal = String::new();
    let mut last = 0;

    for caps in INLINE.captures_iter(text) {
        let whole = match caps.get(0) {
            Some(m) => m,
            None => continue,
        };
        literal.push_str(&text[last..whole.start()]);
        last = whole.end();

        let span = if let Some(code) = caps.name("code") {
            Inline::Code { value: code.as_str().to_string() }
        } else if let Some(strong) = caps.name("strong") {
            Inline::Strong { value: strong.as_str().to_string() }
        } else if let Some(em) = caps.name("em") {
            Inline::Emphasis { value: em.as_str().to_string() }
        } else {
            match (caps.name("text"), caps.name("href")) {
                (Some(label), Some(href)) if is_safe_href(href.as_str()) => Inline::Link {
                    text: label.as_str().to_string(),
                    href: href.as_str().to_string(),
                },
                _ => {
                    literal.push_str(whole.as_str());
                    continue;
                }
            }
        };

        if !literal.is_empty() {
            spans.push(Inline::text(std::mem::take(&mut literal)));
        }
        spans.push(span);
    }

    literal.push_str(&text[last..]);
    if !literal.is_empty() {
        spans.push(Inline::text(literal));
    }
    spans
}

/// Link targets allowed in rendered posts.
pub fn is_safe_href(href: &str) -> bool {
    if href.starts_with('#') || (href.starts_with('/') && !href.starts_with("//")) {
        return true;
    }
    match url::Url::parse(href) {
        Ok(url) => matches!(url.scheme(), "http" | "https" | "mailto"),
        Err(_) => false,
    }
}

/// Concatenated visible text of a run of spans.
pub fn plain_text(spans: &[Inline]) -> String {
    spans.iter().map(Inline::plain_text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Inline {
        Inline::text(value)
    }

    #[test]
    fn plain_line_is_a_single_paragraph_with_the_exact_text() {
        let blocks = parse_blocks("Just some words, nothing special.");
        assert_eq!(
            blocks,
            vec![Block::Paragraph { content: vec![text("Just some words, nothing special.")] }]
        );
    }

    #[test]
    fn each_line_becomes_its_own_paragraph_and_blank_lines_vanish() {
        let blocks = parse_blocks("first\n\n   \nsecond");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1], Block::Paragraph { content: vec![text("second")] });
    }

    #[test]
    fn fenced_code_is_verbatim_while_outside_text_is_formatted() {
        let input = "```\n**not bold**\n```\n**not bold**";
        let blocks = parse_blocks(input);

        assert_eq!(
            blocks[0],
            Block::CodeBlock {
                id: "code-0".into(),
                language: "text".into(),
                code: "**not bold**".into(),
            }
        );
        assert_eq!(
            blocks[1],
            Block::Paragraph { content: vec![Inline::Strong { value: "not bold".into() }] }
        );
    }

    #[test]
    fn code_blocks_keep_language_blank_lines_and_numbering() {
        let input = "```dart\nvoid main() {\n\n  print('# hi');\n}\n```\ntext\n```rust\nfn x() {}\n```";
        let blocks = parse_blocks(input);

        assert_eq!(
            blocks[0],
            Block::CodeBlock {
                id: "code-0".into(),
                language: "dart".into(),
                code: "void main() {\n\n  print('# hi');\n}".into(),
            }
        );
        match &blocks[2] {
            Block::CodeBlock { id, language, .. } => {
                assert_eq!(id, "code-1");
                assert_eq!(language, "rust");
            }
            other => panic!("expected code block, got {other:?}"),
        }
    }

    #[test]
    fn unclosed_fence_is_plain_text() {
        let blocks = parse_blocks("```\n**bold**");
        assert_eq!(blocks[0], Block::Paragraph { content: vec![text("```")] });
        assert_eq!(blocks[1], Block::Paragraph { content: vec![Inline::Strong { value: "bold".into() }] });
    }

    #[test]
    fn headings_by_hash_count() {
        let blocks = parse_blocks("# One\n### Three\n###### Six\n####### Seven");

        assert!(matches!(&blocks[0], Block::Heading { level: 1, .. }));
        assert!(matches!(&blocks[1], Block::Heading { level: 3, .. }));
        assert!(matches!(&blocks[2], Block::Heading { level: 6, .. }));
        assert_eq!(blocks[3], Block::Paragraph { content: vec![text("####### Seven")] });
    }

    #[test]
    fn heading_needs_a_space_after_the_hashes() {
        let blocks = parse_blocks("#hashtag");
        assert_eq!(blocks[0], Block::Paragraph { content: vec![text("#hashtag")] });
    }

    #[test]
    fn consecutive_items_form_one_list_across_blank_lines() {
        let blocks = parse_blocks("- **Provider**: simple\n\n- Riverpod\n* Bloc");

        assert_eq!(
            blocks,
            vec![Block::UnorderedList {
                items: vec![
                    vec![Inline::Strong { value: "Provider".into() }, text(": simple")],
                    vec![text("Riverpod")],
                    vec![text("Bloc")],
                ]
            }]
        );
    }

    #[test]
    fn list_stops_at_trailing_prose() {
        let blocks = parse_blocks("1. Keep state close\n2. Test it\n\n## Conclusion\nChoose wisely.");

        assert_eq!(blocks.len(), 3);
        match &blocks[0] {
            Block::OrderedList { items } => assert_eq!(items.len(), 2),
            other => panic!("expected ordered list, got {other:?}"),
        }
        assert!(matches!(&blocks[1], Block::Heading { level: 2, .. }));
        assert_eq!(blocks[2], Block::Paragraph { content: vec![text("Choose wisely.")] });
    }

    #[test]
    fn switching_list_kind_starts_a_new_list() {
        let blocks = parse_blocks("- a\n1. b");
        assert!(matches!(&blocks[0], Block::UnorderedList { .. }));
        assert!(matches!(&blocks[1], Block::OrderedList { .. }));
    }

    #[test]
    fn inline_spans_in_order() {
        let spans = parse_inline("Use `const` with **care** and *style*, see [docs](https://flutter.dev).");

        assert_eq!(
            spans,
            vec![
                text("Use "),
                Inline::Code { value: "const".into() },
                text(" with "),
                Inline::Strong { value: "care".into() },
                text(" and "),
                Inline::Emphasis { value: "style".into() },
                text(", see "),
                Inline::Link { text: "docs".into(), href: "https://flutter.dev".into() },
                text("."),
            ]
        );
    }

    #[test]
    fn inline_code_content_is_literal() {
        let spans = parse_inline("`**x**`");
        assert_eq!(spans, vec![Inline::Code { value: "**x**".into() }]);
    }

    #[test]
    fn unbalanced_markers_pass_through() {
        assert_eq!(parse_inline("**open"), vec![text("**open")]);
        assert_eq!(parse_inline("2 * 3 = 6"), vec![text("2 * 3 = 6")]);
    }

    #[test]
    fn unsafe_links_stay_literal() {
        let spans = parse_inline("[click](javascript:alert(1))");
        assert_eq!(plain_text(&spans), "[click](javascript:alert(1))");
        assert!(spans.iter().all(|s| !matches!(s, Inline::Link { .. })));
    }

    #[test]
    fn safe_href_rules() {
        assert!(is_safe_href("/blog/2"));
        assert!(is_safe_href("#section"));
        assert!(is_safe_href("mailto:me@example.com"));
        assert!(!is_safe_href("//evil.example.com"));
        assert!(!is_safe_href("data:text/html,hi"));
    }

    #[test]
    fn crlf_input_is_handled() {
        let blocks = parse_blocks("# Title\r\n\r\nBody\r\n");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1], Block::Paragraph { content: vec![text("Body")] });
    }
}
