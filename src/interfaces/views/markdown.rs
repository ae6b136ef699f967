//! Block and inline markup for formatted article bodies.

use maud::{html, Markup};

use crate::utils::markdown::{parse_blocks, plain_text, Block, Inline};

/// Formats `content` and renders it to HTML.
pub fn render_markdown(content: &str) -> Markup {
    render_blocks(&parse_blocks(content))
}

pub fn render_blocks(blocks: &[Block]) -> Markup {
    html! {
        @for block in blocks {
            (render_block(block))
        }
    }
}

fn render_block(block: &Block) -> Markup {
    match block {
        Block::Heading { level, content } => heading(*level, content),
        Block::Paragraph { content } => html! { p { (render_inline(content)) } },
        Block::UnorderedList { items } => html! {
            ul {
                @for item in items {
                    li { (render_inline(item)) }
                }
            }
        },
        Block::OrderedList { items } => html! {
            ol {
                @for item in items {
                    li { (render_inline(item)) }
                }
            }
        },
        Block::CodeBlock { id, language, code } => html! {
            div class="code-block" {
                div class="code-header" {
                    span class="code-language" { (language) }
                    button type="button" class="copy-button" data-copy-target=(id) { "Copy" }
                }
                pre {
                    code id=(id) class=(format!("language-{}", language)) { (code) }
                }
            }
        },
    }
}

fn heading(level: u8, content: &[Inline]) -> Markup {
    let anchor = slug::slugify(plain_text(content));
    let inner = render_inline(content);
    match level {
        1 => html! { h1 id=(anchor) { (inner) } },
        2 => html! { h2 id=(anchor) { (inner) } },
        3 => html! { h3 id=(anchor) { (inner) } },
        4 => html! { h4 id=(anchor) { (inner) } },
        5 => html! { h5 id=(anchor) { (inner) } },
        _ => html! { h6 id=(anchor) { (inner) } },
    }
}

pub fn render_inline(spans: &[Inline]) -> Markup {
    html! {
        @for span in spans {
            @match span {
                Inline::Text { value } => { (value) }
                Inline::Code { value } => { code class="inline-code" { (value) } }
                Inline::Strong { value } => { strong { (value) } }
                Inline::Emphasis { value } => { em { (value) } }
                Inline::Link { text, href } => {
                    a href=(href) target="_blank" rel="noopener noreferrer" { (text) }
                }
            }
        }
    }
}
