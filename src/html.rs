use crate::block::{Block, List};

/// Emitted when no content survives processing.
pub const PLACEHOLDER: &str = "<p>\u{2014}</p>";

/// Escape the five HTML metacharacters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(text, &mut out);
    out
}

fn push_escaped(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
}

/// Convert blocks to HTML markup
pub fn blocks_to_html(blocks: &[Block]) -> String {
    let mut out = String::new();

    for block in blocks {
        match block {
            Block::Paragraph { text } => {
                out.push_str("<p>");
                push_escaped(text, &mut out);
                out.push_str("</p>");
            }
            Block::List(list) => list_to_html(list, &mut out),
        }
    }

    if out.is_empty() {
        return PLACEHOLDER.to_string();
    }
    out
}

fn list_to_html(list: &List, out: &mut String) {
    let tag = if list.ordered { "ol" } else { "ul" };

    out.push('<');
    out.push_str(tag);
    out.push('>');
    for item in &list.items {
        out.push_str("<li>");
        push_escaped(&item.content, out);
        out.push_str("</li>");
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
