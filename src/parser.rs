use std::sync::LazyLock;

use regex::Regex;

use crate::block::{Block, List, ListItem};

// Opening tag of a block-level element, name followed by a non-word char or end of input.
static BLOCK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(?i:p|ul|ol|li|br|h[1-6]|img|iframe|video|audio|figure)(?:[^A-Za-z0-9_]|$)")
        .expect("block tag pattern is valid")
});

// `\s` also matches newlines, so a run of blank lines before a marker folds into it.
static BULLET_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[•\-*]\s+").expect("bullet prefix pattern is valid"));

// Item content stops at any line terminator, including a lone `\r`, so such lines stay text.
static ORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+[.)]\s+([^\r\n\x{2028}\x{2029}]*)$").expect("ordered item pattern is valid")
});

static UNORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-*]\s+([^\r\n\x{2028}\x{2029}]*)$").expect("unordered item pattern is valid")
});

const BULLET: char = '\u{2022}';

/// Returns true if the input already contains a recognized block-level opening tag.
pub fn has_block_markup(input: &str) -> bool {
    BLOCK_TAG.is_match(input)
}

/// Normalize line endings, space out bullet glyphs, trim, and fold line-start
/// bullet markers (`•`, `-`, `*`) into a `- ` prefix.
pub fn normalize(input: &str) -> String {
    let text = input
        .replace("\r\n", "\n")
        .replace(BULLET, &format!(" {BULLET} "));
    BULLET_PREFIX
        .replace_all(text.trim(), "- ")
        .into_owned()
}

/// Line classification used while walking normalized text
enum Line<'a> {
    Ordered(&'a str),
    Unordered(&'a str),
    Text(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    if let Some(caps) = ORDERED_ITEM.captures(line) {
        return Line::Ordered(caps.get(1).map_or("", |m| m.as_str()));
    }
    if let Some(caps) = UNORDERED_ITEM.captures(line) {
        return Line::Unordered(caps.get(1).map_or("", |m| m.as_str()));
    }
    Line::Text(line)
}

/// Parse normalized plain text into paragraphs and lists.
pub fn parse(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    // At most one list is open at a time
    let mut open: Option<List> = None;

    let lines = text.split('\n').map(str::trim).filter(|l| !l.is_empty());

    for line in lines {
        let (ordered, content) = match classify(line) {
            Line::Ordered(content) => (true, content),
            Line::Unordered(content) => (false, content),
            Line::Text(text) => {
                close_list(&mut open, &mut blocks);
                blocks.push(Block::Paragraph {
                    text: text.to_string(),
                });
                continue;
            }
        };

        if open.as_ref().is_some_and(|list| list.ordered != ordered) {
            close_list(&mut open, &mut blocks);
        }
        open.get_or_insert_with(|| List::new(ordered))
            .items
            .push(ListItem {
                content: content.to_string(),
            });
    }
    close_list(&mut open, &mut blocks);

    blocks
}

fn close_list(open: &mut Option<List>, blocks: &mut Vec<Block>) {
    if let Some(list) = open.take() {
        blocks.push(Block::List(list));
    }
}
