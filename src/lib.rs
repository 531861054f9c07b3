mod block;
mod config;
mod error;
mod html;
mod lesson;
mod parser;

pub use block::{Block, List, ListItem};
pub use config::{Config, LessonConfig, VideoConfig};
pub use error::Error;
pub use html::{PLACEHOLDER, escape_html};
pub use lesson::{Lesson, VideoEmbed, render_lesson, youtube_embed_url};
pub use parser::has_block_markup;

/// Parse plain text into a vector of blocks, after bullet normalization.
pub fn parse(text: &str) -> Vec<Block> {
    parser::parse(&parser::normalize(text))
}

/// Make lesson text safe to render as HTML.
///
/// Input that already contains block-level markup is returned unchanged.
/// Anything else is treated as plain text and rebuilt into escaped paragraphs
/// and lists. Never fails; input with no content yields [`PLACEHOLDER`].
pub fn ensure_readable_html(input: impl AsRef<str>) -> String {
    let input = input.as_ref();
    if has_block_markup(input) {
        tracing::debug!("block markup detected, passing through");
        return input.to_string();
    }

    let blocks = parse(input);
    tracing::trace!(blocks = blocks.len(), "rebuilt plain text");
    html::blocks_to_html(&blocks)
}

/// Like [`ensure_readable_html`], treating absent input as empty.
pub fn ensure_readable_html_opt(input: Option<&str>) -> String {
    ensure_readable_html(input.unwrap_or_default())
}
