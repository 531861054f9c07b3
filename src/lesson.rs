use serde::Deserialize;
use url::Url;

use crate::config::{Config, VideoConfig};
use crate::error::Error;
use crate::html::escape_html;

/// A lesson row as stored by the backend. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Lesson {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

impl Lesson {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

/// How a lesson video is embedded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoEmbed {
    /// YouTube player in an iframe
    YouTube { src: String },
    /// Any other URL, played by a native video element
    Direct { src: String },
}

impl VideoEmbed {
    pub fn from_url(url: Option<&str>, config: &VideoConfig) -> Option<Self> {
        let url = url.map(str::trim).filter(|u| !u.is_empty())?;
        match youtube_embed_url(url, &config.youtube_embed_base) {
            Some(src) => Some(VideoEmbed::YouTube { src }),
            None => Some(VideoEmbed::Direct {
                src: url.to_string(),
            }),
        }
    }

    fn to_html(&self, config: &VideoConfig) -> String {
        match self {
            VideoEmbed::YouTube { src } => {
                let mut out = format!(
                    "<iframe src=\"{}\" title=\"{}\" allow=\"{}\"",
                    escape_html(src),
                    escape_html(&config.iframe_title),
                    escape_html(&config.iframe_allow),
                );
                if config.allow_fullscreen {
                    out.push_str(" allowfullscreen");
                }
                out.push_str("></iframe>");
                out
            }
            VideoEmbed::Direct { src } => {
                let controls = if config.controls { " controls" } else { "" };
                format!("<video src=\"{}\"{}></video>", escape_html(src), controls)
            }
        }
    }
}

/// Derive a YouTube embed URL from a watch or short link.
pub fn youtube_embed_url(url: &str, base: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;

    if host.contains("youtu.be") {
        let path = parsed.path();
        let id = path.strip_prefix('/').unwrap_or(path);
        return Some(format!("{base}{id}"));
    }
    if host.contains("youtube.com") {
        let id = parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
            .filter(|v| !v.is_empty())?;
        return Some(format!("{base}{id}"));
    }
    None
}

/// Render a lesson as a title heading, optional video embed, and readable body.
pub fn render_lesson(lesson: &Lesson, config: &Config) -> String {
    let tag = config.lesson.title_tag();
    let title = escape_html(lesson.title.as_deref().unwrap_or_default());
    let mut parts = vec![format!("<{tag}>{title}</{tag}>")];

    if let Some(embed) = VideoEmbed::from_url(lesson.video_url.as_deref(), &config.video) {
        tracing::debug!(?embed, "embedding lesson video");
        parts.push(embed.to_html(&config.video));
    }

    let body = crate::ensure_readable_html_opt(lesson.html.as_deref());
    parts.push(format!("<article>{body}</article>"));

    parts.join("\n")
}
