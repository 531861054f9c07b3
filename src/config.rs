use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::Error;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub lesson: LessonConfig,
    pub video: VideoConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LessonConfig {
    pub title_level: u8,
}

impl Default for LessonConfig {
    fn default() -> Self {
        Self { title_level: 2 }
    }
}

impl LessonConfig {
    /// Heading tag for the lesson title, with the level clamped to 1-6.
    pub fn title_tag(&self) -> String {
        format!("h{}", self.title_level.clamp(1, 6))
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct VideoConfig {
    pub youtube_embed_base: String,
    pub iframe_title: String,
    pub iframe_allow: String,
    pub allow_fullscreen: bool,
    pub controls: bool,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            youtube_embed_base: "https://www.youtube.com/embed/".to_string(),
            iframe_title: "YouTube video".to_string(),
            iframe_allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture".to_string(),
            allow_fullscreen: true,
            controls: true,
        }
    }
}

impl Config {
    /// The bundled default config (validated by build.rs).
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return the compiled default if it is
    /// missing or invalid.
    pub fn load(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(config) => config,
            Err(Error::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Self::compiled_default()
            }
            Err(e) => {
                tracing::warn!("{e}; using default config");
                Self::compiled_default()
            }
        }
    }

    /// Load config from a TOML file, failing on read or parse errors.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_default_matches_struct_default() {
        assert_eq!(Config::compiled_default(), Config::default());
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let config: Config = toml::from_str("[video]\ncontrols = false\n").unwrap();
        assert!(!config.video.controls);
        assert!(config.video.allow_fullscreen);
        assert_eq!(config.lesson.title_level, 2);
    }

    #[test]
    fn title_level_is_clamped() {
        assert_eq!(LessonConfig { title_level: 0 }.title_tag(), "h1");
        assert_eq!(LessonConfig { title_level: 3 }.title_tag(), "h3");
        assert_eq!(LessonConfig { title_level: 9 }.title_tag(), "h6");
    }

    #[test]
    fn invalid_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readable.toml");
        fs::write(&path, "[lesson]\ntitle_level = \"x\"\n").unwrap();

        assert_eq!(Config::load(&path), Config::compiled_default());
        assert!(matches!(
            Config::from_file(&path),
            Err(Error::Config { .. })
        ));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readable.toml");
        fs::write(&path, "[video\n").unwrap();

        assert_eq!(Config::load(&path), Config::compiled_default());
        assert!(matches!(
            Config::from_file(&path),
            Err(Error::Config { .. })
        ));
    }

    #[test]
    fn unreadable_path_falls_back_to_default() {
        // A directory exists but cannot be read as a file
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(dir.path()), Config::compiled_default());
        assert!(matches!(
            Config::from_file(dir.path()),
            Err(Error::Read { ref source, .. }) if source.kind() != io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn file_overrides_are_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readable.toml");
        fs::write(&path, "[lesson]\ntitle_level = 4\n").unwrap();

        let config = Config::load(&path);
        assert_eq!(config.lesson.title_level, 4);
        assert_eq!(config.video, VideoConfig::default());
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let path = Path::new("does/not/exist/readable.toml");
        assert_eq!(Config::load(path), Config::compiled_default());
        assert!(matches!(
            Config::from_file(path),
            Err(Error::Read { .. })
        ));
    }
}
