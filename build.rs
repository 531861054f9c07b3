use std::fs;

use toml::{Table, Value};

const CONFIG_PATH: &str = "src/default_config.toml";

/// Section name, then each key with the TOML type it must hold.
const SCHEMA: &[(&str, &[(&str, &str)])] = &[
    ("lesson", &[("title_level", "integer")]),
    (
        "video",
        &[
            ("youtube_embed_base", "string"),
            ("iframe_title", "string"),
            ("iframe_allow", "string"),
            ("allow_fullscreen", "boolean"),
            ("controls", "boolean"),
        ],
    ),
];

fn main() {
    println!("cargo:rerun-if-changed={CONFIG_PATH}");

    let content = fs::read_to_string(CONFIG_PATH)
        .unwrap_or_else(|e| panic!("Failed to read {CONFIG_PATH}: {e}"));
    let table: Table = content
        .parse()
        .unwrap_or_else(|e| panic!("Invalid {CONFIG_PATH}: {e}"));

    // Unknown keys would be silently dropped by `#[serde(default)]` at runtime
    for (section, value) in &table {
        let Some((_, keys)) = SCHEMA.iter().find(|(name, _)| name == section) else {
            panic!("{CONFIG_PATH}: unknown section [{section}]");
        };
        let Value::Table(entries) = value else {
            panic!("{CONFIG_PATH}: [{section}] must be a table");
        };
        for (key, value) in entries {
            let Some((_, expected)) = keys.iter().find(|(name, _)| name == key) else {
                panic!("{CONFIG_PATH}: unknown key {section}.{key}");
            };
            if value.type_str() != *expected {
                panic!(
                    "{CONFIG_PATH}: {section}.{key} must be a {expected}, found {}",
                    value.type_str()
                );
            }
        }
    }

    let level = table
        .get("lesson")
        .and_then(|lesson| lesson.get("title_level"))
        .and_then(Value::as_integer);
    if let Some(level) = level {
        if !(1..=6).contains(&level) {
            panic!("{CONFIG_PATH}: lesson.title_level must be 1-6, found {level}");
        }
    }
}
