//! Translation settings.
//!
//! Each setting resolves as: CLI flag -> environment variable -> config file
//! (`$XDG_CONFIG_HOME/bf2js.toml`, section `[translate]`) -> default.

use std::fs;
use std::path::PathBuf;

use cross_xdg::BaseDirs;
use tracing::debug;

use crate::emit::{DEFAULT_INDENT_WIDTH, MAX_INDENT_WIDTH};
use crate::runtime::DEFAULT_TAPE_SIZE;

pub const TAPE_SIZE_ENV: &str = "BF2JS_TAPE_SIZE";
pub const INDENT_ENV: &str = "BF2JS_INDENT";
const CONFIG_FILE: &str = "bf2js.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Number of cells in the emitted tape. Always > 0.
    pub tape_size: usize,
    /// Spaces per nesting level in the emitted body.
    pub indent_width: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tape_size: DEFAULT_TAPE_SIZE,
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

/// Values from one configuration layer. `None` falls through to the next.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Overrides {
    pub tape_size: Option<usize>,
    pub indent_width: Option<usize>,
}

impl Overrides {
    fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            tape_size: lookup(TAPE_SIZE_ENV).and_then(|s| parse_tape_size(&s).ok()),
            indent_width: lookup(INDENT_ENV).and_then(|s| parse_indent_width(&s).ok()),
        }
    }
}

impl Settings {
    /// Resolve settings from flags, the process environment and the user's config file.
    pub fn resolve(flags: Overrides) -> Self {
        let env = Overrides::from_env_with(|key| std::env::var(key).ok());
        let file = load_from_toml().unwrap_or_default();
        Self::layered(&[flags, env, file])
    }

    /// Resolve from explicit layers, highest priority first.
    pub fn layered(layers: &[Overrides]) -> Self {
        let defaults = Settings::default();
        Self {
            tape_size: layers
                .iter()
                .find_map(|l| l.tape_size)
                .unwrap_or(defaults.tape_size),
            indent_width: layers
                .iter()
                .find_map(|l| l.indent_width)
                .unwrap_or(defaults.indent_width),
        }
    }
}

/// Parse a tape size; zero is rejected.
pub fn parse_tape_size(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err("tape size must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid tape size '{value}': {e}")),
    }
}

/// Parse an indent width; anything above [`MAX_INDENT_WIDTH`] is rejected.
pub fn parse_indent_width(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > MAX_INDENT_WIDTH => Err(format!(
            "indent width must be at most {MAX_INDENT_WIDTH}"
        )),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid indent width '{value}': {e}")),
    }
}

fn config_path() -> Option<PathBuf> {
    let base_dirs = BaseDirs::new().ok()?;
    let mut path = PathBuf::from(base_dirs.config_home());
    path.push(CONFIG_FILE);
    Some(path)
}

fn load_from_toml() -> Option<Overrides> {
    let path = config_path()?;
    let content = fs::read_to_string(&path).ok()?;
    debug!(path = %path.display(), "loaded config file");
    Some(parse_config(&content))
}

/// Small hand-rolled reader for the `[translate]` section: `key = value` lines,
/// values optionally quoted. Unknown keys and bad values are ignored.
pub fn parse_config(content: &str) -> Overrides {
    let mut in_translate = false;
    let mut out = Overrides::default();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.starts_with('[') && line.ends_with(']') {
            in_translate = &line[1..line.len() - 1] == "translate";
            continue;
        }
        if !in_translate {
            continue;
        }
        let Some((key, raw)) = line.split_once('=') else {
            continue;
        };
        let raw = raw.trim();
        let val = raw
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(raw);

        match key.trim() {
            "tape_size" => {
                if let Ok(n) = parse_tape_size(val) {
                    out.tape_size = Some(n);
                }
            }
            "indent_width" => {
                if let Ok(n) = parse_indent_width(val) {
                    out.indent_width = Some(n);
                }
            }
            _ => {}
        }
    }

    out
}
