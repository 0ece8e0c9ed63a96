use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::models::Rank;
use crate::table::InputFormat;

/// Root configuration structure, deserialized from `.degree-normalizer/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub dictionary: DictionaryConfig,
}

/// CSV dialect of the descriptor table.
#[derive(Debug, Deserialize)]
pub struct InputConfig {
    /// Single ASCII field delimiter. Defaults to `,`.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Skip the first row. Defaults to `false`.
    #[serde(default)]
    pub has_headers: bool,
}

fn default_delimiter() -> char {
    ','
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            delimiter: default_delimiter(),
            has_headers: false,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Where the labelled table is written. Defaults to `degree_regexp.csv`.
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("degree_regexp.csv")
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            path: default_output_path(),
        }
    }
}

/// Extra seed abbreviations, keyed by abbreviation with a rank label as value
/// (e.g. `dphil = "PHD"`). They never replace a taxonomy seed.
#[derive(Debug, Default, Deserialize)]
pub struct DictionaryConfig {
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

impl Config {
    /// CSV dialect for [`crate::table::load_descriptors`], with an optional
    /// delimiter override from the command line.
    pub fn input_format(&self, delimiter_override: Option<char>) -> Result<InputFormat> {
        let delimiter = delimiter_override.unwrap_or(self.input.delimiter);
        if !delimiter.is_ascii() {
            bail!("delimiter must be a single ASCII character, got {:?}", delimiter);
        }
        Ok(InputFormat {
            delimiter: delimiter as u8,
            has_headers: self.input.has_headers,
        })
    }

    /// Resolve alias labels into ranks. Unknown labels are rejected so a typo
    /// doesn't silently drop an alias.
    pub fn aliases(&self) -> Result<Vec<(&str, Rank)>> {
        self.dictionary
            .aliases
            .iter()
            .map(|(abbr, label)| {
                Rank::from_label(label)
                    .map(|rank| (abbr.as_str(), rank))
                    .with_context(|| {
                        format!("alias {:?} maps to unknown degree {:?}", abbr, label)
                    })
            })
            .collect()
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `./.degree-normalizer/config.toml`
/// 3. `~/.config/degree-normalizer/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(working_dir: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let local_config = working_dir.join(".degree-normalizer").join("config.toml");
    if local_config.exists() {
        return read_config(&local_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("degree-normalizer")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}
