use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "fib.toml";
pub const DEFAULT_N: i64 = 35;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Settings as they appear in `fib.toml` or on the command line. Unset fields
/// fall through to the next layer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Overrides {
    pub n: Option<i64>,
    pub runs: Option<u32>,
    pub format: Option<Format>,
    pub verify: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub n: i64,
    pub runs: u32,
    pub format: Format,
    pub verify: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            n: DEFAULT_N,
            runs: 1,
            format: Format::Text,
            verify: false,
        }
    }
}

impl Config {
    pub fn apply(mut self, layer: &Overrides) -> Self {
        if let Some(n) = layer.n {
            self.n = n;
        }
        if let Some(runs) = layer.runs {
            self.runs = runs;
        }
        if let Some(format) = layer.format {
            self.format = format;
        }
        if let Some(verify) = layer.verify {
            self.verify = verify;
        }
        self
    }

    /// Defaults, then the config file, then the command line.
    pub fn resolve(file: &Overrides, cli: &Overrides) -> Self {
        Config::default().apply(file).apply(cli)
    }
}

pub fn parse(content: &str, path: &Path) -> Result<Overrides, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the config layer. With no explicit path a missing `fib.toml` is
/// simply an empty layer; an explicit path must exist.
pub fn load(explicit: Option<&Path>) -> Result<Overrides, ConfigError> {
    let path = explicit.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

    match fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("loading config from {}", path.display());
            parse(&content, path)
        }
        Err(e) if explicit.is_none() && e.kind() == io::ErrorKind::NotFound => {
            Ok(Overrides::default())
        }
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
