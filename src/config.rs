use log::LevelFilter;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::sync::OnceLock;

pub const CONFIG_FILE: &str = "word_count.yaml";

static CONFIG: OnceLock<WordCountConfig> = OnceLock::new();

#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProcessorConfig {
    RemovePartialMatches,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WordCountConfig {
    pub log_file: String,
    pub log_level: LogLevel,
    /// Keep the empty words that consecutive, leading or trailing spaces produce.
    pub keep_empty_tokens: bool,
    pub pipeline: Vec<ProcessorConfig>,
}

impl Default for WordCountConfig {
    fn default() -> Self {
        Self {
            log_file: "wordcountprogram.log".to_string(),
            log_level: LogLevel::default(),
            keep_empty_tokens: true,
            pipeline: vec![ProcessorConfig::RemovePartialMatches],
        }
    }
}

impl WordCountConfig {
    pub fn from_yaml(source: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }

    pub fn load(path: &str) -> Self {
        fs::read_to_string(path)
            .map_err(|e| {
                if e.kind() != ErrorKind::NotFound {
                    eprintln!("Failed to load config file {path}: {e}, using default.")
                }
            })
            .ok()
            .and_then(|s| {
                Self::from_yaml(&s)
                    .map_err(|e| eprintln!("Failed to parse config file {path}: {e}, using default."))
                    .ok()
            })
            .unwrap_or_default()
    }
}

pub fn config() -> &'static WordCountConfig {
    CONFIG.get_or_init(|| WordCountConfig::load(CONFIG_FILE))
}
