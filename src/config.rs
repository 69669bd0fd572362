use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the config file.
    ReadFile { path: PathBuf, source: std::io::Error },
    /// Failed to parse JSON.
    ParseJson { path: PathBuf, source: serde_json::Error },
    /// Validation error.
    Validation(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFile { path, source } => {
                write!(f, "failed to read config file '{}': {}", path.display(), source)
            }
            Self::ParseJson { path, source } => {
                write!(f, "failed to parse config file '{}': {}", path.display(), source)
            }
            Self::Validation(msg) => write!(f, "config validation error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReadFile { source, .. } => Some(source),
            Self::ParseJson { source, .. } => Some(source),
            Self::Validation(_) => None,
        }
    }
}

#[derive(Deserialize)]
struct ConfigFile {
    telegram_bot_token: String,
    /// Chat that matching group messages are forwarded into.
    target_chat_id: i64,
    /// Update id to resume long polling from.
    #[serde(default)]
    update_offset: i32,
    #[serde(default = "default_poll_timeout_secs")]
    poll_timeout_secs: u32,
    /// Phrases that make a message worth forwarding.
    #[serde(default)]
    keywords: Vec<String>,
}

fn default_poll_timeout_secs() -> u32 {
    60
}

pub struct Config {
    pub telegram_bot_token: String,
    pub target_chat_id: i64,
    pub update_offset: i32,
    pub poll_timeout_secs: u32,
    pub keywords: Vec<String>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config_path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&config_path)
            .map_err(|e| ConfigError::ReadFile { path: config_path.clone(), source: e })?;
        let file: ConfigFile = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseJson { path: config_path.clone(), source: e })?;

        if file.telegram_bot_token.is_empty() {
            return Err(ConfigError::Validation("telegram_bot_token is required".into()));
        }
        // Telegram tokens are formatted as {bot_id}:{secret} where bot_id is numeric
        let token_parts: Vec<&str> = file.telegram_bot_token.split(':').collect();
        if token_parts.len() != 2 || token_parts[0].parse::<u64>().is_err() || token_parts[1].is_empty() {
            return Err(ConfigError::Validation(
                "telegram_bot_token appears invalid (expected format: 123456789:ABCdefGHI...)".into()
            ));
        }
        if file.target_chat_id == 0 {
            return Err(ConfigError::Validation("target_chat_id must be a real chat id".into()));
        }

        let keywords = if file.keywords.is_empty() {
            default_keywords()
        } else {
            file.keywords
        };

        Ok(Self {
            telegram_bot_token: file.telegram_bot_token,
            target_chat_id: file.target_chat_id,
            update_offset: file.update_offset,
            poll_timeout_secs: file.poll_timeout_secs,
            keywords,
        })
    }
}

/// Seed phrases used when the config lists none.
fn default_keywords() -> Vec<String> {
    vec!["hello".to_string(), "hey world".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn assert_err<T>(result: Result<T, ConfigError>) -> ConfigError {
        match result {
            Ok(_) => panic!("expected error, got Ok"),
            Err(e) => e,
        }
    }

    #[test]
    fn test_valid_config() {
        let file = write_config(r#"{
            "telegram_bot_token": "123456789:ABCdefGHIjklMNOpqrsTUVwxyz",
            "target_chat_id": -1009999
        }"#);
        let config = Config::load(file.path()).expect("should load valid config");
        assert_eq!(config.target_chat_id, -1009999);
        assert_eq!(config.update_offset, 0);
        assert_eq!(config.poll_timeout_secs, 60);
    }

    #[test]
    fn test_default_keywords_when_absent() {
        let file = write_config(r#"{
            "telegram_bot_token": "123456789:ABCdef",
            "target_chat_id": -1009999
        }"#);
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.keywords, vec!["hello", "hey world"]);
    }

    #[test]
    fn test_explicit_keywords_are_kept() {
        let file = write_config(r#"{
            "telegram_bot_token": "123456789:ABCdef",
            "target_chat_id": -1009999,
            "keywords": ["release", "on call"]
        }"#);
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.keywords, vec!["release", "on call"]);
    }

    #[test]
    fn test_explicit_offset_and_timeout() {
        let file = write_config(r#"{
            "telegram_bot_token": "123456789:ABCdef",
            "target_chat_id": -1009999,
            "update_offset": 4100,
            "poll_timeout_secs": 10
        }"#);
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.update_offset, 4100);
        assert_eq!(config.poll_timeout_secs, 10);
    }

    #[test]
    fn test_empty_token() {
        let file = write_config(r#"{
            "telegram_bot_token": "",
            "target_chat_id": -1009999
        }"#);
        let err = assert_err(Config::load(file.path()));
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("telegram_bot_token"));
    }

    #[test]
    fn test_missing_token_field() {
        let file = write_config(r#"{ "target_chat_id": -1009999 }"#);
        let err = assert_err(Config::load(file.path()));
        assert!(matches!(err, ConfigError::ParseJson { .. }));
    }

    #[test]
    fn test_invalid_token_format_no_colon() {
        let file = write_config(r#"{
            "telegram_bot_token": "invalid_token_no_colon",
            "target_chat_id": -1009999
        }"#);
        let err = assert_err(Config::load(file.path()));
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("invalid"));
    }

    #[test]
    fn test_invalid_token_format_non_numeric_id() {
        let file = write_config(r#"{
            "telegram_bot_token": "notanumber:ABCdef",
            "target_chat_id": -1009999
        }"#);
        let err = assert_err(Config::load(file.path()));
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_missing_target_chat() {
        let file = write_config(r#"{
            "telegram_bot_token": "123456789:ABCdef"
        }"#);
        let err = assert_err(Config::load(file.path()));
        assert!(matches!(err, ConfigError::ParseJson { .. }));
    }

    #[test]
    fn test_zero_target_chat() {
        let file = write_config(r#"{
            "telegram_bot_token": "123456789:ABCdef",
            "target_chat_id": 0
        }"#);
        let err = assert_err(Config::load(file.path()));
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("target_chat_id"));
    }

    #[test]
    fn test_file_not_found() {
        let err = assert_err(Config::load("/nonexistent/path/config.json"));
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let file = write_config("{ invalid json }");
        let err = assert_err(Config::load(file.path()));
        assert!(matches!(err, ConfigError::ParseJson { .. }));
    }
}
