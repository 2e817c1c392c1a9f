use log::info;
use serde::{ Deserialize, Serialize };
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::cli::Args;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("PASTEBIN_API_DEVELOPER_KEY is not set")]
    MissingDeveloperKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasteDefaults {
    pub expire: String,
    pub format: String,
    pub visibility: String,
}

impl Default for PasteDefaults {
    fn default() -> Self {
        Self {
            expire: "N".to_string(),
            format: "text".to_string(),
            visibility: "public".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    pub paste_defaults: PasteDefaults,
    pub include_raw_link: bool,
}

#[derive(Clone)]
pub struct Credentials {
    pub api_developer_key: String,
    pub api_user_key: Option<String>,
}

impl Credentials {
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let api_developer_key = args.api_developer_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingDeveloperKey)?;
        Ok(Self {
            api_developer_key,
            api_user_key: args.api_user_key.clone().filter(|k| !k.trim().is_empty()),
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_developer_key", &"<redacted>")
            .field("api_user_key", &self.api_user_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<PluginConfig, ConfigError> {
    let display = path.as_ref().display().to_string();
    let json_str = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&json_str).map_err(|source| ConfigError::Json {
        path: display,
        source,
    })
}

impl PluginConfig {
    /// Built-in defaults, overlaid by the config file, overlaid by flags/env.
    pub fn resolve(args: &Args) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => {
                info!("Loading plugin config from: {}", path.display());
                load_config_from_file(path)?
            }
            None => PluginConfig::default(),
        };
        if let Some(expire) = &args.expire {
            config.paste_defaults.expire = expire.clone();
        }
        if let Some(format) = &args.format {
            config.paste_defaults.format = format.clone();
        }
        if let Some(visibility) = &args.visibility {
            config.paste_defaults.visibility = visibility.clone();
        }
        if let Some(include_raw_link) = args.include_raw_link {
            config.include_raw_link = include_raw_link;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["pastebin-share"];
        argv.extend_from_slice(extra);
        argv.push("completions");
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = PluginConfig::default();
        assert_eq!(config.paste_defaults.expire, "N");
        assert_eq!(config.paste_defaults.format, "text");
        assert_eq!(config.paste_defaults.visibility, "public");
        assert!(!config.include_raw_link);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"paste_defaults": {{"expire": "1W"}}, "include_raw_link": true}}"#).unwrap();

        let config = load_config_from_file(file.path()).unwrap();
        assert_eq!(config.paste_defaults.expire, "1W");
        assert_eq!(config.paste_defaults.visibility, "public");
        assert!(config.include_raw_link);
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"paste_defaults": {{"expire": "1W", "format": "python"}}}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = PluginConfig::resolve(
            &args(&["--config", path.as_str(), "--expire", "1D", "--include-raw-link", "true"])
        ).unwrap();
        assert_eq!(config.paste_defaults.expire, "1D");
        assert_eq!(config.paste_defaults.format, "python");
        assert!(config.include_raw_link);
    }

    #[test]
    fn test_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from_file(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_missing_developer_key_is_rejected() {
        let mut without_key = args(&[]);
        without_key.api_developer_key = None;
        assert!(matches!(Credentials::from_args(&without_key), Err(ConfigError::MissingDeveloperKey)));

        let mut blank_key = args(&[]);
        blank_key.api_developer_key = Some("   ".to_string());
        assert!(matches!(Credentials::from_args(&blank_key), Err(ConfigError::MissingDeveloperKey)));
    }

    #[test]
    fn test_credentials_with_developer_key() {
        let with_key = args(&["--api-developer-key", "dev", "--api-user-key", ""]);
        let credentials = Credentials::from_args(&with_key).unwrap();
        assert_eq!(credentials.api_developer_key, "dev");
        assert_eq!(credentials.api_user_key, None);
        assert!(!format!("{:?}", credentials).contains("dev\""));
    }
}
