use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "nlsh.toml";
/// Environment keys that override `[web]`.
const WEB_ENV_KEYS: &[&str] = &["PORT", "NLSH_HOST"];

#[derive(Debug, Deserialize, Default)]
pub struct NlshConfig {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub terminal: TerminalConfig,
    /// `.env` then process values for [`WEB_ENV_KEYS`], applied by [`NlshConfig::web_settings`].
    #[serde(skip)]
    pub web_env: Vec<(String, String)>,
}

impl NlshConfig {
    /// `[web]` with environment overrides on top. Only the web front end needs this.
    pub fn web_settings(&self) -> Result<WebConfig> {
        let mut web = self.web.clone();
        apply_env(&mut web, self.web_env.iter().cloned())?;
        Ok(web)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5001,
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct TerminalConfig {
    pub history_file: Option<PathBuf>,
    pub color: Option<bool>,
}

/// Layers, lowest first: defaults, nlsh.toml, .env, process environment.
/// Web overrides are collected here but parsed in [`NlshConfig::web_settings`].
/// CLI flags are applied by the caller on top.
pub fn load_config(dir: &Path) -> Result<NlshConfig> {
    let config_path = dir.join(CONFIG_FILE);
    let mut config = if config_path.exists() {
        let content = fs::read_to_string(&config_path).context("Failed to read nlsh.toml")?;
        parse_config(&content)?
    } else {
        NlshConfig::default()
    };

    // .env or .env.<NLSH_ENV>
    let env_filename = env::var("NLSH_ENV")
        .map(|v| format!(".env.{}", v))
        .unwrap_or_else(|_| ".env".to_string());
    let env_path = dir.join(&env_filename);

    if env_path.exists() {
        info!("Loading environment from: {}", env_filename);
        for item in dotenvy::from_path_iter(&env_path)? {
            let (key, value) = item?;
            if WEB_ENV_KEYS.contains(&key.as_str()) {
                config.web_env.push((key, value));
            }
        }
    }

    for key in WEB_ENV_KEYS {
        match env::var(key) {
            Ok(value) => config.web_env.push((key.to_string(), value)),
            Err(env::VarError::NotPresent) => {}
            Err(env::VarError::NotUnicode(_)) => warn!("Ignoring {}: not valid UTF-8", key),
        }
    }
    Ok(config)
}

pub fn parse_config(content: &str) -> Result<NlshConfig> {
    toml::from_str(content).context("Failed to parse nlsh.toml")
}

pub fn apply_env<I>(web: &mut WebConfig, vars: I) -> Result<()>
where
    I: IntoIterator<Item = (String, String)>,
{
    for (key, value) in vars {
        match key.as_str() {
            "PORT" => {
                web.port = value
                    .trim()
                    .parse()
                    .with_context(|| format!("PORT must be a port number, got '{}'", value))?;
            }
            "NLSH_HOST" => web.host = value.trim().to_string(),
            _ => {}
        }
    }
    Ok(())
}

/// History file: configured path, else `~/.nlsh_history`.
pub fn history_path(config: &NlshConfig) -> Option<PathBuf> {
    config.terminal.history_file.clone().or_else(|| {
        env::var_os("HOME")
            .or_else(|| env::var_os("USERPROFILE"))
            .map(|home| PathBuf::from(home).join(".nlsh_history"))
    })
}
