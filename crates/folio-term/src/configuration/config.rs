#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path;
use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

use crate::domain::services::Pacing;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ConfigFile,
    DocumentUrl,
    TypingDelay,
    ProgressDelay,
    FetchTimeout,
}

impl ConfigKey {
    pub fn is_duration(&self) -> bool {
        return matches!(
            self,
            ConfigKey::TypingDelay | ConfigKey::ProgressDelay | ConfigKey::FetchTimeout
        );
    }
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let config_path = dirs::config_dir()
            .unwrap_or_else(|| return path::PathBuf::from("."))
            .join("folio/config.toml");

        let res = match key {
            ConfigKey::DocumentUrl => "http://127.0.0.1:5000/static/portfolio.json".to_string(),
            ConfigKey::TypingDelay => "5".to_string(),
            ConfigKey::ProgressDelay => "500".to_string(),
            ConfigKey::FetchTimeout => "10000".to_string(),

            // Special
            ConfigKey::ConfigFile => config_path.to_string_lossy().to_string(),
        };

        return res;
    }

    /// Reads a millisecond value.
    pub fn duration(key: ConfigKey) -> Result<Duration> {
        let mut val = Config::get(key);
        if val.is_empty() {
            val = Config::default(key);
        }

        return match parse_millis(&val) {
            Ok(millis) => Ok(Duration::from_millis(millis)),
            Err(_) => bail!("invalid value for '{key}': {val} (expected milliseconds)"),
        };
    }

    pub fn pacing() -> Result<Pacing> {
        return Ok(Pacing {
            typing_delay: Config::duration(ConfigKey::TypingDelay)?,
            progress_delay: Config::duration(ConfigKey::ProgressDelay)?,
        });
    }

    pub async fn load(cmd: Command, clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }
        Config::set(ConfigKey::ConfigFile, &config_file);

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(&config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                if key == ConfigKey::ConfigFile {
                    continue;
                }

                if let Some(val) = doc.get(&key.to_string()) {
                    // Use clap possible values to do validation.
                    let mut possible_values = vec![];
                    if let Some(arg) = cmd
                        .get_arguments()
                        .find(|e| return e.get_long() == Some(key.to_string().as_str()))
                    {
                        possible_values = arg
                            .get_possible_values()
                            .iter()
                            .map(|e| return e.get_name().to_string())
                            .collect::<Vec<String>>();
                    }

                    let val_str = if let Some(val_int) = val.as_integer() {
                        val_int.to_string()
                    } else if let Some(val_str) = val.as_str() {
                        val_str.to_string()
                    } else {
                        bail!("config.toml has an unsupported value for key '{key}'");
                    };

                    if val_str.is_empty() {
                        continue;
                    }
                    if !possible_values.is_empty() && !possible_values.contains(&val_str) {
                        bail!(format!("config.toml has an invalid value for key '{key}': {val_str}\nPossible values are: {}", possible_values.join(", ")));
                    }
                    if key.is_duration() && parse_millis(&val_str).is_err() {
                        bail!("config.toml has an invalid value for key '{key}': {val_str} (expected milliseconds)");
                    }

                    Config::set(key, &val_str);
                }
            }
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::set(key, val)
                }
            }
        }

        tracing::debug!(
            config_file = Config::get(ConfigKey::ConfigFile),
            document_url = Config::get(ConfigKey::DocumentUrl),
            typing_delay = Config::get(ConfigKey::TypingDelay),
            progress_delay = Config::get(ConfigKey::ProgressDelay),
            fetch_timeout = Config::get(ConfigKey::FetchTimeout),
            "config"
        );

        return Ok(());
    }
}

pub fn parse_millis(val: &str) -> Result<u64, std::num::ParseIntError> {
    return val.trim().parse::<u64>();
}
