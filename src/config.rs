use log::LevelFilter;
use serde::Deserialize;
use std::{env, fs::read_to_string, path::Path, path::PathBuf};

/// The viewer version extracted from the Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable key to load the config from
const CONFIG_ENV_KEY: &str = "LV_CONFIG_JSON";

/// Loads the config from the [CONFIG_ENV_KEY] environment variable or
/// from a local config.json file. Returns [None] when neither is present
/// or the present one cannot be parsed
pub fn load_config() -> Option<Config> {
    // Attempt to load the config from the env
    if let Ok(env) = env::var(CONFIG_ENV_KEY) {
        let config: Config = match serde_json::from_str(&env) {
            Ok(value) => value,
            Err(err) => {
                eprintln!("Failed to load env config (Using default): {:?}", err);
                return None;
            }
        };
        return Some(config);
    }

    // Attempt to load the config from disk
    let file = Path::new("config.json");
    if !file.exists() {
        return None;
    }

    let data = match read_to_string(file) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Failed to load config file (Using defaults): {:?}", err);
            return None;
        }
    };

    let config: Config = match serde_json::from_str(&data) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Failed to load config file (Using default): {:?}", err);
            return None;
        }
    };

    Some(config)
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scheme, host and port of the server hosting the leaderboard endpoint
    pub base_url: String,
    /// Optional request timeout, transport defaults are used when unset
    pub timeout_secs: Option<u64>,
    pub logging: LevelFilter,
    pub logging_dir: String,
    /// File to write the rendered page to, stdout is used when unset
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: None,
            logging: LevelFilter::Info,
            logging_dir: "data/logs".to_string(),
            output: None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Config;
    use log::LevelFilter;
    use std::path::Path;

    /// Missing fields fall back to their defaults
    #[test]
    fn test_partial_config() {
        let config: Config =
            serde_json::from_str(r#"{ "base_url": "http://scores.local:9000" }"#).unwrap();

        assert_eq!(config.base_url, "http://scores.local:9000");
        assert_eq!(config.timeout_secs, None);
        assert_eq!(config.logging, LevelFilter::Info);
        assert_eq!(config.logging_dir, "data/logs");
        assert!(config.output.is_none());
    }

    #[test]
    fn test_full_config() {
        let config: Config = serde_json::from_str(
            r#"{
                "base_url": "https://example.org",
                "timeout_secs": 5,
                "logging": "OFF",
                "logging_dir": "logs",
                "output": "top10.html"
            }"#,
        )
        .unwrap();

        assert_eq!(config.timeout_secs, Some(5));
        assert_eq!(config.logging, LevelFilter::Off);
        assert_eq!(config.logging_dir, "logs");
        assert_eq!(config.output.as_deref(), Some(Path::new("top10.html")));
    }
}
