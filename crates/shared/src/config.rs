use anyhow::{Context, Result};
use chrono_tz::Tz;
use std::env;
use std::path::PathBuf;

use crate::selection::ReplayPolicy;

pub const DEFAULT_HISTORY_FILE: &str = "daily_history.json";
pub const DEFAULT_MAX_HISTORY: usize = 90;
pub const DEFAULT_UPDATE_TIME: &str = "09:00";

#[derive(Debug, Clone)]
pub struct Config {
    pub output_dir: PathBuf,
    pub history_file: PathBuf,
    pub max_history: usize,
    pub timezone: Tz,
    /// Scheduled time of the daily run, only shown in the PDF
    pub update_time: String,
    pub replay: ReplayPolicy,
    /// Set when the history path came from DAILY_HISTORY_FILE or the CLI,
    /// so moving the output directory leaves it alone
    pub(crate) history_file_explicit: bool,
}

impl Default for Config {
    fn default() -> Self {
        let output_dir = PathBuf::from(".");
        Self {
            history_file: output_dir.join(DEFAULT_HISTORY_FILE),
            output_dir,
            max_history: DEFAULT_MAX_HISTORY,
            timezone: chrono_tz::Europe::Berlin,
            update_time: DEFAULT_UPDATE_TIME.to_string(),
            replay: ReplayPolicy::Reuse,
            history_file_explicit: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Try to load .env from multiple locations
        Self::try_load_dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let output_dir = get("DAILY_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);

        let explicit_history = get("DAILY_HISTORY_FILE").map(PathBuf::from);
        let history_file_explicit = explicit_history.is_some();
        let history_file =
            explicit_history.unwrap_or_else(|| output_dir.join(DEFAULT_HISTORY_FILE));

        let max_history = match get("DAILY_HISTORY_MAX") {
            Some(raw) => raw.trim().parse::<usize>().with_context(|| {
                format!("DAILY_HISTORY_MAX must be a positive number, got {:?}", raw)
            })?,
            None => defaults.max_history,
        };

        let timezone = match get("DAILY_TIMEZONE") {
            Some(raw) => raw.trim().parse::<Tz>().map_err(|e| {
                anyhow::anyhow!("DAILY_TIMEZONE {:?} is not a known IANA zone: {}", raw, e)
            })?,
            None => defaults.timezone,
        };

        let update_time = get("DAILY_UPDATE_TIME")
            .map(|v| v.trim().to_string())
            .unwrap_or(defaults.update_time);

        let force_new = flag(&get, "FORCE_NEW_SELECTION", false);
        let reuse_same_day = flag(&get, "REUSE_SAME_DAY", true);
        let replay = if force_new || !reuse_same_day {
            ReplayPolicy::ForceNew
        } else {
            ReplayPolicy::Reuse
        };

        let config = Self {
            output_dir,
            history_file,
            max_history,
            timezone,
            update_time,
            replay,
            history_file_explicit,
        };
        config.validate()?;
        Ok(config)
    }

    /// Move the output directory. A derived history path moves with it.
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        if !self.history_file_explicit {
            self.history_file = output_dir.join(DEFAULT_HISTORY_FILE);
        }
        self.output_dir = output_dir;
        self
    }

    pub fn with_history_file(mut self, history_file: PathBuf) -> Self {
        self.history_file = history_file;
        self.history_file_explicit = true;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_history == 0 {
            anyhow::bail!("DAILY_HISTORY_MAX must be at least 1");
        }
        Ok(())
    }

    fn try_load_dotenv() {
        // Try locations in order of preference:

        // 1. Current directory (for development)
        if dotenvy::dotenv().is_ok() {
            return;
        }

        // 2. ~/.config/daily-chronik/.env (standard config location)
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("daily-chronik").join(".env");
            if config_path.exists() && dotenvy::from_path(&config_path).is_ok() {
                return;
            }
        }

        // 3. ~/.env (home directory)
        if let Some(home_dir) = dirs::home_dir() {
            let home_path = home_dir.join(".env");
            if home_path.exists() {
                let _ = dotenvy::from_path(&home_path);
            }
        }

        // If none found, that's okay - the scheduler may set variables directly
    }
}

/// Parse a boolean flag; unknown spellings fall back to `default`
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn flag<F>(get: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
            tracing::warn!(key, value = %raw, default, "unrecognized flag value, using default");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.history_file, PathBuf::from(".").join("daily_history.json"));
        assert_eq!(config.max_history, 90);
        assert_eq!(config.timezone, chrono_tz::Europe::Berlin);
        assert_eq!(config.update_time, "09:00");
        assert_eq!(config.replay, ReplayPolicy::Reuse);
    }

    #[test]
    fn test_history_file_follows_output_dir() {
        let config = config_from(&[("DAILY_OUTPUT_DIR", "/srv/site")]).unwrap();
        assert_eq!(config.history_file, PathBuf::from("/srv/site/daily_history.json"));

        let config = config_from(&[
            ("DAILY_OUTPUT_DIR", "/srv/site"),
            ("DAILY_HISTORY_FILE", "/var/lib/history.json"),
        ])
        .unwrap();
        assert_eq!(config.history_file, PathBuf::from("/var/lib/history.json"));
    }

    // ==================== Override Tests ====================

    #[test]
    fn test_output_dir_override_moves_default_history() {
        let config = config_from(&[("DAILY_OUTPUT_DIR", "/srv/site")])
            .unwrap()
            .with_output_dir(PathBuf::from("/tmp/out"));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.history_file, PathBuf::from("/tmp/out/daily_history.json"));
    }

    #[test]
    fn test_output_dir_override_keeps_explicit_history() {
        let config = config_from(&[("DAILY_HISTORY_FILE", "/var/lib/history.json")])
            .unwrap()
            .with_output_dir(PathBuf::from("/tmp/out"));
        assert_eq!(config.history_file, PathBuf::from("/var/lib/history.json"));

        let config = config_from(&[])
            .unwrap()
            .with_history_file(PathBuf::from("/state/h.json"))
            .with_output_dir(PathBuf::from("/tmp/out"));
        assert_eq!(config.history_file, PathBuf::from("/state/h.json"));
    }

    #[test]
    fn test_empty_history_file_counts_as_unset() {
        let config = config_from(&[("DAILY_HISTORY_FILE", "")])
            .unwrap()
            .with_output_dir(PathBuf::from("/tmp/out"));
        assert_eq!(config.history_file, PathBuf::from("/tmp/out/daily_history.json"));

        let config = config_from(&[("DAILY_HISTORY_FILE", "  ")])
            .unwrap()
            .with_output_dir(PathBuf::from("/tmp/out"));
        assert_eq!(config.history_file, PathBuf::from("/tmp/out/daily_history.json"));
    }

    // ==================== Flag Tests ====================

    #[test]
    fn test_force_new_flag() {
        let config = config_from(&[("FORCE_NEW_SELECTION", "true")]).unwrap();
        assert_eq!(config.replay, ReplayPolicy::ForceNew);

        let config = config_from(&[("FORCE_NEW_SELECTION", "0")]).unwrap();
        assert_eq!(config.replay, ReplayPolicy::Reuse);
    }

    #[test]
    fn test_disabling_reuse_forces_new() {
        let config = config_from(&[("REUSE_SAME_DAY", "off")]).unwrap();
        assert_eq!(config.replay, ReplayPolicy::ForceNew);
    }

    #[test]
    fn test_unknown_flag_value_uses_default() {
        let config = config_from(&[("FORCE_NEW_SELECTION", "maybe")]).unwrap();
        assert_eq!(config.replay, ReplayPolicy::Reuse);
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = config_from(&[("DAILY_HISTORY_MAX", " "), ("REUSE_SAME_DAY", "")]).unwrap();
        assert_eq!(config.max_history, 90);
        assert_eq!(config.replay, ReplayPolicy::Reuse);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag(" YES "), Some(true));
        assert_eq!(parse_flag("On"), Some(true));
        assert_eq!(parse_flag("false"), Some(false));
        assert_eq!(parse_flag("2"), None);
    }

    #[test]
    fn test_invalid_max_history() {
        assert!(config_from(&[("DAILY_HISTORY_MAX", "many")]).is_err());
        assert!(config_from(&[("DAILY_HISTORY_MAX", "0")]).is_err());
        assert_eq!(
            config_from(&[("DAILY_HISTORY_MAX", "7")]).unwrap().max_history,
            7
        );
    }

    #[test]
    fn test_timezone() {
        let config = config_from(&[("DAILY_TIMEZONE", "America/New_York")]).unwrap();
        assert_eq!(config.timezone, chrono_tz::America::New_York);
        assert!(config_from(&[("DAILY_TIMEZONE", "Mars/Olympus")]).is_err());
    }
}
