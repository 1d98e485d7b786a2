//! Engine configuration
//!
//! Defaults are the device build's timings. Every value can be overridden from
//! the environment:
//!
//! - `BLOCKFALL_FALL_MS`: gravity interval (default 1)
//! - `BLOCKFALL_DEBOUNCE_MS`: pause after an applied button press (default 100)
//! - `BLOCKFALL_FRAME_MS`: pause after each rendered frame (default 50)
//! - `BLOCKFALL_NOTE_GAP_MS`: silence between notes (default 50)
//! - `BLOCKFALL_GAME_OVER_HOLD_MS`: how long the summary stays up (default 10000)
//! - `BLOCKFALL_MUTE`: `1`/`true` starts with audio disabled
//! - `BLOCKFALL_SEED`: piece RNG seed (default derived from the wall clock)
//! - `BLOCKFALL_LOG_PATH`: write logs to this file instead of stderr

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::types::{
    DEFAULT_DEBOUNCE_MS, DEFAULT_FALL_INTERVAL_MS, DEFAULT_FRAME_MS, DEFAULT_GAME_OVER_HOLD_MS,
    DEFAULT_NOTE_GAP_MS,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub fall_interval_ms: u32,
    pub debounce_ms: u32,
    pub frame_ms: u32,
    pub note_gap_ms: u32,
    pub game_over_hold_ms: u32,
    pub audio_enabled: bool,
    pub seed: u32,
    pub log_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fall_interval_ms: DEFAULT_FALL_INTERVAL_MS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            frame_ms: DEFAULT_FRAME_MS,
            note_gap_ms: DEFAULT_NOTE_GAP_MS,
            game_over_hold_ms: DEFAULT_GAME_OVER_HOLD_MS,
            audio_enabled: true,
            seed: 1,
            log_path: None,
        }
    }
}

impl EngineConfig {
    /// Create from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment, or a map in tests).
    ///
    /// Unset keys keep their defaults; set but unparseable keys are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let seed = match parse_var(&lookup, "BLOCKFALL_SEED")? {
            Some(seed) => seed,
            None => wall_clock_seed(),
        };

        let audio_enabled = match lookup("BLOCKFALL_MUTE") {
            Some(v) => !parse_bool("BLOCKFALL_MUTE", &v)?,
            None => defaults.audio_enabled,
        };

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Ok(Self {
            fall_interval_ms: parse_var(&lookup, "BLOCKFALL_FALL_MS")?
                .unwrap_or(defaults.fall_interval_ms),
            debounce_ms: parse_var(&lookup, "BLOCKFALL_DEBOUNCE_MS")?
                .unwrap_or(defaults.debounce_ms),
            frame_ms: parse_var(&lookup, "BLOCKFALL_FRAME_MS")?.unwrap_or(defaults.frame_ms),
            note_gap_ms: parse_var(&lookup, "BLOCKFALL_NOTE_GAP_MS")?
                .unwrap_or(defaults.note_gap_ms),
            game_over_hold_ms: parse_var(&lookup, "BLOCKFALL_GAME_OVER_HOLD_MS")?
                .unwrap_or(defaults.game_over_hold_ms),
            audio_enabled,
            seed,
            log_path,
        })
    }
}

fn parse_var(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<u32>, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<u32>()
        .map(Some)
        .map_err(|e| ConfigError::InvalidValue {
            var,
            value: raw.clone(),
            reason: e.to_string(),
        })
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: raw.to_string(),
            reason: "expected a boolean".to_string(),
        }),
    }
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_keys_keep_device_defaults() {
        let config = EngineConfig::from_lookup(lookup_from(&[("BLOCKFALL_SEED", "9")])).unwrap();
        assert_eq!(
            config,
            EngineConfig {
                seed: 9,
                ..EngineConfig::default()
            }
        );
        assert_eq!(config.fall_interval_ms, 1);
        assert_eq!(config.game_over_hold_ms, 10_000);
    }

    #[test]
    fn overrides_are_applied() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("BLOCKFALL_FALL_MS", "500"),
            ("BLOCKFALL_DEBOUNCE_MS", " 80 "),
            ("BLOCKFALL_MUTE", "true"),
            ("BLOCKFALL_LOG_PATH", "/tmp/blockfall.log"),
        ]))
        .unwrap();
        assert_eq!(config.fall_interval_ms, 500);
        assert_eq!(config.debounce_ms, 80);
        assert!(!config.audio_enabled);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/blockfall.log")));
    }

    #[test]
    fn empty_log_path_is_ignored() {
        let config =
            EngineConfig::from_lookup(lookup_from(&[("BLOCKFALL_LOG_PATH", "  ")])).unwrap();
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn bad_number_names_the_variable() {
        let err = EngineConfig::from_lookup(lookup_from(&[("BLOCKFALL_FRAME_MS", "fast")]))
            .unwrap_err();
        let ConfigError::InvalidValue { var, value, .. } = &err;
        assert_eq!(*var, "BLOCKFALL_FRAME_MS");
        assert_eq!(value, "fast");
        assert!(err.to_string().contains("BLOCKFALL_FRAME_MS"));
    }

    #[test]
    fn bad_boolean_is_rejected() {
        assert!(EngineConfig::from_lookup(lookup_from(&[("BLOCKFALL_MUTE", "maybe")])).is_err());
    }
}
