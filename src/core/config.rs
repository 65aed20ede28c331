/*!
 * Simulator Configuration
 * Environment-driven settings for the front end
 */

use super::errors::{ConfigResult, ConfigurationError};
use super::limits::{
    DEFAULT_MEMORY_ROW_WIDTH, ENV_PARTITION_KB, ENV_ROW_WIDTH, ENV_SEED, ENV_TOTAL_KB,
    ENV_TRACE_JSON, MIN_MEMORY_ROW_WIDTH,
};
use super::types::Size;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Front-end configuration
///
/// Memory sizes left as `None` are prompted for interactively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    pub total_memory_kb: Option<Size>,
    pub partition_kb: Option<Size>,
    pub trace_json: bool,
    pub memory_row_width: usize,
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            total_memory_kb: None,
            partition_kb: None,
            trace_json: false,
            memory_row_width: DEFAULT_MEMORY_ROW_WIDTH,
            seed: None,
        }
    }
}

impl SimulatorConfig {
    /// Load configuration from PARTSIM_* environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let memory_row_width = parse_setting::<usize, _>(&lookup, ENV_ROW_WIDTH)?
            .unwrap_or(defaults.memory_row_width);
        if memory_row_width < MIN_MEMORY_ROW_WIDTH {
            return Err(ConfigurationError::InvalidSetting {
                key: ENV_ROW_WIDTH.to_string(),
                value: memory_row_width.to_string(),
            });
        }

        Ok(Self {
            total_memory_kb: parse_setting(&lookup, ENV_TOTAL_KB)?,
            partition_kb: parse_setting(&lookup, ENV_PARTITION_KB)?,
            trace_json: lookup(ENV_TRACE_JSON)
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            memory_row_width,
            seed: parse_setting(&lookup, ENV_SEED)?,
        })
    }

    pub fn with_memory(mut self, total_memory_kb: Size, partition_kb: Size) -> Self {
        self.total_memory_kb = Some(total_memory_kb);
        self.partition_kb = Some(partition_kb);
        self
    }
}

fn parse_setting<T, F>(lookup: &F, key: &str) -> ConfigResult<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigurationError::InvalidSetting {
                key: key.to_string(),
                value: raw,
            }),
    }
}
