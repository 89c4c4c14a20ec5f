// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatcher configuration.
//!
//! Configuration is plain data with defaults for every field, so a partial TOML document is
//! enough:
//!
//! ```
//! use understory_key_dispatch::DispatchConfig;
//!
//! let config = DispatchConfig::from_toml_str(
//!     r#"
//!     [repeat]
//!     interval_ms = 40
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.repeat.delay_ms, 300);
//! assert_eq!(config.repeat.interval_ms, 40);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Errors produced while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("failed to parse dispatch config: {0}")]
    Parse(#[from] toml::de::Error),
    /// Repeat is enabled with a zero interval.
    #[error("repeat interval must be greater than zero")]
    ZeroRepeatInterval,
    /// Repeat is enabled but the runtime given to the dispatcher cannot create timers.
    #[error("key repeat needs a runtime with the time driver enabled")]
    TimeDriverDisabled,
}

/// Auto-repeat timing while a key is held.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepeatConfig {
    /// Whether held keys repeat at all.
    pub enabled: bool,
    /// Time from the down event to the first repeat, in milliseconds.
    pub delay_ms: u64,
    /// Time between subsequent repeats, in milliseconds.
    pub interval_ms: u64,
}

impl RepeatConfig {
    /// Default [`delay_ms`](Self::delay_ms).
    pub const DEFAULT_DELAY_MS: u64 = 300;
    /// Default [`interval_ms`](Self::interval_ms).
    pub const DEFAULT_INTERVAL_MS: u64 = 50;

    /// Repeat disabled.
    pub const DISABLED: Self = Self {
        enabled: false,
        delay_ms: Self::DEFAULT_DELAY_MS,
        interval_ms: Self::DEFAULT_INTERVAL_MS,
    };

    /// [`delay_ms`](Self::delay_ms) as a [`Duration`].
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// [`interval_ms`](Self::interval_ms) as a [`Duration`].
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Check the configuration for values the dispatcher cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.interval_ms == 0 {
            return Err(ConfigError::ZeroRepeatInterval);
        }
        Ok(())
    }
}

impl Default for RepeatConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            delay_ms: Self::DEFAULT_DELAY_MS,
            interval_ms: Self::DEFAULT_INTERVAL_MS,
        }
    }
}

/// Top-level configuration for a [`Dispatcher`](crate::Dispatcher).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatchConfig {
    /// Auto-repeat timing.
    pub repeat: RepeatConfig,
}

impl DispatchConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the dispatcher cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.repeat.validate()
    }
}
