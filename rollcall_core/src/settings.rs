// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

#![expect(missing_docs, reason = "field names are self-descriptive")]

use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::breakpoint::{BreakpointError, Breakpoints};

/// Everything tunable about the page enhancements.
///
/// Pages can override any subset of these fields with a JSON document;
/// missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub breakpoints: Breakpoints,
    pub delays: Delays,
    pub colors: Colors,
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            delays: Delays::default(),
            colors: Colors::default(),
            log_level: "info".to_owned(),
        }
    }
}

/// Timer delays, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Delays {
    /// How long a row stays highlighted after a successful quick submit.
    pub row_flash_ms: u32,
    /// How long the error label of a failed quick submit is shown.
    pub error_label_ms: u32,
    /// When a submitting form gives its button back.
    pub loading_revert_ms: u32,
    /// When success and dismissible alerts close themselves.
    pub alert_dismiss_ms: u32,
    /// Delay before progress bars animate to their width.
    pub progress_animation_ms: u32,
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            row_flash_ms: 1500,
            error_label_ms: 2000,
            loading_revert_ms: 3000,
            alert_dismiss_ms: 5000,
            progress_animation_ms: 100,
        }
    }
}

impl Delays {
    pub fn row_flash(&self) -> Duration {
        Duration::from_millis(self.row_flash_ms.into())
    }

    pub fn error_label(&self) -> Duration {
        Duration::from_millis(self.error_label_ms.into())
    }

    pub fn loading_revert(&self) -> Duration {
        Duration::from_millis(self.loading_revert_ms.into())
    }

    pub fn alert_dismiss(&self) -> Duration {
        Duration::from_millis(self.alert_dismiss_ms.into())
    }

    pub fn progress_animation(&self) -> Duration {
        Duration::from_millis(self.progress_animation_ms.into())
    }
}

/// Highlight colours for table rows.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Colors {
    pub row_flash: String,
    pub row_hover: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            row_flash: "#d4edda".to_owned(),
            row_hover: "#f0f0f0".to_owned(),
        }
    }
}

/// Reasons a [`Settings`] value can't be used.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid breakpoints: {0}")]
    Breakpoints(#[from] BreakpointError),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

impl Settings {
    /// Checks the fields serde can't check on its own.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.breakpoints.validate()?;
        self.max_level()?;
        Ok(())
    }

    pub fn max_level(&self) -> Result<tracing::Level, SettingsError> {
        tracing::Level::from_str(&self.log_level)
            .map_err(|_| SettingsError::LogLevel(self.log_level.clone()))
    }
}
