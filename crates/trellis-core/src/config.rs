//! Library-level configuration: overlay timing/dismissal and default theme.
//!
//! # Design
//! - Every field has a default so partial JSON documents are accepted.
//! - Validation runs after deserialization and reports the offending field.

use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Exit animation length used when none is configured.
pub const DEFAULT_EXIT_DURATION_MS: u32 = 300;
/// Upper bound accepted for the exit animation.
pub const MAX_EXIT_DURATION_MS: u32 = 5_000;

/// Errors produced while loading configuration documents.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document was not valid JSON for the expected shape.
    #[error("invalid configuration document")]
    Parse {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// A field contained a value outside its accepted range.
    #[error("invalid value for '{field}': {message}")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Human-readable error description.
        message: String,
    },
}

/// Behaviour shared by modal and drawer overlays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// How long the overlay stays mounted after closing, in milliseconds.
    pub exit_duration_ms: u32,
    /// Close when the Escape key is pressed while mounted.
    pub close_on_escape: bool,
    /// Close when the backdrop is clicked.
    pub close_on_backdrop: bool,
    /// Lock document scrolling while mounted.
    pub lock_scroll: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            exit_duration_ms: DEFAULT_EXIT_DURATION_MS,
            close_on_escape: true,
            close_on_backdrop: true,
            lock_scroll: true,
        }
    }
}

impl OverlayConfig {
    /// Check value ranges.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidField`] when `exit_duration_ms` exceeds
    /// [`MAX_EXIT_DURATION_MS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.exit_duration_ms > MAX_EXIT_DURATION_MS {
            return Err(ConfigError::InvalidField {
                field: "overlay.exit_duration_ms",
                message: format!("must be at most {MAX_EXIT_DURATION_MS}"),
            });
        }
        Ok(())
    }
}

/// Top-level configuration consumed by the component library.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Overlay defaults applied when a component does not override them.
    pub overlay: OverlayConfig,
    /// Initial theme before any stored preference is applied.
    pub theme: ThemeMode,
}

impl LibraryConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::InvalidField`] when validation fails.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|source| ConfigError::Parse { source })?;
        config.overlay.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_overlay_contract() {
        let config = OverlayConfig::default();
        assert_eq!(config.exit_duration_ms, 300);
        assert!(config.close_on_escape);
        assert!(config.close_on_backdrop);
        assert!(config.lock_scroll);
    }

    #[test]
    fn partial_documents_keep_defaults() -> Result<(), ConfigError> {
        let config = LibraryConfig::from_json(r#"{"overlay":{"close_on_escape":false}}"#)?;
        assert!(!config.overlay.close_on_escape);
        assert_eq!(config.overlay.exit_duration_ms, DEFAULT_EXIT_DURATION_MS);
        assert_eq!(config.theme, ThemeMode::Light);
        Ok(())
    }

    #[test]
    fn theme_is_read_from_document() -> Result<(), ConfigError> {
        let config = LibraryConfig::from_json(r#"{"theme":"dark"}"#)?;
        assert_eq!(config.theme, ThemeMode::Dark);
        Ok(())
    }

    #[test]
    fn oversized_exit_duration_is_rejected() {
        let err = LibraryConfig::from_json(r#"{"overlay":{"exit_duration_ms":60000}}"#)
            .expect_err("exit duration should be rejected");
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "overlay.exit_duration_ms",
                ..
            }
        ));
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let err = LibraryConfig::from_json("{").expect_err("parse should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
