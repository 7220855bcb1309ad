//! Service settings loaded via OrthoConfig.
//!
//! Values layer CLI flags over `CUSTOMER_SERVICE_*` environment variables over
//! an optional configuration file. Every field is optional; the accessors
//! fall back to the defaults below.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{DEFAULT_BLOCKED_EMAIL_DOMAINS, NamePolicy, ValidationConfig};

/// Listener address used when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Reasons the settings cannot be turned into runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// `name_policy` is not a known policy name.
    #[error("unknown name policy `{0}`; expected `ascii-letters` or `letters-with-punctuation`")]
    UnknownNamePolicy(String),
    /// `bind_addr` is not a socket address.
    #[error("invalid bind address `{value}`: {message}")]
    InvalidBindAddr {
        /// Configured value.
        value: String,
        /// Parser diagnostic.
        message: String,
    },
}

/// Customer service settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CUSTOMER_SERVICE")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// `ascii-letters` (default) or `letters-with-punctuation`.
    pub name_policy: Option<String>,
    /// Punctuation accepted by `letters-with-punctuation`.
    pub name_punctuation: Option<String>,
    /// Comma-separated email domains new customers may not use.
    pub blocked_email_domains: Option<String>,
    /// Load the demo customers into the in-memory store on startup.
    #[ortho_config(default = false)]
    pub seed_demo_data: bool,
}

impl AppSettings {
    /// Configured listener address, or [`DEFAULT_BIND_ADDR`].
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidBindAddr`] when the value does not
    /// parse as a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err: std::net::AddrParseError| SettingsError::InvalidBindAddr {
            value: raw.to_owned(),
            message: err.to_string(),
        })
    }

    /// Configured name policy, defaulting to ASCII letters.
    ///
    /// # Errors
    /// Returns [`SettingsError::UnknownNamePolicy`] for unrecognised names.
    pub fn name_policy(&self) -> Result<NamePolicy, SettingsError> {
        match self.name_policy.as_deref().map(str::trim) {
            None | Some("" | "ascii-letters") => Ok(NamePolicy::AsciiLetters),
            Some("letters-with-punctuation") => Ok(self.name_punctuation.as_ref().map_or_else(
                NamePolicy::letters_with_default_punctuation,
                |punctuation| NamePolicy::LettersWithPunctuation(punctuation.clone()),
            )),
            Some(other) => Err(SettingsError::UnknownNamePolicy(other.to_owned())),
        }
    }

    /// Configured block-list, or [`DEFAULT_BLOCKED_EMAIL_DOMAINS`].
    ///
    /// An empty value disables domain blocking.
    #[must_use]
    pub fn blocked_email_domains(&self) -> Vec<String> {
        self.blocked_email_domains.as_deref().map_or_else(
            || DEFAULT_BLOCKED_EMAIL_DOMAINS.map(str::to_owned).into(),
            |raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|domain| !domain.is_empty())
                    .map(str::to_owned)
                    .collect()
            },
        )
    }

    /// Validation pipeline configuration derived from these settings.
    ///
    /// # Errors
    /// See [`AppSettings::name_policy`].
    pub fn validation_config(&self) -> Result<ValidationConfig, SettingsError> {
        Ok(ValidationConfig::new(
            self.name_policy()?,
            self.blocked_email_domains(),
        ))
    }
}
