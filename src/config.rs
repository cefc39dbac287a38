//! Configuration management for the lead service.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is loaded first if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::fmt;

/// Default SMTP relay host.
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Default SMTP submission port (STARTTLS).
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Credentials and endpoint of the mail relay.
#[derive(Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    /// Relay account, also used as the sender address
    pub user: String,

    /// Relay password or app password
    pub pass: String,

    /// Relay host (default: smtp.gmail.com)
    pub host: String,

    /// Relay port (default: 587)
    pub port: u16,
}

impl fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("user", &self.user)
            .field("pass", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

/// Configuration for the lead service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind (default: "0.0.0.0")
    pub bind_addr: String,

    /// HTTP port (default: 3000)
    pub port: u16,

    /// Mail relay settings; `None` disables lead notifications
    pub smtp: Option<SmtpSettings>,

    /// Explicit notification recipient
    pub lead_email: Option<String>,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `SMTP_USER` / `SMTP_PASS`: relay credentials; notifications are
    ///   disabled unless both are set and non-empty
    /// - `LEAD_EMAIL`: notification recipient (default: `SMTP_USER`)
    /// - `SMTP_HOST`: relay host (default: smtp.gmail.com)
    /// - `SMTP_PORT`: relay port (default: 587)
    /// - `BIND_ADDR`: interface to bind (default: 0.0.0.0)
    /// - `PORT`: HTTP port (default: 3000)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let smtp = match (non_empty_var("SMTP_USER"), non_empty_var("SMTP_PASS")) {
            (Some(user), Some(pass)) => Some(SmtpSettings {
                user,
                pass,
                host: non_empty_var("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
                port: Self::parse_env_port("SMTP_PORT", DEFAULT_SMTP_PORT)?,
            }),
            _ => None,
        };

        Ok(Config {
            bind_addr: non_empty_var("BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: Self::parse_env_port("PORT", 3000)?,
            smtp,
            lead_email: non_empty_var("LEAD_EMAIL"),
            log_level: non_empty_var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Address the HTTP server listens on.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Who receives lead notifications: `LEAD_EMAIL`, else the relay account.
    pub fn lead_recipient(&self) -> Option<&str> {
        self.lead_email
            .as_deref()
            .or_else(|| self.smtp.as_ref().map(|s| s.user.as_str()))
    }

    /// Parse an environment variable as a port number with a default value.
    fn parse_env_port(var_name: &str, default: u16) -> ConfigResult<u16> {
        match non_empty_var(var_name) {
            Some(val) => match val.parse::<u16>() {
                Ok(port) if port > 0 => Ok(port),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a port number between 1-65535, got: {}", val),
                }),
            },
            None => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: "0.0.0.0".to_string(),
            port: 3000,
            smtp: None,
            lead_email: None,
            log_level: "info".to_string(),
        }
    }
}

/// Read a variable, treating an empty value as unset.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}
