//! Configuration handling for the waitlist client

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default intake endpoint
pub const DEFAULT_INTAKE_URL: &str = "https://formspree.io/f/xanblnkn";

/// Default request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the intake endpoint
pub const INTAKE_URL_ENV: &str = "NIYATI_INTAKE_URL";

/// User configuration for the waitlist client
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WaitlistConfig {
    /// Intake endpoint receiving registrations
    pub intake_url: Option<String>,
    /// Request timeout in seconds; 0 disables the timeout
    pub request_timeout_secs: Option<u64>,
    /// Show a notice when a registration could not be delivered
    pub report_delivery_failures: Option<bool>,
}

impl WaitlistConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("app", "niyati", "niyati-waitlist")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: WaitlistConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Intake endpoint: environment, then file, then default
    pub fn intake_url(&self) -> String {
        self.intake_url_with_override(std::env::var(INTAKE_URL_ENV).ok())
    }

    /// Intake endpoint with `env_value` standing in for the environment
    pub(crate) fn intake_url_with_override(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|url| !url.is_empty())
            .or_else(|| self.intake_url.clone())
            .unwrap_or_else(|| DEFAULT_INTAKE_URL.to_string())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        match self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
        {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn reports_delivery_failures(&self) -> bool {
        self.report_delivery_failures.unwrap_or(false)
    }
}
