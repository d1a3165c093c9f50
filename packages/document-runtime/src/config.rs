use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Record a SHA-256 of the scope state on every operation
    pub hash_state: bool,
    /// Recompute and compare recorded hashes when replaying a log
    pub verify_hashes_on_replay: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            hash_state: true,
            verify_hashes_on_replay: true,
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables
    ///
    /// - `DOCUMENT_RUNTIME_HASH_STATE` (default `true`)
    /// - `DOCUMENT_RUNTIME_VERIFY_REPLAY` (default `true`)
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = Self::default();
        Ok(Self {
            hash_state: read_flag("DOCUMENT_RUNTIME_HASH_STATE", defaults.hash_state)
                .context("DOCUMENT_RUNTIME_HASH_STATE must be a boolean")?,
            verify_hashes_on_replay: read_flag(
                "DOCUMENT_RUNTIME_VERIFY_REPLAY",
                defaults.verify_hashes_on_replay,
            )
            .context("DOCUMENT_RUNTIME_VERIFY_REPLAY must be a boolean")?,
        })
    }
}

fn read_flag(key: &str, default: bool) -> Result<bool> {
    match env::var(key) {
        Ok(raw) => parse_flag(&raw),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(e).with_context(|| format!("{} is not valid unicode", key)),
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("invalid boolean value: {:?}", other),
    }
}
