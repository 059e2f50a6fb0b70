use std::env;

use crate::error::{RemoteError, Result};

/// Construction options for the Trypod adapter.
#[derive(Debug, Clone, Default)]
pub struct Opts {
    /// Backend base URL, e.g. `http://trypod.local:9000`.
    pub url: String,
    /// Token embedded in the status and webhook management paths.
    pub token: String,
}

/// Process settings for the `trypod-remote` binary.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub opts: Opts,
}

impl Settings {
    /// Reads the process environment. Callers load `.env` first.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("TRYPOD_URL")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| RemoteError::Config("TRYPOD_URL must be set".to_string()))?;
        let token = lookup("TRYPOD_TOKEN").unwrap_or_default();
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| RemoteError::Config(format!("invalid PORT '{}': {}", raw, e)))?,
            None => 8080,
        };

        Ok(Self {
            host,
            port,
            opts: Opts { url, token },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
