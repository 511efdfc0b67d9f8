use std::time::Duration;

use anyhow::{Context, Result, bail};
use osu_api::ClientConfig;
use osu_api::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub osu_api_key: String,
    pub osu_api_base_url: String,
    pub upstream_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let osu_api_key = lookup("OSU_API_KEY").context("Cannot load OSU_API_KEY env variable")?;
        if osu_api_key.trim().is_empty() {
            bail!("OSU_API_KEY must not be empty");
        }

        let upstream_timeout = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(secs) => {
                let secs: u64 = secs
                    .parse()
                    .context("UPSTREAM_TIMEOUT_SECS must be a number of seconds")?;
                if secs == 0 {
                    bail!("UPSTREAM_TIMEOUT_SECS must be at least 1");
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            host: lookup("HOST").context("Cannot load HOST env variable")?,
            port: lookup("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: lookup("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            osu_api_key,
            osu_api_base_url: lookup("OSU_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            upstream_timeout,
        })
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.osu_api_key.clone())
            .with_base_url(self.osu_api_base_url.clone())
            .with_timeout(self.upstream_timeout)
    }
}
