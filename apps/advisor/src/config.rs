use std::path::PathBuf;

use anyhow::{Context, Result};

/// Runtime configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// How many recommendations the menu lists.
    pub top_n: usize,
    pub profile_path: PathBuf,
    /// Seeds the random source for reproducible sessions. `None` = OS entropy.
    pub seed: Option<u64>,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_n: 6,
            profile_path: PathBuf::from("profile.json"),
            seed: None,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let top_n = match lookup("ADVISOR_TOP_N") {
            Some(raw) => {
                let n = raw
                    .trim()
                    .parse::<usize>()
                    .context("ADVISOR_TOP_N must be a positive integer")?;
                anyhow::ensure!(n >= 1, "ADVISOR_TOP_N must be at least 1");
                n
            }
            None => defaults.top_n,
        };

        let seed = lookup("ADVISOR_SEED")
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("ADVISOR_SEED '{raw}' is not a valid u64"))
            })
            .transpose()?;

        Ok(Config {
            top_n,
            profile_path: lookup("ADVISOR_PROFILE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.profile_path),
            seed,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}
