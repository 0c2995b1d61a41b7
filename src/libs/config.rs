use {
    anyhow::{bail, Result},
    serde::{Deserialize, Serialize},
    std::{fmt::Debug, str::FromStr, sync::Once},
};

/// Load `.env` into the process environment.  A missing or unreadable
/// file is not fatal: whatever is already exported is used instead.
/// Only the first call does any work; `env_lazy!` statics and `init`
/// both go through here.
pub fn load_env() {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        if let Err(e) = dotenv::dotenv() {
            crate::warn!("Warning: .env file not loaded ({e}). Using environment variables instead.");
        }
    });
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub private_key: String,
    pub rpc_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup.  Only presence is checked; values are
    /// taken as-is and bad ones surface when they are first used.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(rpc_url) = lookup("ALCHEMY_URL") else {
            bail!("config.rs: ALCHEMY_URL is not set");
        };
        let private_key = lookup("PRIVATE_KEY").unwrap_or_else(|| {
            crate::warn!("config.rs: PRIVATE_KEY is not set");
            String::new()
        });
        Ok(Self {
            private_key,
            rpc_url,
        })
    }

    /// Parse env var to T; fall back to typed default.
    pub fn get_var_t<T>(key: &str, default: T) -> T
    where
        T: FromStr,
        <T as FromStr>::Err: Debug,
    {
        std::env::var(key)
            .ok()
            .and_then(|s| s.parse::<T>().ok())
            .unwrap_or(default)
    }
}
