use std::path::PathBuf;

const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:8080";

/// Process settings, read from the environment after `.env` is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `SERVER_ADDR`
    pub server_addr: String,
    /// `SEED_FILE`: JSON document with initial dishes and orders.
    pub seed_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            server_addr: non_empty("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.into()),
            seed_file: non_empty("SEED_FILE").map(PathBuf::from),
        }
    }
}
