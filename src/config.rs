use std::{env, net::SocketAddr};

use anyhow::{Context, Result};

pub struct Config {
    pub address: SocketAddr,
    pub database_url: Option<String>
}

impl Config {
    /// Reads the configuration from the environment, after loading `.env`
    /// if one exists.
    pub fn from_env() -> Result<Config> {
        let _ = dotenvy::dotenv();
        Config::from_vars(|key| env::var(key).ok())
    }

    pub(crate) fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Config> {
        let address = var("ADDRESS")
            .context("ADDRESS must be set! Check your .env file!")?;
        let address = address
            .parse()
            .with_context(|| format!("ADDRESS is not a valid socket address: {}", address))?;

        let database_url = var("DATABASE_URL")
            .filter(|url| !url.is_empty());

        Ok(Config { address, database_url })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::Config;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_reads_address_and_database() {
        let config = Config::from_vars(vars(&[
            ("ADDRESS", "127.0.0.1:8000"),
            ("DATABASE_URL", "postgres://cities@localhost/cities")
        ])).unwrap();

        assert_eq!(config.address.port(), 8000);
        assert_eq!(config.database_url.as_deref(), Some("postgres://cities@localhost/cities"));
    }

    #[test]
    fn test_empty_database_url_is_unset() {
        let config = Config::from_vars(vars(&[
            ("ADDRESS", "0.0.0.0:8000"),
            ("DATABASE_URL", "")
        ])).unwrap();

        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_missing_address_is_an_error() {
        let err = Config::from_vars(vars(&[])).err().unwrap();
        assert!(err.to_string().contains("ADDRESS must be set"));
    }

    #[test]
    fn test_invalid_address_is_an_error() {
        assert!(Config::from_vars(vars(&[("ADDRESS", "localhost")])).is_err());
    }
}
