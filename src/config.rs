use std::{env, path::PathBuf};

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@tamilnews.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT inválido: {0}")]
    InvalidPort(String),
}

/// Credenciales del login de demostración. Se comparan literalmente.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoCredentials {
    pub email: String,
    pub password: String,
}

impl Default for DemoCredentials {
    fn default() -> Self {
        Self {
            email: DEFAULT_ADMIN_EMAIL.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub log_filter: String,
    pub public_dir: PathBuf,
    pub seed_file: Option<PathBuf>,
    pub demo: DemoCredentials,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            public_dir: PathBuf::from("public"),
            seed_file: None,
            demo: DemoCredentials::default(),
        }
    }
}

impl Config {
    /// Lee la configuración del entorno (el `.env` ya debe estar cargado).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.port,
        };

        Ok(Self {
            port,
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
            public_dir: lookup("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
            seed_file: lookup("SEED_FILE").map(PathBuf::from),
            demo: DemoCredentials {
                email: lookup("DEMO_ADMIN_EMAIL").unwrap_or(defaults.demo.email),
                password: lookup("DEMO_ADMIN_PASSWORD").unwrap_or(defaults.demo.password),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert!(config.seed_file.is_none());
        assert_eq!(config.demo, DemoCredentials::default());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("PUBLIC_DIR", "/srv/www"),
            ("SEED_FILE", "seed.json"),
            ("DEMO_ADMIN_PASSWORD", "secret"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.public_dir, PathBuf::from("/srv/www"));
        assert_eq!(config.seed_file, Some(PathBuf::from("seed.json")));
        assert_eq!(config.demo.email, DEFAULT_ADMIN_EMAIL);
        assert_eq!(config.demo.password, "secret");
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "tres mil")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }
}
