use std::{net::SocketAddr, str::FromStr};

use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://todo.db?mode=rwc";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value `{value}`: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Which of the two document layouts the API serves.
///
/// `Flat` lists every matching note and carries the request's query string
/// into every action URL. `Paginated` adds a search form and splits notes into
/// pages linked through the `/list/` fragment endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentProfile {
    #[default]
    Flat,
    Paginated,
}

impl FromStr for DocumentProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(DocumentProfile::Flat),
            "paginated" => Ok(DocumentProfile::Paginated),
            other => Err(format!("expected `flat` or `paginated`, got `{other}`")),
        }
    }
}

/// Settings the document layer needs on every request.
#[derive(Debug, Clone)]
pub struct DocSettings {
    pub profile: DocumentProfile,
    pub page_size: usize,
    pub public_base_url: Option<String>,
}

impl Default for DocSettings {
    fn default() -> Self {
        Self {
            profile: DocumentProfile::default(),
            page_size: DEFAULT_PAGE_SIZE,
            public_base_url: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub docs: DocSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source, so tests don't
    /// have to touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let bind_addr = parse_var(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR)?;
        let max_connections: u32 = parse_var(
            &lookup,
            "DB_MAX_CONNECTIONS",
            &DEFAULT_MAX_CONNECTIONS.to_string(),
        )?;
        let profile = parse_var(&lookup, "DOCUMENT_PROFILE", "flat")?;
        let page_size: usize = parse_var(&lookup, "PAGE_SIZE", &DEFAULT_PAGE_SIZE.to_string())?;
        if page_size == 0 {
            return Err(ConfigError::Invalid {
                name: "PAGE_SIZE",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let public_base_url = lookup("PUBLIC_BASE_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());

        Ok(Config {
            database_url,
            bind_addr,
            max_connections: max_connections.max(1),
            docs: DocSettings {
                profile,
                page_size,
                public_base_url,
            },
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: ToString,
{
    let value = lookup(name)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string());

    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        value: value.clone(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).expect("defaults should be valid");
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.docs.profile, DocumentProfile::Flat);
        assert_eq!(config.docs.page_size, 5);
        assert!(config.docs.public_base_url.is_none());
    }

    #[test]
    fn profile_and_base_url_are_read() {
        let config = config_from(&[
            ("DOCUMENT_PROFILE", "Paginated"),
            ("PUBLIC_BASE_URL", "https://todo.example.com/"),
            ("PAGE_SIZE", "10"),
        ])
        .expect("config should be valid");
        assert_eq!(config.docs.profile, DocumentProfile::Paginated);
        assert_eq!(
            config.docs.public_base_url.as_deref(),
            Some("https://todo.example.com")
        );
        assert_eq!(config.docs.page_size, 10);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(config_from(&[("PAGE_SIZE", "0")]).is_err());
        assert!(config_from(&[("PAGE_SIZE", "five")]).is_err());
        assert!(config_from(&[("DOCUMENT_PROFILE", "nested")]).is_err());
        assert!(config_from(&[("BIND_ADDR", "localhost")]).is_err());
    }
}
