//! Environment-driven service settings.
//!
//! Variables are read through [`mockable::Env`] so the loader can be driven by
//! `MockEnv` in tests.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use mockable::Env;

pub const DB_URL_ENV: &str = "DB_URL";
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
pub const PORT_ENV: &str = "PORT";
pub const HOST_ENV: &str = "HOST";
pub const DB_POOL_MAX_SIZE_ENV: &str = "DB_POOL_MAX_SIZE";
pub const VIEWS_DIR_ENV: &str = "VIEWS_DIR";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Errors raised while reading settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// A variable is present but its value cannot be used.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Runtime settings for the exercise tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    /// PostgreSQL URL. `None` selects the in-memory store.
    pub database_url: Option<String>,
    pub bind_addr: SocketAddr,
    pub pool_max_size: u32,
    /// Directory holding `index.html` for the landing page.
    pub views_dir: Option<PathBuf>,
}

impl ServiceSettings {
    /// Read settings from `env`.
    ///
    /// # Examples
    /// ```
    /// use exercise_tracker::config::ServiceSettings;
    /// use mockable::MockEnv;
    ///
    /// let mut env = MockEnv::new();
    /// env.expect_string().returning(|name| match name {
    ///     "PORT" => Some("8080".to_owned()),
    ///     _ => None,
    /// });
    ///
    /// let settings = ServiceSettings::from_env(&env).expect("valid settings");
    /// assert_eq!(settings.bind_addr.port(), 8080);
    /// assert!(settings.database_url.is_none());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidEnv`] when `PORT`, `HOST` or
    /// `DB_POOL_MAX_SIZE` cannot be parsed.
    pub fn from_env<E: Env>(env: &E) -> Result<Self, SettingsError> {
        let database_url = non_empty(env, DB_URL_ENV).or_else(|| non_empty(env, DATABASE_URL_ENV));
        let port = parse_or(env, PORT_ENV, DEFAULT_PORT, "a TCP port number")?;
        let host = parse_or(env, HOST_ENV, DEFAULT_HOST, "an IP address")?;
        let pool_max_size = parse_or(
            env,
            DB_POOL_MAX_SIZE_ENV,
            DEFAULT_POOL_MAX_SIZE,
            "a positive integer",
        )?;
        if pool_max_size == 0 {
            return Err(SettingsError::InvalidEnv {
                name: DB_POOL_MAX_SIZE_ENV,
                value: "0".to_owned(),
                expected: "a positive integer",
            });
        }

        Ok(Self {
            database_url,
            bind_addr: SocketAddr::new(host, port),
            pool_max_size,
            views_dir: non_empty(env, VIEWS_DIR_ENV).map(PathBuf::from),
        })
    }
}

fn non_empty<E: Env>(env: &E, name: &str) -> Option<String> {
    env.string(name)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_or<E, T>(
    env: &E,
    name: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, SettingsError>
where
    E: Env,
    T: std::str::FromStr,
{
    match non_empty(env, name) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| SettingsError::InvalidEnv {
                name,
                value,
                expected,
            }),
    }
}
