//! Process Configuration
//!
//! Read once at startup from the environment (after `.env` is loaded).
//! Missing or malformed required values abort startup.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use axum::http::HeaderValue;
use platform::password::HashParams;
use platform::token::{SigningSecret, TokenCodec};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub db_max_connections: u32,
    pub signing_secret: SigningSecret,
    /// `None` issues tokens that never expire
    pub token_ttl: Option<Duration>,
    pub password_pepper: Option<String>,
    pub hash_params: HashParams,
    /// CORS allow-list; `None` allows any origin
    pub frontend_origins: Option<Vec<HeaderValue>>,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let ip: IpAddr = match get("BIND_ADDR") {
            Some(v) => v.trim().parse().with_context(|| format!("Invalid BIND_ADDR: {v}"))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = parse_or(get("PORT"), "PORT", DEFAULT_PORT)?;

        let database_url = get("DATABASE_URL").context("DATABASE_URL must be set")?;
        let db_max_connections = parse_or(
            get("DB_MAX_CONNECTIONS"),
            "DB_MAX_CONNECTIONS",
            DEFAULT_DB_MAX_CONNECTIONS,
        )?;

        let signing_secret = SigningSecret::new(
            get("JWT_SECRET").context("JWT_SECRET must be set")?.into_bytes(),
        )
        .context("JWT_SECRET is invalid")?;

        let token_ttl = match get("TOKEN_TTL_SECS") {
            Some(v) => {
                let secs: u64 = v
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid TOKEN_TTL_SECS: {v}"))?;
                if secs == 0 {
                    bail!("TOKEN_TTL_SECS must be greater than zero");
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let defaults = HashParams::default();
        let hash_params = HashParams {
            memory_kib: parse_or(get("ARGON2_MEMORY_KIB"), "ARGON2_MEMORY_KIB", defaults.memory_kib)?,
            iterations: parse_or(get("ARGON2_ITERATIONS"), "ARGON2_ITERATIONS", defaults.iterations)?,
            parallelism: parse_or(
                get("ARGON2_PARALLELISM"),
                "ARGON2_PARALLELISM",
                defaults.parallelism,
            )?,
        };
        hash_params
            .validate()
            .context("Argon2 parameters rejected")?;

        let frontend_origins = get("FRONTEND_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(|origin| {
                        origin
                            .parse::<HeaderValue>()
                            .with_context(|| format!("Invalid origin in FRONTEND_ORIGINS: {origin}"))
                    })
                    .collect::<anyhow::Result<Vec<_>>>()
            })
            .transpose()?;

        Ok(Self {
            bind_addr: SocketAddr::new(ip, port),
            database_url,
            db_max_connections,
            signing_secret,
            token_ttl,
            password_pepper: get("PASSWORD_PEPPER"),
            hash_params,
            frontend_origins,
        })
    }

    /// Application-layer auth settings derived from this config
    pub fn auth_config(&self) -> AuthConfig {
        let codec = TokenCodec::new(&self.signing_secret, self.token_ttl);
        let config = AuthConfig::new(codec).with_hash_params(self.hash_params);

        match &self.password_pepper {
            Some(pepper) => config.with_pepper(pepper.as_bytes()),
            None => config,
        }
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(v) => v
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key}: {v}")),
        None => Ok(default),
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("bind_addr", &self.bind_addr)
            .field("database_url", &"[REDACTED]")
            .field("db_max_connections", &self.db_max_connections)
            .field("signing_secret", &self.signing_secret)
            .field("token_ttl", &self.token_ttl)
            .field(
                "password_pepper",
                &self.password_pepper.as_ref().map(|_| "[REDACTED]"),
            )
            .field("hash_params", &self.hash_params)
            .field("frontend_origins", &self.frontend_origins)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 2] = [
        ("DATABASE_URL", "postgres://localhost/accounts"),
        ("JWT_SECRET", "very-secret"),
    ];

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_lookup(lookup(&REQUIRED)).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.db_max_connections, 5);
        assert!(config.token_ttl.is_none());
        assert!(config.password_pepper.is_none());
        assert!(config.frontend_origins.is_none());
        assert_eq!(config.hash_params, HashParams::default());
    }

    #[test]
    fn test_missing_secret_aborts() {
        let err = ApiConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://x")])).unwrap_err();
        assert!(err.to_string().contains("JWT_SECRET"));

        let err = ApiConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://x"),
            ("JWT_SECRET", "   "),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("JWT_SECRET"));
    }

    #[test]
    fn test_missing_database_url_aborts() {
        let err = ApiConfig::from_lookup(lookup(&[("JWT_SECRET", "s")])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn test_overrides() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend([
            ("BIND_ADDR", "127.0.0.1"),
            ("PORT", "8080"),
            ("TOKEN_TTL_SECS", "3600"),
            ("PASSWORD_PEPPER", "pepper"),
            ("ARGON2_MEMORY_KIB", "2048"),
            ("FRONTEND_ORIGINS", "http://localhost:5173, https://app.example.com"),
        ]);
        let config = ApiConfig::from_lookup(lookup(&pairs)).unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.token_ttl, Some(Duration::from_secs(3600)));
        assert_eq!(config.hash_params.memory_kib, 2048);
        assert_eq!(config.frontend_origins.as_ref().map(Vec::len), Some(2));
        assert_eq!(config.auth_config().pepper(), Some(&b"pepper"[..]));
    }

    #[test]
    fn test_invalid_values() {
        for (key, value) in [
            ("PORT", "eighty"),
            ("TOKEN_TTL_SECS", "0"),
            ("ARGON2_ITERATIONS", "0"),
            ("BIND_ADDR", "not-an-ip"),
        ] {
            let mut pairs = REQUIRED.to_vec();
            pairs.push((key, value));
            assert!(ApiConfig::from_lookup(lookup(&pairs)).is_err(), "{key}={value}");
        }
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("PASSWORD_PEPPER", "pepper-value"));
        let debug = format!("{:?}", ApiConfig::from_lookup(lookup(&pairs)).unwrap());
        assert!(!debug.contains("very-secret"));
        assert!(!debug.contains("pepper-value"));
        assert!(!debug.contains("postgres://"));
    }
}
