use anyhow::{bail, Context, Result};

use crate::gate::DEFAULT_MAX_SESSIONS;

/// Longest idle timeout accepted for `SESSION_TTL_HOURS` (one year).
const MAX_SESSION_TTL_HOURS: i64 = 24 * 365;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub access_passphrase: String,
    pub data_dir: String,
    pub demo_latency_ms: u64,
    pub session_ttl: chrono::Duration,
    pub max_sessions: usize,
    pub mail: MailConfig,
    pub port: u16,
    pub rust_log: String,
}

/// Contact notification delivery. `None` keeps the endpoint in demo mode (log only).
#[derive(Debug, Clone, Default)]
pub struct MailConfig {
    pub resend: Option<ResendConfig>,
}

#[derive(Debug, Clone)]
pub struct ResendConfig {
    pub api_key: String,
    pub to_email: String,
    pub from_email: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let resend = match std::env::var("RESEND_API_KEY") {
            Ok(api_key) if !api_key.trim().is_empty() => Some(ResendConfig {
                api_key,
                to_email: require_env("CONTACT_TO_EMAIL")?,
                from_email: require_env("CONTACT_FROM_EMAIL")?,
            }),
            _ => None,
        };

        Ok(Config {
            access_passphrase: require_env("ACCESS_PASSPHRASE")?,
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "apps/api/data".to_string()),
            demo_latency_ms: parse_env("DEMO_LATENCY_MS", 1500)?,
            session_ttl: session_ttl_from_hours(parse_env("SESSION_TTL_HOURS", 24)?)?,
            max_sessions: max_sessions(parse_env("MAX_SESSIONS", DEFAULT_MAX_SESSIONS)?)?,
            mail: MailConfig { resend },
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn session_ttl_from_hours(hours: i64) -> Result<chrono::Duration> {
    if !(1..=MAX_SESSION_TTL_HOURS).contains(&hours) {
        bail!("SESSION_TTL_HOURS must be between 1 and {MAX_SESSION_TTL_HOURS}, got {hours}");
    }
    Ok(chrono::Duration::hours(hours))
}

fn max_sessions(value: usize) -> Result<usize> {
    if value == 0 {
        bail!("MAX_SESSIONS must be at least 1");
    }
    Ok(value)
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
