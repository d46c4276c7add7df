use std::env;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::warn;

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_PAYLOAD_BYTES: usize = 64 * 1024;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Upper bound on request bodies accepted by the user routes.
    pub max_payload_bytes: usize,
    pub log_level: String,
    /// Defaults substituted for unparsable values. Kept until a logger exists.
    pub fallbacks: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let mut fallbacks = Vec::new();
        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            server_port: parse_var("SERVER_PORT", DEFAULT_PORT, &mut fallbacks),
            max_payload_bytes: parse_var(
                "MAX_PAYLOAD_BYTES",
                DEFAULT_MAX_PAYLOAD_BYTES,
                &mut fallbacks,
            ),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            fallbacks,
        }
    }

    /// Report every substituted default. Call after the logger is installed.
    pub fn log_fallbacks(&self) {
        for notice in &self.fallbacks {
            warn!("{}", notice);
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Read a numeric variable, falling back to `default` when unset or unparsable.
/// An unparsable value also leaves a notice in `fallbacks`.
fn parse_var<T>(name: &str, default: T, fallbacks: &mut Vec<String>) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            fallbacks.push(format!("{} has invalid value '{}', using {}", name, raw, default));
            default
        }),
        Err(_) => default,
    }
}
