use crate::error::{Error, Result};
use crate::i18n::Language;
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_CAREERS_EMAIL: &str = "careers@nexzap.studio";
pub const DEFAULT_SIMULATED_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone)]
pub struct Config {
    /// Remote form-collection endpoint. `None` means submissions are simulated.
    pub application_endpoint: Option<String>,
    pub simulated_submit_delay: Duration,
    pub default_language: Language,
    pub careers_email: String,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Default for Config {
    fn default() -> Self {
        Self {
            application_endpoint: None,
            simulated_submit_delay: Duration::from_millis(DEFAULT_SIMULATED_DELAY_MS),
            default_language: Language::default(),
            careers_email: DEFAULT_CAREERS_EMAIL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let application_endpoint = lookup("APPLICATION_ENDPOINT")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let simulated_submit_delay = match lookup("SIMULATED_SUBMIT_DELAY_MS") {
            Some(raw) => Duration::from_millis(parse_value("SIMULATED_SUBMIT_DELAY_MS", &raw)?),
            None => defaults.simulated_submit_delay,
        };

        let default_language = match lookup("DEFAULT_LANGUAGE") {
            Some(raw) => parse_value("DEFAULT_LANGUAGE", &raw)?,
            None => defaults.default_language,
        };

        let careers_email = lookup("CAREERS_EMAIL")
            .filter(|email| !email.trim().is_empty())
            .unwrap_or(defaults.careers_email);

        Ok(Self {
            application_endpoint,
            simulated_submit_delay,
            default_language,
            careers_email,
        })
    }
}

fn parse_value<T>(name: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e)))
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::Config("Configuration has not been initialized".to_string()))
}
