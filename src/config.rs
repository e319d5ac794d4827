use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT, DEFAULT_TEMPERATURE,
    DEFAULT_USER_PROMPT, ENV_API_KEY, ENV_BASE_URL, ENV_MODEL, ENV_SYSTEM_PROMPT,
    ENV_TEMPERATURE,
};
use crate::error::{Error, Result};
use std::env;

/// Settings for one prompt run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    pub system_prompt: String,
    pub user_prompt: String,
}

impl Config {
    /// Reads the process environment. Call `dotenv::dotenv()` first if a
    /// `.env` file should be honoured.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolves settings through `lookup`, falling back to the built-in
    /// defaults for everything except the API key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::config(format!("{} is not set", ENV_API_KEY)))?;

        let base_url = lookup(ENV_BASE_URL)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();

        let model = lookup(ENV_MODEL)
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let temperature = match lookup(ENV_TEMPERATURE) {
            Some(raw) => parse_temperature(&raw)?,
            None => DEFAULT_TEMPERATURE,
        };

        let system_prompt =
            lookup(ENV_SYSTEM_PROMPT).unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string());

        Ok(Self {
            api_key,
            base_url,
            model,
            temperature,
            system_prompt,
            user_prompt: DEFAULT_USER_PROMPT.to_string(),
        })
    }

    /// Replaces the user prompt with the words given on the command line.
    /// `args` is the full argv, program name included.
    pub fn with_prompt_args(mut self, args: &[String]) -> Self {
        if args.len() > 1 {
            self.user_prompt = args[1..].join(" ");
        }
        self
    }
}

fn parse_temperature(raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        Error::config(format!("{} must be a number, got {:?}", ENV_TEMPERATURE, raw))
    })?;
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::config(format!(
            "{} must be between 0 and 1, got {}",
            ENV_TEMPERATURE, value
        )));
    }
    Ok(value)
}
