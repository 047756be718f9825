use crate::utils::get_env::{get_env_var, get_env_var_or};
use anyhow::Error;

pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// Process-wide configuration, read once at startup and passed explicitly
/// into the upstream clients.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub openai_api_key: String,
    pub gemini_api_url: String,
    pub openai_api_url: String,
    pub vision_model: String,
    pub translation_model: String,
    pub upstream_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            gemini_api_key: get_env_var("GEMINI_API_KEY")?,
            openai_api_key: get_env_var("OPENAI_API_KEY")?,
            gemini_api_url: get_env_var_or("GEMINI_API_URL", DEFAULT_GEMINI_API_URL),
            openai_api_url: get_env_var_or("OPENAI_API_URL", DEFAULT_OPENAI_API_URL),
            vision_model: get_env_var_or("VISION_MODEL", "gemini-2.0-flash"),
            translation_model: get_env_var_or("TRANSLATION_MODEL", "gpt-4o"),
            upstream_timeout_secs: get_env_var_or("UPSTREAM_TIMEOUT_SECS", "60").parse()?,
        })
    }
}
