use std::env;
use std::path::PathBuf;
use crate::error::{AppError, Result};

pub const DEFAULT_LENGTH: u32 = 3;
pub const DEFAULT_LANG: &str = "en";

const DEFAULT_API_URL: &str = "https://article-extractor-and-summarizer.p.rapidapi.com";

#[derive(Clone)]
pub struct Config {
    pub api_url: String,
    pub api_key: String,
    pub history_path: PathBuf,
    pub default_length: u32,
    pub default_lang: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let api_key = env::var("SUMMARIZER_API_KEY")?;
        let api_url = env::var("SUMMARIZER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let history_path = env::var("HISTORY_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("articles.json"));

        let default_length = match env::var("DEFAULT_LENGTH") {
            Ok(raw) => raw
                .parse::<u32>()
                .map_err(|e| AppError::Config(format!("Invalid DEFAULT_LENGTH: {}", e)))?
                .max(1),
            Err(_) => DEFAULT_LENGTH,
        };
        let default_lang = env::var("DEFAULT_LANG").unwrap_or_else(|_| DEFAULT_LANG.to_string());

        Ok(Config {
            api_url,
            api_key,
            history_path,
            default_length,
            default_lang,
        })
    }
}
