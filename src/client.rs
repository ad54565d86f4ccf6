use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{AppError, Result};

/// The remote summarization service, seen as a black-box async call with
/// exactly one success or one error outcome. No streaming, no partial
/// results.
#[async_trait]
pub trait Summarize {
    async fn summarize(&self, url: &str, length: u32, lang: &str) -> Result<String>;
}

/// HTTP client for the summarize endpoint:
/// `GET {base}/summarize?url=..&length=..&lang=..` with the API key in a
/// request header, returning `{"summary": "..."}`.
pub struct HttpSummarizationClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl HttpSummarizationClient {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl Summarize for HttpSummarizationClient {
    async fn summarize(&self, url: &str, length: u32, lang: &str) -> Result<String> {
        let length = length.to_string();
        let res = self
            .client
            .get(format!("{}/summarize", self.api_url))
            .header("X-RapidAPI-Key", &self.api_key)
            .query(&[("url", url), ("length", length.as_str()), ("lang", lang)])
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|json| json["error"].as_str().map(str::to_string))
                .unwrap_or(body);
            return Err(AppError::Fetch(format!(
                "Summarizer returned {}: {}",
                status, detail
            )));
        }

        let json: serde_json::Value = res.json().await?;
        let summary = json["summary"]
            .as_str()
            .ok_or_else(|| AppError::Fetch("Invalid response format from summarizer".to_string()))?
            .to_string();

        Ok(summary)
    }
}
