use crate::client::Summarize;
use crate::error::{AppError, Result};
use crate::history::{ArticleHistoryCache, ArticleRecord};
use crate::lang;

/// Lifecycle of the current (or most recently completed) summarization
/// attempt. One instance per session; a new submission discards the previous
/// terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Fetching,
    Succeeded(ArticleRecord),
    Failed(String),
}

/// Drives one summarization request at a time: cache-hit vs. cache-miss
/// decision, the client call, and the history upsert. All remote failures
/// are absorbed into `RequestState::Failed`; only validation is returned as
/// an error.
pub struct FetchCoordinator<C: Summarize> {
    client: C,
    state: RequestState,
    length: u32,
    lang: String,
}

impl<C: Summarize> FetchCoordinator<C> {
    pub fn new(client: C, length: u32, lang: impl Into<String>) -> Self {
        Self {
            client,
            state: RequestState::Idle,
            length: length.max(1),
            lang: lang.into(),
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// The article to display, if the last request succeeded.
    pub fn current_article(&self) -> Option<&ArticleRecord> {
        match &self.state {
            RequestState::Succeeded(record) => Some(record),
            _ => None,
        }
    }

    /// The error detail to display, if the last request failed.
    pub fn last_error(&self) -> Option<&str> {
        match &self.state {
            RequestState::Failed(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    /// Paragraph count for subsequent requests, minimum 1.
    pub fn set_length(&mut self, length: u32) {
        self.length = length.max(1);
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn set_lang(&mut self, lang: impl Into<String>) {
        self.lang = lang.into();
    }

    /// Submit a URL for summarization at the current length and language.
    ///
    /// An empty URL or an unknown language code is rejected up front with
    /// `AppError::Validation`, leaving state and history untouched. While a
    /// request is outstanding, further submissions are a no-op: at most one
    /// request is in flight at a time. Fetch failures land in
    /// `RequestState::Failed`, never in the returned `Result`.
    pub async fn submit(&mut self, history: &mut ArticleHistoryCache, url: &str) -> Result<()> {
        if url.is_empty() {
            return Err(AppError::Validation(
                "Article URL must not be empty".to_string(),
            ));
        }
        if !lang::is_supported(&self.lang) {
            return Err(AppError::Validation(format!(
                "Unsupported language code: {}",
                self.lang
            )));
        }
        if self.state == RequestState::Fetching {
            tracing::debug!("ignoring submission while a request is in flight");
            return Ok(());
        }

        tracing::info!(url, length = self.length, lang = %self.lang, "fetching summary");
        self.state = RequestState::Fetching;

        match self.client.summarize(url, self.length, &self.lang).await {
            Ok(summary) => {
                let record = ArticleRecord {
                    url: url.to_string(),
                    summary,
                    length: self.length,
                };
                history.upsert(record.clone());
                self.state = RequestState::Succeeded(record);
            }
            Err(e) => {
                tracing::warn!(url, "summarization failed: {}", e);
                self.state = RequestState::Failed(e.to_string());
            }
        }

        Ok(())
    }

    /// Re-open a history entry. A record summarized at the current length is
    /// a cache hit and becomes the current article without a client call; a
    /// record with a different stored length is stale for this length and is
    /// re-fetched in full, overwriting it via upsert.
    pub async fn replay(
        &mut self,
        history: &mut ArticleHistoryCache,
        record: &ArticleRecord,
    ) -> Result<()> {
        if record.length == self.length {
            tracing::debug!(url = %record.url, "cache hit, reusing stored summary");
            self.state = RequestState::Succeeded(record.clone());
            Ok(())
        } else {
            self.submit(history, &record.url).await
        }
    }
}
