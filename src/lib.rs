pub mod client;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod export;
pub mod feedback;
pub mod history;
pub mod lang;
pub mod store;

use client::{HttpSummarizationClient, Summarize};
use config::Config;
use coordinator::FetchCoordinator;
use error::{AppError, Result};
use feedback::{ClipboardFeedbackController, ClipboardSink, SystemClipboard};
use history::ArticleHistoryCache;
use store::{FileStore, PersistentStore};

/// One UI session: the article history, the request coordinator, and the
/// copy-feedback flag, owned together and passed explicitly to whatever
/// renders them. Constructed once per session; only the history survives a
/// restart.
pub struct Session<C: Summarize> {
    pub history: ArticleHistoryCache,
    pub coordinator: FetchCoordinator<C>,
    pub feedback: ClipboardFeedbackController,
}

impl Session<HttpSummarizationClient> {
    /// Session wired for production: HTTP summarizer, file-backed history,
    /// system clipboard.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = HttpSummarizationClient::new(&config.api_url, &config.api_key)?;
        Ok(Self::new(
            client,
            Box::new(FileStore::new(&config.history_path)),
            Box::new(SystemClipboard),
            config.default_length,
            &config.default_lang,
        ))
    }
}

impl<C: Summarize> Session<C> {
    pub fn new(
        client: C,
        store: Box<dyn PersistentStore>,
        clipboard: Box<dyn ClipboardSink>,
        length: u32,
        lang: &str,
    ) -> Self {
        Self {
            history: ArticleHistoryCache::load(store),
            coordinator: FetchCoordinator::new(client, length, lang),
            feedback: ClipboardFeedbackController::new(clipboard),
        }
    }

    /// Submit a URL for summarization. See `FetchCoordinator::submit`.
    pub async fn submit(&mut self, url: &str) -> Result<()> {
        self.coordinator.submit(&mut self.history, url).await
    }

    /// Re-open the history entry at `index` (most-recent-first).
    pub async fn replay(&mut self, index: usize) -> Result<()> {
        let record = self
            .history
            .all()
            .get(index)
            .cloned()
            .ok_or_else(|| AppError::Validation(format!("No history entry at index {}", index)))?;
        self.coordinator.replay(&mut self.history, &record).await
    }

    /// Copy a history entry's URL to the clipboard.
    pub fn copy(&mut self, url: &str) {
        self.feedback.copy(url);
    }
}
