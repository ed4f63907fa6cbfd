use shoprank_core::{Error, Result, StopWords};
use std::path::Path;

/// Configuration for a [`Recommender`](crate::Recommender)
#[derive(Debug, Clone)]
pub struct RecommenderConfig {
    /// Result count when a request does not name one
    pub default_nums: usize,
    /// Upper bound on any request's result count
    pub max_nums: usize,
    /// Removed from free-text queries before scoring
    pub stop_words: Option<StopWords>,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            default_nums: 4,
            max_nums: 100,
            stop_words: None,
        }
    }
}

impl RecommenderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_nums == 0 {
            return Err(Error::InvalidConfig("max_nums must be at least 1".to_string()));
        }
        if self.default_nums == 0 || self.default_nums > self.max_nums {
            return Err(Error::InvalidConfig(format!(
                "default_nums must be in 1..={}, got {}",
                self.max_nums, self.default_nums
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = Some(stop_words);
        self
    }

    /// Read a one-word-per-line stop-word file
    pub fn load_stop_words<P: AsRef<Path>>(path: P) -> Result<StopWords> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Ok(StopWords::parse(&text))
    }

    /// Requested result count, defaulted and clamped
    pub fn resolve_nums(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_nums).min(self.max_nums)
    }
}
