//! Chat proxy configuration

use std::time::Duration;

/// Longest question (in characters) forwarded to the twin
pub const MAX_QUERY_CHARS: usize = 500;

/// Settings for talking to the digital twin service
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatConfig {
    /// Base URL of the twin service
    pub twin_base_url: String,
    /// Path of the streaming answer endpoint, relative to the base URL
    pub stream_path: String,
    /// Questions longer than this are rejected
    pub max_query_chars: usize,
    /// Overall deadline for one upstream request, stream included
    pub request_timeout: Duration,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            twin_base_url: "http://127.0.0.1:8000".to_string(),
            stream_path: "api/chat/stream".to_string(),
            max_query_chars: MAX_QUERY_CHARS,
            request_timeout: Duration::from_secs(60),
        }
    }
}

impl ChatConfig {
    /// Config pointing at the given twin base URL, defaults elsewhere
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            twin_base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Full URL of the streaming endpoint
    pub fn stream_url(&self) -> String {
        format!(
            "{}/{}",
            self.twin_base_url.trim_end_matches('/'),
            self.stream_path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_url_joins_slashes() {
        let mut config = ChatConfig::with_base_url("https://twin.example.com/");
        config.stream_path = "/v1/stream".to_string();
        assert_eq!(config.stream_url(), "https://twin.example.com/v1/stream");
    }

    #[test]
    fn test_defaults() {
        let config = ChatConfig::default();
        assert_eq!(config.max_query_chars, 500);
        assert_eq!(config.stream_url(), "http://127.0.0.1:8000/api/chat/stream");
    }
}
