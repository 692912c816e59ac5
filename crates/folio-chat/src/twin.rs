//! Client for the digital twin's streaming answer endpoint

use futures_util::stream::StreamExt;
use reqwest::header::ACCEPT;
use serde::Serialize;
use tracing::debug;

use crate::config::ChatConfig;
use crate::error::UpstreamError;
use crate::sse::{parse_sse_stream, TwinEvent};

#[derive(Debug, Serialize)]
struct TwinQuestion<'a> {
    question: &'a str,
}

/// Forwards questions to the twin and assembles its streamed answer
#[derive(Clone, Debug)]
pub struct TwinClient {
    http: reqwest::Client,
    stream_url: String,
}

impl TwinClient {
    /// Build a client from config. The request timeout covers the whole
    /// exchange, including reading the stream.
    pub fn new(config: &ChatConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            stream_url: config.stream_url(),
        })
    }

    /// Endpoint questions are posted to
    pub fn stream_url(&self) -> &str {
        &self.stream_url
    }

    /// Ask one question and wait for the complete answer.
    ///
    /// Token events are concatenated in arrival order. The stream ends at a
    /// done event or when the connection closes. No retries.
    pub async fn ask(&self, question: &str) -> Result<String, UpstreamError> {
        let response = self
            .http
            .post(&self.stream_url)
            .header(ACCEPT, "text/event-stream")
            .json(&TwinQuestion { question })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let mut events = parse_sse_stream(response.bytes_stream());
        let mut answer = String::new();
        let mut tokens = 0usize;

        while let Some(event) = events.next().await {
            match TwinEvent::from_sse(&event?) {
                TwinEvent::Token(text) => {
                    answer.push_str(&text);
                    tokens += 1;
                }
                TwinEvent::Done => break,
                TwinEvent::Error(message) => return Err(UpstreamError::Remote(message)),
                TwinEvent::Other => {}
            }
        }

        debug!(tokens, chars = answer.len(), "assembled twin answer");
        Ok(answer)
    }
}
