//! Server-sent event parsing for the twin's answer stream

use std::pin::Pin;

use eventsource_stream::Eventsource;
use futures_util::{Stream, StreamExt};
use serde_json::Value;

use crate::error::UpstreamError;

/// Event name of a data-only SSE event
const DEFAULT_EVENT_TYPE: &str = "message";

/// One parsed server-sent event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    /// Explicit `event:` name; `None` for data-only events
    pub event_type: Option<String>,
    pub data: String,
}

/// Boxed stream of parsed events
pub type SseStream = Pin<Box<dyn Stream<Item = Result<SseEvent, UpstreamError>> + Send>>;

/// Parse a byte stream (e.g. a response body) into SSE events.
///
/// The parser reports data-only events under the default `message` name;
/// those come out with no `event_type`.
pub fn parse_sse_stream<S, B, E>(byte_stream: S) -> SseStream
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: std::error::Error + Send + 'static,
{
    let event_stream = byte_stream
        .map(|result| result.map_err(|e| std::io::Error::other(e.to_string())))
        .eventsource()
        .map(|result| {
            result
                .map(|event| SseEvent {
                    event_type: if event.event.is_empty() || event.event == DEFAULT_EVENT_TYPE {
                        None
                    } else {
                        Some(event.event)
                    },
                    data: event.data,
                })
                .map_err(|e| UpstreamError::Stream(e.to_string()))
        });

    Box::pin(event_stream)
}

/// What one SSE event means for the answer being assembled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TwinEvent {
    /// A fragment of the answer
    Token(String),
    /// The answer is complete
    Done,
    /// The twin gave up
    Error(String),
    /// Anything else (metadata, keep-alives)
    Other,
}

impl TwinEvent {
    /// Classify an event.
    ///
    /// The kind comes from the `event:` field, or from a `type` member when
    /// the data is a JSON object. Token text is the `content` (or `token`)
    /// member of a JSON object, the value of a JSON string, or the raw data.
    pub fn from_sse(event: &SseEvent) -> Self {
        if event.data.trim() == "[DONE]" {
            return TwinEvent::Done;
        }

        let json: Option<Value> = serde_json::from_str(&event.data).ok();
        let kind = event
            .event_type
            .as_deref()
            .or_else(|| json.as_ref().and_then(|v| v.get("type")).and_then(Value::as_str));

        match kind {
            Some("token") => TwinEvent::Token(text_of(&event.data, json.as_ref(), &["content", "token"])),
            Some("done") | Some("end") => TwinEvent::Done,
            Some("error") => TwinEvent::Error(text_of(&event.data, json.as_ref(), &["message", "error"])),
            _ => TwinEvent::Other,
        }
    }
}

fn text_of(raw: &str, json: Option<&Value>, fields: &[&str]) -> String {
    match json {
        Some(Value::Object(map)) => fields
            .iter()
            .find_map(|field| map.get(*field).and_then(Value::as_str))
            .unwrap_or_default()
            .to_string(),
        Some(Value::String(text)) => text.clone(),
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;

    fn event(event_type: Option<&str>, data: &str) -> SseEvent {
        SseEvent {
            event_type: event_type.map(str::to_string),
            data: data.to_string(),
        }
    }

    #[tokio::test]
    async fn test_parse_simple_sse_event() {
        let sse_data = "event: token\ndata: {\"content\": \"hello\"}\n\n";
        let byte_stream = stream::once(async move { Ok::<_, std::io::Error>(sse_data) });

        let mut sse_stream = parse_sse_stream(byte_stream);

        let event = sse_stream.next().await.unwrap().unwrap();
        assert_eq!(event.event_type, Some("token".to_string()));
        assert_eq!(event.data, "{\"content\": \"hello\"}");
    }

    #[tokio::test]
    async fn test_parse_events_split_across_chunks() {
        let chunks = vec![
            Ok::<_, std::io::Error>("event: tok"),
            Ok("en\ndata: first\n\nevent: token\n"),
            Ok("data: second\n\n"),
        ];
        let mut sse_stream = parse_sse_stream(stream::iter(chunks));

        let first = sse_stream.next().await.unwrap().unwrap();
        assert_eq!(first.data, "first");
        let second = sse_stream.next().await.unwrap().unwrap();
        assert_eq!(second.event_type, Some("token".to_string()));
        assert_eq!(second.data, "second");
        assert!(sse_stream.next().await.is_none());
    }

    #[test]
    fn test_token_from_named_event() {
        assert_eq!(
            TwinEvent::from_sse(&event(Some("token"), r#"{"content":"Hi"}"#)),
            TwinEvent::Token("Hi".to_string())
        );
        assert_eq!(
            TwinEvent::from_sse(&event(Some("token"), "plain text")),
            TwinEvent::Token("plain text".to_string())
        );
        assert_eq!(
            TwinEvent::from_sse(&event(Some("token"), r#"" there""#)),
            TwinEvent::Token(" there".to_string())
        );
    }

    async fn classify(raw: &'static str) -> Vec<TwinEvent> {
        let byte_stream = stream::once(async move { Ok::<_, std::io::Error>(raw) });
        parse_sse_stream(byte_stream)
            .map(|event| TwinEvent::from_sse(&event.unwrap()))
            .collect()
            .await
    }

    #[tokio::test]
    async fn test_data_only_event_has_no_type() {
        let mut sse_stream = parse_sse_stream(stream::once(async {
            Ok::<_, std::io::Error>("data: hello\n\n")
        }));

        let event = sse_stream.next().await.unwrap().unwrap();
        assert_eq!(event.event_type, None);
        assert_eq!(event.data, "hello");
    }

    #[tokio::test]
    async fn test_token_from_typed_data() {
        let events = classify(
            "data: {\"type\":\"token\",\"content\":\"Hi\"}\n\n\
             data: {\"type\":\"token\",\"token\":\"abc\"}\n\n",
        )
        .await;

        assert_eq!(
            events,
            vec![
                TwinEvent::Token("Hi".to_string()),
                TwinEvent::Token("abc".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn test_error_from_typed_data() {
        let events = classify("data: {\"type\":\"error\",\"message\":\"x\"}\n\n").await;
        assert_eq!(events, vec![TwinEvent::Error("x".to_string())]);
    }

    #[tokio::test]
    async fn test_explicit_message_event_uses_typed_data() {
        let events =
            classify("event: message\ndata: {\"type\":\"done\"}\n\n").await;
        assert_eq!(events, vec![TwinEvent::Done]);
    }

    #[test]
    fn test_done_and_error() {
        assert_eq!(TwinEvent::from_sse(&event(None, "[DONE]")), TwinEvent::Done);
        assert_eq!(TwinEvent::from_sse(&event(Some("done"), "")), TwinEvent::Done);
        assert_eq!(
            TwinEvent::from_sse(&event(Some("error"), r#"{"message":"overloaded"}"#)),
            TwinEvent::Error("overloaded".to_string())
        );
    }

    #[test]
    fn test_other_events_ignored() {
        assert_eq!(TwinEvent::from_sse(&event(Some("metadata"), "{}")), TwinEvent::Other);
        assert_eq!(TwinEvent::from_sse(&event(None, "keep-alive")), TwinEvent::Other);
    }
}
