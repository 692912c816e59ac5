//! Chat proxy for the Folio terminal
//!
//! The terminal window posts the conversation to `POST /api/chat`. The proxy
//! validates it, forwards the last question to the digital twin service,
//! collects the streamed answer and returns it as plain text.
//!
//! ## Example
//!
//! ```rust,no_run
//! use folio_chat::{router, AppState, ChatConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let state = AppState::new(ChatConfig::with_base_url("https://twin.example.com"))?;
//! let app = router(state);
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod handler;
pub mod request;
pub mod sse;
pub mod twin;

use std::sync::Arc;

use axum::routing::post;
use axum::Router;

pub use config::{ChatConfig, MAX_QUERY_CHARS};
pub use error::{ChatError, UpstreamError};
pub use twin::TwinClient;

/// Route the chat endpoint is mounted at
pub const CHAT_ROUTE: &str = "/api/chat";

/// Shared, immutable state of the chat endpoint
#[derive(Debug)]
pub struct AppState {
    pub config: ChatConfig,
    pub twin: TwinClient,
}

impl AppState {
    /// Build state (and the pooled HTTP client) from config
    pub fn new(config: ChatConfig) -> Result<Arc<Self>, UpstreamError> {
        let twin = TwinClient::new(&config)?;
        Ok(Arc::new(Self { config, twin }))
    }
}

/// Router serving `POST /api/chat`
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(CHAT_ROUTE, post(handler::chat))
        .with_state(state)
}
