//! Development Server for Folio
//!
//! Serves the static site with the COOP/COEP headers the wasm desktop needs
//! and mounts the chat proxy at `/api/chat`.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use axum::{
    body::Body,
    http::{header, HeaderValue, Request, StatusCode},
    response::Response,
    routing::get_service,
    Router,
};
use clap::Parser;
use folio_chat::{AppState, ChatConfig};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "dev-server", about = "Serve the Folio desktop and its chat proxy")]
struct Args {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Directory holding the built static site
    #[arg(long, env = "WEB_DIR", default_value = "web")]
    web_dir: PathBuf,

    /// Base URL of the digital twin service
    #[arg(long, env = "TWIN_URL", default_value = "http://127.0.0.1:8000")]
    twin_url: String,

    /// Path of the twin's streaming endpoint
    #[arg(long, env = "TWIN_STREAM_PATH", default_value = "api/chat/stream")]
    twin_stream_path: String,

    /// Upstream deadline in seconds, stream included
    #[arg(long, env = "TWIN_TIMEOUT_SECS", default_value_t = 60)]
    twin_timeout_secs: u64,

    /// Allow cross-origin calls to the chat endpoint (front-end dev servers)
    #[arg(long, env = "CORS")]
    cors: bool,
}

impl Args {
    fn chat_config(&self) -> ChatConfig {
        ChatConfig {
            twin_base_url: self.twin_url.clone(),
            stream_path: self.twin_stream_path.clone(),
            request_timeout: Duration::from_secs(self.twin_timeout_secs),
            ..ChatConfig::default()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = args.chat_config();
    let twin_url = config.stream_url();

    let state = AppState::new(config).context("failed to build twin client")?;
    let mut app = build_app(state, &args.web_dir);
    if args.cors {
        app = app.layer(CorsLayer::permissive());
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));

    println!("╔═══════════════════════════════════════════════════╗");
    println!("║              Folio Development Server             ║");
    println!("╠═══════════════════════════════════════════════════╣");
    println!("║  URL: {:<44}║", format!("http://localhost:{}", args.port));
    println!("║  Press Ctrl+C to stop                             ║");
    println!("╚═══════════════════════════════════════════════════╝");
    println!();

    info!(web_dir = %args.web_dir.display(), twin = %twin_url, "serving");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shut down");
    Ok(())
}

/// Chat routes first, static files for everything else
fn build_app(state: std::sync::Arc<AppState>, web_dir: &std::path::Path) -> Router {
    let serve_dir = ServeDir::new(web_dir).precompressed_gzip().precompressed_br();

    folio_chat::router(state)
        .fallback_service(get_service(serve_dir).handle_error(|_| async {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }))
        .layer(axum::middleware::from_fn(add_headers))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}

/// Add cross-origin isolation headers and fix MIME types
async fn add_headers(request: Request<Body>, next: axum::middleware::Next) -> Response<Body> {
    let content_type = content_type_for(request.uri().path());

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    // Required for SharedArrayBuffer
    headers.insert(
        "Cross-Origin-Opener-Policy",
        HeaderValue::from_static("same-origin"),
    );
    headers.insert(
        "Cross-Origin-Embedder-Policy",
        HeaderValue::from_static("require-corp"),
    );

    if let Some(content_type) = content_type {
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    }

    response
}

/// MIME type override for static assets, by extension
fn content_type_for(path: &str) -> Option<&'static str> {
    let (_, ext) = path.rsplit_once('.')?;
    match ext {
        "js" | "mjs" => Some("application/javascript; charset=utf-8"),
        "wasm" => Some("application/wasm"),
        "css" => Some("text/css; charset=utf-8"),
        "html" => Some("text/html; charset=utf-8"),
        "json" => Some("application/json; charset=utf-8"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}
