use authgate_config::ServerConfig;
use axum::{
    extract::{MatchedPath, Request},
    http::{HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

const MAX_REQUEST_ID_LEN: usize = 128;

/// Caller-supplied `x-request-id` when it is printable and short, otherwise a fresh UUID.
fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(&REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty() && id.len() <= MAX_REQUEST_ID_LEN)
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

/// Logs every request under a request id and echoes that id on the response.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());
    let request_id = request_id(req.headers());

    info!(request_id = %request_id, method = %method, path = %path, "Incoming request");

    let mut response = next.run(req).await;
    let latency_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    match status {
        400..=499 => {
            warn!(request_id = %request_id, method = %method, path = %path, status, latency_ms, "Client error")
        }
        500..=599 => {
            error!(request_id = %request_id, method = %method, path = %path, status, latency_ms, "Server error")
        }
        _ => {
            info!(request_id = %request_id, method = %method, path = %path, status, latency_ms, "Request completed")
        }
    }

    response
}

/// Console logging, plus a daily rolling JSON file when `log_dir` is configured.
pub fn init_tracing(server_config: &ServerConfig) {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::fmt;

    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}=info,authgate_auth=info,tower_http=warn,hyper=info",
            env!("CARGO_CRATE_NAME")
        ))
    });

    let console_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(console_filter);

    // JSON file layer for structured logs (can be ingested by Loki)
    let json_layer = server_config.log_dir.as_ref().map(|log_dir| {
        let json_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "authgate.json");

        fmt::layer()
            .json()
            .with_writer(json_appender)
            .with_current_span(true)
            .with_span_list(true)
            .with_filter(EnvFilter::new("info"))
    });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(json_layer)
        .init();

    match &server_config.log_dir {
        Some(log_dir) => info!(log_dir = %log_dir, "Tracing initialized with file logging"),
        None => info!("Tracing initialized (console only)"),
    }
}
