use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Logs one line per request: method, path, status, body size and latency.
///
/// The body is buffered so the size reflects what actually went out.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let started = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let (parts, body) = next.run(req).await.into_parts();
    let status = parts.status;

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(
                %method,
                %path,
                status = status.as_u16(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "response body could not be read: {}",
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let size = human_size(bytes.len());
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if status.is_server_error() {
        tracing::warn!(%method, %path, status = status.as_u16(), %size, elapsed_ms, "request failed");
    } else {
        tracing::info!(%method, %path, status = status.as_u16(), %size, elapsed_ms, "request");
    }

    Response::from_parts(parts, Body::from(bytes))
}

/// `512` -> `512 B`, `2048` -> `2.0 KB`
fn human_size(len: usize) -> String {
    const KB: f64 = 1024.0;
    let len_f = len as f64;
    if len_f < KB {
        format!("{} B", len)
    } else if len_f < KB * KB {
        format!("{:.1} KB", len_f / KB)
    } else {
        format!("{:.1} MB", len_f / (KB * KB))
    }
}
