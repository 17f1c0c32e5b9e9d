// Request handler module
// Routes inbound requests: /stop cancels the refresher, everything else
// serves the current file body

use std::convert::Infallible;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};

use crate::config::AppState;
use crate::logger;
use crate::response;

const STOP_PATH: &str = "/stop";

/// Handle one request. Infallible: every defined outcome is a 200.
///
/// `/stop` (exact path, any method) triggers the one-shot stop signal and
/// returns an empty body. All other paths mirror the original catch-all
/// root route and return the current body snapshot, empty until the first
/// refresh has completed.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    remote_addr: std::net::SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let (response, body_bytes) = if path == STOP_PATH {
        logger::log_stop_requested();
        state.stop.trigger();
        (response::build_stop_response(&state.config.http), 0)
    } else {
        let body = state.body_snapshot().await;
        let len = body.len();
        (response::build_body_response(&body, &state.config.http), len)
    };

    if state.config.logging.access_log {
        let mut entry =
            logger::AccessLogEntry::new(remote_addr.ip().to_string(), method.to_string(), path);
        entry.status = response.status().as_u16();
        entry.body_bytes = body_bytes;
        logger::log_access(&entry);
    }

    Ok(response)
}
