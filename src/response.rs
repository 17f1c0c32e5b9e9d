//! HTTP response building module
//!
//! Builders for the two responses this server produces, decoupled from
//! routing logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::config::HttpConfig;

/// 200 response carrying the current file body verbatim.
///
/// No caching headers and no transformation; an empty body is still a
/// successful response.
pub fn build_body_response(body: &str, http_config: &HttpConfig) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", &http_config.default_content_type)
        .header("Server", &http_config.server_name)
        .body(Full::new(Bytes::from(body.to_owned())))
        .expect("Failed to build body response")
}

/// Empty 200 response for the stop route
pub fn build_stop_response(http_config: &HttpConfig) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Server", &http_config.server_name)
        .body(Full::new(Bytes::new()))
        .expect("Failed to build stop response")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::test_config;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_body_response_is_verbatim() {
        let cfg = test_config();
        let resp = build_body_response("hello\nworld", &cfg.http);
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/plain; charset=utf-8"
        );
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"hello\nworld");
    }

    #[tokio::test]
    async fn test_empty_body_is_still_200() {
        let cfg = test_config();
        let resp = build_body_response("", &cfg.http);
        assert_eq!(resp.status(), 200);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_stop_response_is_empty_200() {
        let cfg = test_config();
        let resp = build_stop_response(&cfg.http);
        assert_eq!(resp.status(), 200);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }
}
