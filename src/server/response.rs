use crate::errors::ErrorEnvelope;
use crate::proxy::UpstreamResponse;
use bytes::Bytes;
use http::{Response, StatusCode};
use http_body_util::Full;

/// Body type for every response the gateway writes.
pub type ResponseBody = Full<Bytes>;

/// The HTTP response the gateway writes.
pub type HttpResponse = Response<ResponseBody>;

/// Build a JSON response with the given status.
pub fn json_response(status: StatusCode, body: String) -> HttpResponse {
    Response::builder()
        .status(status)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::new())))
}

/// Pass an upstream reply through verbatim, served as JSON.
pub fn write_upstream_response(upstream: &UpstreamResponse) -> HttpResponse {
    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::OK);
    json_response(status, upstream.body.clone())
}

/// Write an error envelope with its matching status code.
pub fn write_error_response(status: StatusCode, envelope: &ErrorEnvelope) -> HttpResponse {
    json_response(status, envelope.to_json())
}

/// Body served by the `/health` endpoint.
pub fn health_response() -> HttpResponse {
    json_response(StatusCode::OK, r#"{"status":"ok"}"#.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_response_sets_content_type() {
        let res = json_response(StatusCode::OK, "{}".to_string());
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers().get(http::header::CONTENT_TYPE).map(|v| v.as_bytes()),
            Some(b"application/json".as_slice())
        );
    }

    #[test]
    fn test_upstream_passthrough_keeps_status() {
        let res = write_upstream_response(&UpstreamResponse {
            status: 201,
            body: r#"{"id":1}"#.to_string(),
        });
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    #[test]
    fn test_health_response() {
        let res = health_response();
        assert_eq!(res.status(), StatusCode::OK);
    }
}
