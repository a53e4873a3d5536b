use axum::{extract::Request, http::header, middleware::Next, response::IntoResponse};

/// Attach standard security headers to every response.
///
/// Swagger UI needs inline scripts and styles; everything else gets a strict
/// no-content CSP and is barred from framing.
pub async fn security_headers_middleware(req: Request, next: Next) -> impl IntoResponse {
    let path = req.uri().path();
    let is_docs_route = path.starts_with("/docs") || path == "/.well-known/openapi.json";

    let mut response = next.run(req).await;

    let (csp, frame_options) = if is_docs_route {
        (
            "default-src 'self'; \
             script-src 'self' 'unsafe-inline'; \
             style-src 'self' 'unsafe-inline'; \
             img-src 'self' data:; \
             connect-src 'self'",
            "SAMEORIGIN",
        )
    } else {
        ("default-src 'none'; frame-ancestors 'none'", "DENY")
    };

    let headers = response.headers_mut();
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        header::HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::STRICT_TRANSPORT_SECURITY,
        header::HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        header::HeaderValue::from_static(csp),
    );
    headers.insert(
        header::X_FRAME_OPTIONS,
        header::HeaderValue::from_static(frame_options),
    );

    response
}
