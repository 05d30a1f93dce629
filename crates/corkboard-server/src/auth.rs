// ABOUTME: Bearer token authentication middleware for the corkboard API.
// ABOUTME: Every route sits behind the gate, including the root greeting.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::Json;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use axum::response::IntoResponse;
use tower::{Layer, Service};

/// A tower Layer that applies bearer token authentication to all routes.
///
/// The expected secret is captured when the layer is constructed; a runtime
/// change to the process environment has no effect until restart.
#[derive(Clone)]
pub struct AuthLayer {
    token: Arc<String>,
}

impl AuthLayer {
    /// Create a new AuthLayer with the expected bearer secret.
    pub fn new(token: String) -> Self {
        Self {
            token: Arc::new(token),
        }
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = AuthMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthMiddleware {
            inner,
            token: Arc::clone(&self.token),
        }
    }
}

/// The middleware service that checks the Authorization header.
#[derive(Clone)]
pub struct AuthMiddleware<S> {
    inner: S,
    token: Arc<String>,
}

impl<S> Service<Request<Body>> for AuthMiddleware<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        // Expected header shape is `<scheme> <token>`; only the second
        // whitespace-separated segment is compared, the scheme is ignored.
        let presented = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split_whitespace().nth(1))
            .map(str::to_string);

        match presented {
            Some(ref token) if *token == *self.token => {
                let mut inner = self.inner.clone();
                Box::pin(async move { inner.call(req).await })
            }
            _ => {
                tracing::error!(path = %req.uri().path(), "unauthorized request");
                Box::pin(async move {
                    Ok((
                        StatusCode::UNAUTHORIZED,
                        Json(serde_json::json!({ "error": "Unauthorized request" })),
                    )
                        .into_response())
                })
            }
        }
    }
}
