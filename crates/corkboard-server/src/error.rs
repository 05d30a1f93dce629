// ABOUTME: The error shield, the terminal 500 handler for the pipeline.
// ABOUTME: Normalizes handler panics into mode-appropriate JSON responses.

use std::any::Any;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::config::DeployMode;

/// Convert a caught panic payload into a 500 response. Wired into
/// `tower_http::catch_panic::CatchPanicLayer::custom` by the router.
///
/// In production the response carries no internal detail. Otherwise the
/// payload goes to stderr (not the structured logger) and is echoed in the
/// response body to aid local debugging.
pub fn handle_panic(mode: DeployMode, err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic_detail(&*err);

    match mode {
        DeployMode::Production => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": { "message": "server error" } })),
        )
            .into_response(),
        DeployMode::Development => {
            eprintln!("request handler panicked: {detail}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "message": "server error", "error": detail })),
            )
                .into_response()
        }
    }
}

fn panic_detail(err: &(dyn Any + Send)) -> String {
    if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::routing::get;
    use http::Request;
    use tower::ServiceExt;
    use tower_http::catch_panic::CatchPanicLayer;

    async fn boom() -> &'static str {
        panic!("fixture store exploded")
    }

    fn panicking_router(mode: DeployMode) -> Router {
        Router::new()
            .route("/boom", get(boom))
            .layer(CatchPanicLayer::custom(move |err| handle_panic(mode, err)))
    }

    async fn json_body(resp: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn production_shield_hides_detail() {
        let app = panicking_router(DeployMode::Production);

        let resp = app
            .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = json_body(resp).await;
        assert_eq!(
            json,
            serde_json::json!({ "error": { "message": "server error" } })
        );
    }

    #[tokio::test]
    async fn development_shield_echoes_detail() {
        let app = panicking_router(DeployMode::Development);

        let resp = app
            .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = json_body(resp).await;
        assert_eq!(json["message"], "server error");
        assert_eq!(json["error"], "fixture store exploded");
    }

    #[test]
    fn panic_detail_handles_non_string_payload() {
        let err: Box<dyn Any + Send + 'static> = Box::new(42_u32);
        assert_eq!(panic_detail(&*err), "unknown panic");

        let err: Box<dyn Any + Send + 'static> = Box::new("static str");
        assert_eq!(panic_detail(&*err), "static str");
    }
}
