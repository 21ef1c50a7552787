pub mod health;
pub mod pages;

use axum::{http::Uri, routing::get, Router};

use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // The page and its assets
        .route("/", get(pages::handle_page))
        .route("/assets/site.css", get(pages::handle_stylesheet))
        .route("/assets/site.js", get(pages::handle_script))
        // Read-only content API
        .route("/api/v1/content", get(pages::handle_get_content))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, HeaderMap, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::content::portfolio_catalog;

    async fn get(uri: &str) -> (StatusCode, HeaderMap, String) {
        let app = build_router(AppState::new(Config::default(), portfolio_catalog()));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_page_renders() {
        let (status, headers, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        assert!(body.contains("Aryaman Singh"));
        assert!(!body.contains("nav-overlay"));
    }

    #[tokio::test]
    async fn test_menu_open_mounts_overlay() {
        let (status, _, body) = get("/?menu=open").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("nav-overlay"));
    }

    #[tokio::test]
    async fn test_garbage_query_falls_back() {
        let (status, _, body) = get("/?menu=42&card=lots").await;
        assert_eq!(status, StatusCode::OK);
        // Stack stays on the first card, so the fifth is still out of view.
        assert!(body.contains("Microsoft Certified PowerBI"));
        assert!(!body.contains("AWS cloud Practitioner Essentials"));
    }

    #[tokio::test]
    async fn test_repeated_query_keys_keep_first_value() {
        let (status, _, body) = get("/?menu=open&menu=closed").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("nav-overlay"));

        // Fifth card on top, so the first has already been swiped away.
        let (status, _, body) = get("/?card=4&card=0").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("AWS cloud Practitioner Essentials"));
        assert!(!body.contains("Microsoft Certified PowerBI"));
    }

    #[tokio::test]
    async fn test_repeated_swipe_keys_still_redirect() {
        let (status, headers, _) = get("/?card=1&card=3&dx=-140&dx=0").await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(headers[header::LOCATION], "/?card=2#certifications");
    }

    #[tokio::test]
    async fn test_swipe_redirects_to_next_card() {
        let (status, headers, _) = get("/?card=1&dx=-140&v=0.2").await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(headers[header::LOCATION], "/?card=2#certifications");
    }

    #[tokio::test]
    async fn test_weak_swipe_keeps_card() {
        let (status, headers, _) = get("/?card=1&dx=10&v=0.1").await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(headers[header::LOCATION], "/?card=1#certifications");
    }

    #[tokio::test]
    async fn test_stylesheet_served_as_css() {
        let (status, headers, body) = get("/assets/site.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "text/css; charset=utf-8");
        assert!(body.contains("@media (min-width: 768px)"));
    }

    #[tokio::test]
    async fn test_script_served() {
        let (status, headers, body) = get("/assets/site.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            headers[header::CONTENT_TYPE],
            "text/javascript; charset=utf-8"
        );
        assert!(body.contains("IntersectionObserver"));
        // Fire-once: each element leaves the observer on its first intersection.
        assert!(body.contains("observer.unobserve(entry.target)"));
        assert!(body.contains("classList.add(\"is-settled\")"));
    }

    #[tokio::test]
    async fn test_content_api_lists_catalog() {
        let (status, _, body) = get("/api/v1/content").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["education"].as_array().unwrap().len(), 2);
        assert_eq!(json["certifications"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_health() {
        let (status, _, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_unknown_path_is_json_404() {
        let (status, _, body) = get("/resume.pdf").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }
}
