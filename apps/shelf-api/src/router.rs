//! # Router
//!
//! Builds the axum [`Router`] with its middleware stack.
//!
//! ```text
//! request ─► TraceLayer ─► CorsLayer (permissive) ─► route ─► handler
//! ```

use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::health::health;
use crate::handlers::product::{
    create_product, delete_product, get_product, list_products, update_product,
};
use crate::state::AppState;

/// Creates the application router.
///
/// Both `/products` and `/products/` are routed so clients may use either
/// form.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).patch(update_product).delete(delete_product),
        )
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use shelf_db::{Database, DbConfig};
    use tower::ServiceExt;

    async fn app() -> (Router, Database) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        (create_router(AppState::new(db.clone())), db)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn names(body: &Value) -> Vec<&str> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|p| p["product_name"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_pen_scenario_over_http() {
        let (app, _db) = app().await;

        let (status, pen) = send(
            &app,
            Method::POST,
            "/products/",
            Some(json!({"product_name": "Pen", "product_quantity": 10, "product_price": 2.0})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            pen,
            json!({"product_id": 1, "product_name": "Pen", "product_quantity": 10, "product_price": 2.0})
        );

        let (status, body) = send(
            &app,
            Method::POST,
            "/products/",
            Some(json!({"product_name": "Pen", "product_quantity": 5, "product_price": 3.0})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "CONFLICT");

        let (status, body) = send(&app, Method::GET, "/products/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, pen);

        let (status, body) = send(
            &app,
            Method::PATCH,
            "/products/1",
            Some(json!({"product_quantity": 20})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"product_id": 1, "product_name": "Pen", "product_quantity": 20, "product_price": 2.0})
        );

        let (status, body) = send(&app, Method::DELETE, "/products/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"ok": true}));

        let (status, body) = send(&app, Method::GET, "/products/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Product not found");
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_create_without_quantity_stores_one() {
        let (app, _db) = app().await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/products/",
            Some(json!({"product_name": "Pen", "product_price": 2})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["product_quantity"], 1);

        let (_, stored) = send(&app, Method::GET, "/products/1", None).await;
        assert_eq!(stored, body);
    }

    #[tokio::test]
    async fn test_list_paging_over_http() {
        let (app, _db) = app().await;

        for name in ["P1", "P2", "P3", "P4", "P5"] {
            let (status, _) = send(
                &app,
                Method::POST,
                "/products",
                Some(json!({"product_name": name, "product_quantity": 1, "product_price": 1.0})),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, body) = send(&app, Method::GET, "/products/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body), vec!["P5", "P4", "P3", "P2", "P1"]);

        let (status, body) = send(&app, Method::GET, "/products?skip=1&limit=2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body), vec!["P4", "P3"]);
    }

    #[tokio::test]
    async fn test_missing_ids_are_404() {
        let (app, _db) = app().await;

        let (status, body) = send(
            &app,
            Method::PATCH,
            "/products/42",
            Some(json!({"product_name": "Ghost"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Product not found");

        let (status, _) = send(&app, Method::DELETE, "/products/42", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_bad_input_is_422() {
        let (app, _db) = app().await;

        // Field rule
        let (status, body) = send(
            &app,
            Method::POST,
            "/products/",
            Some(json!({"product_name": "Pen", "product_quantity": 0, "product_price": 2.0})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["field"], "product_quantity");

        // Missing required field
        let (status, body) = send(
            &app,
            Method::POST,
            "/products/",
            Some(json!({"product_name": "Pen", "product_quantity": 3})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "VALIDATION_ERROR");

        // Non-integer path id
        let (status, body) = send(&app, Method::GET, "/products/abc", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "VALIDATION_ERROR");

        // Negative paging
        let (status, body) = send(&app, Method::GET, "/products/?skip=-1", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["field"], "skip");

        // Non-integer paging
        let (status, _) = send(&app, Method::GET, "/products/?limit=ten", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_null_patch_fields_are_ignored() {
        let (app, _db) = app().await;

        send(
            &app,
            Method::POST,
            "/products/",
            Some(json!({"product_name": "Pen", "product_quantity": 10, "product_price": 2.0})),
        )
        .await;

        let (status, body) = send(
            &app,
            Method::PATCH,
            "/products/1",
            Some(json!({"product_name": null, "product_price": 4.5})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"product_id": 1, "product_name": "Pen", "product_quantity": 10, "product_price": 4.5})
        );
    }

    #[tokio::test]
    async fn test_default_list_limit_from_state() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let app = create_router(AppState::new(db).with_default_list_limit(2));

        for name in ["A", "B", "C"] {
            send(
                &app,
                Method::POST,
                "/products/",
                Some(json!({"product_name": name, "product_quantity": 1, "product_price": 1.0})),
            )
            .await;
        }

        let (_, body) = send(&app, Method::GET, "/products/", None).await;
        assert_eq!(names(&body), vec!["C", "B"]);
    }

    #[tokio::test]
    async fn test_health() {
        let (app, db) = app().await;

        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));

        db.close().await;

        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, json!({"status": "unhealthy"}));
    }

    #[tokio::test]
    async fn test_closed_pool_is_500() {
        let (app, db) = app().await;
        db.close().await;

        let (status, body) = send(&app, Method::GET, "/products/1", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "DATABASE_ERROR");
    }

    #[tokio::test]
    async fn test_cors_preflight_is_permitted() {
        let (app, _db) = app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/products/")
                    .header(header::ORIGIN, "http://example.com")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
