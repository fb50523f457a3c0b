//! Explicit route table.
//!
//! Every product endpoint is listed in [`route_table`]. The table is folded
//! into an axum [`Router`], which does the actual dispatch. The OpenAPI
//! document and the Swagger UI are merged in beside it.

use crate::interceptor::{InterceptorLayer, LoggingInterceptor};
use crate::openapi;
use crate::product::handlers;
use crate::state::AppState;
use axum::{
    Router,
    handler::Handler,
    http::Method,
    routing::{self, MethodRouter},
};
use std::sync::Arc;

const PRODUCT_ITEM_PATH: &str = "/api/products/{id}";

/// One `(method, path)` entry and the handler serving it.
pub struct Route {
    pub method: Method,
    pub path: &'static str,
    handler: MethodRouter<AppState>,
}

impl Route {
    pub fn get<H, T>(path: &'static str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self::new(Method::GET, path, routing::get(handler))
    }

    pub fn post<H, T>(path: &'static str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self::new(Method::POST, path, routing::post(handler))
    }

    pub fn put<H, T>(path: &'static str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self::new(Method::PUT, path, routing::put(handler))
    }

    pub fn delete<H, T>(path: &'static str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self::new(Method::DELETE, path, routing::delete(handler))
    }

    fn new(method: Method, path: &'static str, handler: MethodRouter<AppState>) -> Self {
        Self {
            method,
            path,
            handler,
        }
    }
}

pub fn route_table() -> Vec<Route> {
    vec![
        Route::get(handlers::PRODUCTS_PATH, handlers::list_products),
        Route::get(PRODUCT_ITEM_PATH, handlers::get_product),
        Route::post(handlers::PRODUCTS_PATH, handlers::create_product),
        Route::put(PRODUCT_ITEM_PATH, handlers::update_product),
        Route::delete(PRODUCT_ITEM_PATH, handlers::delete_product),
    ]
}

/// Build the application router over the given state.
pub fn router(state: AppState) -> Router {
    let router = route_table()
        .into_iter()
        .fold(Router::<AppState>::new(), |router, route| {
            tracing::debug!("Mapped {} {}", route.method, route.path);
            router.route(route.path, route.handler)
        });

    router
        .merge(openapi::swagger_ui())
        .layer(InterceptorLayer::new(vec![Arc::new(LoggingInterceptor)]))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{Product, ProductStore, handlers::MAX_BODY_BYTES};
    use axum::{
        body::Body,
        http::{Request, Response, StatusCode, header},
    };
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;

    fn seeded() -> (Router, Arc<ProductStore>) {
        let store = Arc::new(ProductStore::with_sample_data());
        (router(AppState::new(Arc::clone(&store))), store)
    }

    fn request(method: Method, uri: &str, body: Option<&str>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(router: &Router, req: Request<Body>) -> Response<Body> {
        router.clone().oneshot(req).await.unwrap()
    }

    async fn json<T: DeserializeOwned>(response: Response<Body>) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_len(response: Response<Body>) -> usize {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .len()
    }

    #[test]
    fn test_route_table_entries() {
        let table: Vec<(Method, &str)> = route_table()
            .into_iter()
            .map(|route| (route.method, route.path))
            .collect();

        assert_eq!(
            table,
            vec![
                (Method::GET, "/api/products"),
                (Method::GET, "/api/products/{id}"),
                (Method::POST, "/api/products"),
                (Method::PUT, "/api/products/{id}"),
                (Method::DELETE, "/api/products/{id}"),
            ]
        );
    }

    #[tokio::test]
    async fn test_sample_scenario() {
        let (app, store) = seeded();

        let response = send(&app, request(Method::GET, "/api/products", None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let mut all: Vec<Product> = json(response).await;
        all.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(
            all,
            vec![
                Product::new("1", "Laptop", 1200.0),
                Product::new("2", "Mouse", 25.0),
                Product::new("3", "Keyboard", 75.0),
            ]
        );

        let response = send(&app, request(Method::GET, "/api/products/2", None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let mouse: Product = json(response).await;
        assert_eq!(mouse, Product::new("2", "Mouse", 25.0));

        let response = send(
            &app,
            request(
                Method::POST,
                "/api/products",
                Some(r#"{"name":"Monitor","price":300.0}"#),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let location = response.headers()[header::LOCATION]
            .to_str()
            .unwrap()
            .to_string();
        let monitor: Product = json(response).await;
        assert!(!["1", "2", "3"].contains(&monitor.id.as_str()));
        assert_eq!(location, format!("/api/products/{}", monitor.id));
        assert_eq!(monitor.name, "Monitor");
        assert_eq!(store.get(&monitor.id), Some(monitor.clone()));

        let response = send(&app, request(Method::DELETE, "/api/products/1", None)).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let response = send(&app, request(Method::GET, "/api/products/1", None)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_len(response).await, 0);

        let response = send(
            &app,
            request(
                Method::PUT,
                "/api/products/2",
                Some(r#"{"id":"2","name":"Mouse Pro","price":30.0}"#),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let updated: Product = json(response).await;
        assert_eq!(updated, Product::new("2", "Mouse Pro", 30.0));

        let response = send(&app, request(Method::GET, "/api/products/2", None)).await;
        let mouse: Product = json(response).await;
        assert_eq!(mouse, Product::new("2", "Mouse Pro", 30.0));
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let app = router(AppState::default());
        let response = send(&app, request(Method::GET, "/api/products", None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let all: Vec<Product> = json(response).await;
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_created_products_are_listed() {
        let app = router(AppState::default());

        let mut ids = Vec::new();
        for i in 0..5 {
            let body = format!(r#"{{"name":"item-{}","price":{}.5}}"#, i, i);
            let response = send(&app, request(Method::POST, "/api/products", Some(&body))).await;
            assert_eq!(response.status(), StatusCode::CREATED);
            let created: Product = json(response).await;
            ids.push(created.id);
        }

        let response = send(&app, request(Method::GET, "/api/products", None)).await;
        let all: Vec<Product> = json(response).await;
        assert_eq!(all.len(), 5);
        for id in ids {
            let uri = format!("/api/products/{}", id);
            let response = send(&app, request(Method::GET, &uri, None)).await;
            assert_eq!(response.status(), StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn test_create_malformed_body() {
        let (app, store) = seeded();

        for body in ["not json", r#"{"name":"Monitor"}"#, r#"{"name":1,"price":2}"#, ""] {
            let response = send(&app, request(Method::POST, "/api/products", Some(body))).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {:?}", body);
        }
        assert_eq!(store.len(), 3);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let (app, store) = seeded();

        let response = send(
            &app,
            request(
                Method::PUT,
                "/api/products/missing",
                Some(r#"{"id":"missing","name":"Ghost","price":1.0}"#),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Existence is checked before the body is read.
        let response = send(
            &app,
            request(Method::PUT, "/api/products/missing", Some("garbage")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        assert!(!store.contains("missing"));
        assert_eq!(store.len(), 3);
    }

    #[tokio::test]
    async fn test_update_rejects_bad_bodies() {
        let (app, store) = seeded();

        let response = send(&app, request(Method::PUT, "/api/products/2", Some("{"))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(
            &app,
            request(
                Method::PUT,
                "/api/products/2",
                Some(r#"{"id":"3","name":"Mouse Pro","price":30.0}"#),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        assert_eq!(store.get("2"), Some(Product::new("2", "Mouse", 25.0)));
        assert_eq!(store.get("3"), Some(Product::new("3", "Keyboard", 75.0)));
    }

    #[tokio::test]
    async fn test_update_without_body_id_uses_path_id() {
        let (app, store) = seeded();

        let response = send(
            &app,
            request(
                Method::PUT,
                "/api/products/3",
                Some(r#"{"name":"Keyboard Mk2","price":99.0}"#),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let updated: Product = json(response).await;
        assert_eq!(updated, Product::new("3", "Keyboard Mk2", 99.0));
        assert_eq!(store.get("3"), Some(updated));
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let (app, _) = seeded();

        let response = send(&app, request(Method::DELETE, "/api/products/3", None)).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(body_len(response).await, 0);

        let response = send(&app, request(Method::DELETE, "/api/products/3", None)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    fn oversized_body(id: Option<&str>) -> String {
        let name = "a".repeat(MAX_BODY_BYTES + 1024);
        match id {
            Some(id) => format!(r#"{{"id":"{}","name":"{}","price":1.0}}"#, id, name),
            None => format!(r#"{{"name":"{}","price":1.0}}"#, name),
        }
    }

    #[tokio::test]
    async fn test_update_unknown_id_with_oversized_body() {
        let (app, store) = seeded();

        let body = oversized_body(Some("missing"));
        let response = send(
            &app,
            request(Method::PUT, "/api/products/missing", Some(&body)),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_len(response).await, 0);
        assert_eq!(store.len(), 3);
    }

    #[tokio::test]
    async fn test_oversized_bodies_are_bad_requests() {
        let (app, store) = seeded();

        let body = oversized_body(None);
        let response = send(&app, request(Method::POST, "/api/products", Some(&body))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_len(response).await, 0);

        let body = oversized_body(Some("2"));
        let response = send(&app, request(Method::PUT, "/api/products/2", Some(&body))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_len(response).await, 0);

        assert_eq!(store.len(), 3);
        assert_eq!(store.get("2"), Some(Product::new("2", "Mouse", 25.0)));
    }

    #[tokio::test]
    async fn test_swagger_ui_served() {
        let (app, _) = seeded();

        let response = send(&app, request(Method::GET, "/swagger-ui/", None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_len(response).await > 0);

        let response = send(&app, request(Method::GET, "/swagger-ui", None)).await;
        assert_ne!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_api_docs_served() {
        let (app, _) = seeded();

        let response = send(&app, request(Method::GET, "/v3/api-docs", None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let doc: serde_json::Value = json(response).await;
        assert_eq!(doc["info"]["title"], "Product API");
        assert!(doc["paths"].get("/api/products/{id}").is_some());
    }
}
