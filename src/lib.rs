//! # Product API
//!
//! A small REST service for managing products, backed by an in-memory
//! concurrent store and described by an OpenAPI document.
//!
//! ## Endpoints
//!
//! | Method | Path                  | Result                              |
//! |--------|-----------------------|-------------------------------------|
//! | GET    | `/api/products`       | 200, all products                   |
//! | GET    | `/api/products/{id}`  | 200 product, 404                    |
//! | POST   | `/api/products`       | 201 + `Location`, 400               |
//! | PUT    | `/api/products/{id}`  | 200 stored product, 400, 404        |
//! | DELETE | `/api/products/{id}`  | 204, 404                            |
//! | GET    | `/v3/api-docs`        | 200, OpenAPI document               |
//! | GET    | `/swagger-ui/`        | 200, Swagger UI                     |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use product_api::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_service(&ConfigService::from_env())?;
//!
//!     Application::builder()
//!         .config(config)
//!         .store(Arc::new(ProductStore::with_sample_data()))
//!         .build()?
//!         .serve()
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod interceptor;
pub mod lifecycle;
pub mod openapi;
pub mod product;
pub mod routes;
pub mod state;

// Re-export core types
pub use error::{ApiError, Result};
pub use product::{Product, ProductStore};
pub use state::AppState;

/// Prelude module for convenient imports
///
/// ```
/// use product_api::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{ConfigService, ServerConfig};
    pub use crate::error::{ApiError, Result};
    pub use crate::interceptor::{Interceptor, InterceptorLayer, InterceptorResult, Next};
    pub use crate::lifecycle::{Application, ApplicationBuilder, LifecycleError, shutdown_signal};
    pub use crate::product::{CreateProductRequest, Product, ProductStore, UpdateProductRequest};
    pub use crate::state::AppState;
    pub use std::sync::Arc;
}
