use crate::error::ApiError;
use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response};
use std::future::Future;
use std::pin::Pin;

mod layer;
mod logging;

pub use layer::{InterceptorLayer, InterceptorMiddleware};
pub use logging::LoggingInterceptor;

/// Return type for interceptors. Errors are rendered as responses by the layer.
pub type InterceptorResult = Result<Response, ApiError>;

type BoxedFuture = Pin<Box<dyn Future<Output = InterceptorResult> + Send>>;

type BoxedRun = Box<dyn FnOnce(Request<Body>) -> BoxedFuture + Send>;

/// Represents the next handler in the chain
pub struct Next {
    run: BoxedRun,
}

impl Next {
    /// Create a new Next handler
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(Request<Body>) -> BoxedFuture + Send + 'static,
    {
        Self { run: Box::new(f) }
    }

    /// Execute the next handler
    pub async fn run(self, request: Request<Body>) -> InterceptorResult {
        (self.run)(request).await
    }
}

/// The Interceptor trait
///
/// Interceptors can inspect/modify the request before it reaches the handler,
/// and inspect/modify the response after the handler returns.
///
/// # Example
/// ```
/// use axum::{body::Body, http::Request};
/// use product_api::interceptor::{Interceptor, InterceptorResult, Next};
///
/// struct Noop;
///
/// #[async_trait::async_trait]
/// impl Interceptor for Noop {
///     async fn intercept(&self, request: Request<Body>, next: Next) -> InterceptorResult {
///         next.run(request).await
///     }
/// }
/// ```
#[async_trait]
pub trait Interceptor: Send + Sync + 'static {
    async fn intercept(&self, request: Request<Body>, next: Next) -> InterceptorResult;
}
