//! Application Bootstrap
//!
//! Assembles the store, state and router from explicit parts and runs the
//! HTTP server until a shutdown signal arrives.

use super::{LifecycleError, Result, shutdown_signal};
use crate::config::ServerConfig;
use crate::product::ProductStore;
use crate::routes;
use crate::state::AppState;
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

/// A fully assembled application
///
/// # Example
///
/// ```rust,no_run
/// use product_api::config::ServerConfig;
/// use product_api::lifecycle::Application;
/// use product_api::product::ProductStore;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() {
///     let app = Application::builder()
///         .config(ServerConfig::default())
///         .store(Arc::new(ProductStore::with_sample_data()))
///         .build()
///         .expect("Failed to initialize application");
///
///     app.serve().await.expect("Server failed");
/// }
/// ```
pub struct Application {
    config: ServerConfig,
    state: AppState,
}

impl Application {
    /// Create a new application builder
    pub fn builder() -> ApplicationBuilder {
        ApplicationBuilder::new()
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Router over this application's state.
    pub fn router(&self) -> Router {
        routes::router(self.state.clone())
    }

    /// Bind to the configured address and serve until Ctrl+C or SIGTERM.
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| LifecycleError::Bind { addr, source })?;

        self.serve_with_shutdown(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `signal` resolves.
    pub async fn serve_with_shutdown<F>(self, listener: TcpListener, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener.local_addr()?;
        tracing::info!("✅ Server running on http://{}", local_addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(async move {
                signal.await;
                tracing::info!("🛑 Initiating graceful shutdown...");
            })
            .await?;

        tracing::info!("👋 Server stopped");
        Ok(())
    }
}

/// Builder for Application
#[derive(Default)]
pub struct ApplicationBuilder {
    config: Option<ServerConfig>,
    store: Option<Arc<ProductStore>>,
}

impl ApplicationBuilder {
    /// Create a new application builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: ServerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use an existing store. Without one the application starts empty.
    pub fn store(mut self, store: Arc<ProductStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// # Errors
    ///
    /// Returns an error if no configuration was provided.
    pub fn build(self) -> Result<Application> {
        let config = self
            .config
            .ok_or_else(|| LifecycleError::init_failed("Configuration not provided"))?;
        let store = self.store.unwrap_or_default();

        tracing::info!("Application initialized with {} product(s)", store.len());

        Ok(Application {
            config,
            state: AppState::new(store),
        })
    }
}
