//! Application lifecycle
//!
//! ```text
//! 1. Configuration loading
//!    ↓
//! 2. Store construction (optionally seeded)
//!    ↓
//! 3. Application::build
//!    ↓
//! 4. Bind + serve
//!    ↓
//! [Running...]
//!    ↓
//! 5. Shutdown signal (SIGTERM/SIGINT)
//!    ↓
//! 6. In-flight requests drain, server stops
//! ```

mod application;
mod error;
mod shutdown;

pub use application::{Application, ApplicationBuilder};
pub use error::{LifecycleError, Result};
pub use shutdown::shutdown_signal;
