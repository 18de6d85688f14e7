//! Top-level client orchestrating the Runtime and a Frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (frame loop, state snapshots, music)
//!   └─→ Frontend (UI layer, talks to the runtime via RuntimeHandle)
//! ```
//!
//! The binary in `main.rs` is the composition root: it loads content, builds
//! both layers independently and injects them through [`ClientBuilder`].

mod builder;
pub mod config;

pub use builder::ClientBuilder;
pub use config::ClientConfig;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::{Context, Result};

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` receives an already running runtime and a frontend
/// 2. `Client::run()` transfers control to the frontend (blocking)
/// 3. On frontend exit the runtime is shut down and its workers joined
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend until the user quits, then stop the runtime.
    ///
    /// # Errors
    ///
    /// Returns the frontend's error if it failed, otherwise any error from
    /// shutting the runtime down.
    pub async fn run(self) -> Result<()> {
        let Client {
            runtime,
            mut frontend,
        } = self;

        let frontend_result = frontend.run(runtime.handle()).await;
        if let Err(e) = &frontend_result {
            tracing::error!("Frontend error: {:#}", e);
        }

        let shutdown_result = runtime
            .shutdown()
            .await
            .context("failed to shut the runtime down");

        frontend_result.and(shutdown_result)
    }
}
