//! Assembles a [`Client`] from independently built layers.

use anyhow::{Result, anyhow};
use runtime::Runtime;

use crate::{Client, Frontend};

/// Collects the runtime and the frontend; both must be supplied.
#[derive(Default)]
pub struct ClientBuilder {
    runtime: Option<Runtime>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The game, already running. See `Runtime::builder()`.
    pub fn runtime(self, runtime: Runtime) -> Self {
        Self {
            runtime: Some(runtime),
            ..self
        }
    }

    /// The interface that will receive the runtime's handle.
    pub fn frontend(self, frontend: impl Frontend + 'static) -> Self {
        Self {
            frontend: Some(Box::new(frontend)),
            ..self
        }
    }

    /// # Errors
    ///
    /// Fails when either layer is missing.
    pub fn build(self) -> Result<Client> {
        match (self.runtime, self.frontend) {
            (Some(runtime), Some(frontend)) => Ok(Client { runtime, frontend }),
            (None, _) => Err(anyhow!("client needs a runtime; call .runtime() first")),
            (_, None) => Err(anyhow!("client needs a frontend; call .frontend() first")),
        }
    }
}
