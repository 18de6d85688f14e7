//! The seam between the client shell and a concrete user interface.
use anyhow::Result;
use async_trait::async_trait;
use runtime::RuntimeHandle;

/// A user interface driving a running game.
///
/// The interface only borrows the game through a [`RuntimeHandle`]: it
/// publishes the held controls, watches frame snapshots and listens on the
/// `GameState` and `Audio` topics. Shutting the runtime down is left to the
/// caller.
///
/// ```no_run
/// use anyhow::Result;
/// use async_trait::async_trait;
/// use client_frontend_core::Frontend;
/// use runtime::RuntimeHandle;
///
/// struct Headless;
///
/// #[async_trait]
/// impl Frontend for Headless {
///     async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
///         let mut frames = handle.watch_state();
///         while frames.changed().await.is_ok() {
///             let frame = frames.borrow_and_update().frame;
///             if frame > 600 {
///                 break;
///             }
///         }
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Drive the interface until the player quits.
    ///
    /// # Errors
    ///
    /// Fails when the interface cannot continue, e.g. the terminal is gone.
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()>;
}
