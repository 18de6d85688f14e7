//! Glue code tying the runtime handle and the terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use game_core::GameConfig;
use runtime::RuntimeHandle;

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal;
use client_frontend_core::{EventConsumer, Frontend, FrontendConfig, MessageFeed, format};

/// Terminal frontend. Does not own the runtime; [`Frontend::run`] drives the
/// UI until the player quits.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
    game_config: GameConfig,
}

impl CliFrontend {
    pub fn new(
        frontend_config: FrontendConfig,
        cli_config: CliConfig,
        game_config: GameConfig,
    ) -> Self {
        Self {
            frontend_config,
            cli_config,
            game_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        tracing::info!("CLI frontend starting...");

        let initial_state = handle.snapshot();
        let mut consumer = MessageFeed::new(self.frontend_config.messages.clone());
        consumer.message_log_mut().push_text(format!(
            "[{}] Welcome to the meadow.",
            format::clock_label(initial_state.clock.hour(), initial_state.clock.minute())
        ));

        let (mut terminal, reports_releases) = terminal::init()?;
        let _guard = terminal::TerminalGuard;
        tracing::debug!(reports_releases, "terminal ready");

        let event_loop = EventLoop::new(
            handle,
            consumer,
            self.game_config.clone(),
            self.cli_config.clone(),
            reports_releases,
        );
        let _consumer = event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!("CLI frontend exiting");

        Ok(())
    }
}
