//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use evalview_core::config::EvalviewConfig;
use evalview_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
    pub config: &'a EvalviewConfig,
    pub format: OutputFormat,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        cli: &'a Cli,
        root: &'a PathBuf,
        start: Instant,
        config: &'a EvalviewConfig,
        format: OutputFormat,
    ) -> Self {
        Self {
            cli,
            root,
            start,
            config,
            format,
        }
    }

    /// Decimal places for rendered scores
    pub fn precision(&self) -> usize {
        self.config.display.precision
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("evalview {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Inspect, validate and compare evaluation job results.");
        println!();
        println!("Run `evalview --help` for usage information.");
        Ok(())
    }
}
