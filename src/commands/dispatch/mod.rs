//! Command dispatch logic for evalview

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::paths::resolve_root_path;
use crate::cli::{Cli, OutputFormat};
use evalview_core::config::EvalviewConfig;
use evalview_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, NoCommand};

/// Root, configuration and output format resolved for one invocation
pub struct Session {
    root: PathBuf,
    config: EvalviewConfig,
    format: OutputFormat,
    start: Instant,
}

impl Session {
    /// Effective output format for command output and errors alike
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn run(&self, cli: &Cli) -> Result<()> {
        let ctx = CommandContext::new(cli, &self.root, self.start, &self.config, self.format);

        match &cli.command {
            None => NoCommand.execute(&ctx),
            Some(cmd) => cmd.execute(&ctx),
        }
    }
}

pub fn prepare(cli: &Cli, start: Instant) -> Result<Session> {
    let root = resolve_root_path(cli.root.clone());

    debug!(elapsed = ?start.elapsed(), "resolve_root");

    let (config, source) = EvalviewConfig::resolve(cli.config.as_deref(), &root)?;

    debug!(source = %source, elapsed = ?start.elapsed(), "resolve_config");

    // `--format`, else the configured default, else human
    let format = cli.format.or(config.default_format).unwrap_or_default();

    Ok(Session {
        root,
        config,
        format,
        start,
    })
}
