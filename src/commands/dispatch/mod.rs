//! Command dispatch logic for graphwalk

use std::time::Instant;

use crate::cli::Cli;
use graphwalk_core::error::Result;
use tracing::debug;

mod command;

pub use command::{CommandContext, LoadedGraph};
use command::Command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start)?;

    debug!(elapsed = ?start.elapsed(), format = %ctx.format, "load_config");

    cli.command.execute(&ctx)
}
