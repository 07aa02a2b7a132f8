use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use crate::logging;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config = Config::from_cli(&cli);
    tracing::debug!(source = ?config.source, now = %config.now, "resolved config");

    match cli.command.unwrap_or(Commands::History) {
        Commands::History => handlers::history::handle(&config),
        Commands::Events => handlers::events::handle(&config),
    }
}
