use chrono::{DateTime, FixedOffset};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::{LogLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "powertrace")]
#[command(about = "Reconstruct boot, suspend and shutdown sessions from the systemd journal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Reference instant (RFC 3339) used to tell the running boot from a
    /// finished one and to end a still-active session; defaults to now
    #[arg(long, global = true, value_parser = parse_instant)]
    pub now: Option<DateTime<FixedOffset>>,

    /// journalctl binary (falls back to $POWERTRACE_JOURNALCTL, then PATH)
    #[arg(long, global = true, conflicts_with = "boot_list")]
    pub journalctl: Option<PathBuf>,

    /// Read a saved `journalctl --list-boots` listing instead of the journal
    #[arg(long, global = true)]
    pub boot_list: Option<PathBuf>,

    /// Saved `journalctl -o short-iso -u systemd-suspend.service` output
    #[arg(long, global = true, requires = "boot_list")]
    pub suspend_log: Option<PathBuf>,

    /// Saved `journalctl -o short-iso -u systemd-hibernate.service` output
    #[arg(long, global = true, requires = "boot_list")]
    pub hibernate_log: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show active sessions and a summary (default)
    History,

    /// Show the normalized power event stream
    Events,
}

fn parse_instant(value: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(value)
        .map_err(|e| format!("expected an RFC 3339 timestamp like 2025-01-01T18:00:00+01:00 ({})", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_now_parsing() {
        let cli = Cli::try_parse_from(["powertrace", "--now", "2025-01-01T18:00:30Z"]).unwrap();
        assert_eq!(cli.now.unwrap().to_rfc3339(), "2025-01-01T18:00:30+00:00");
        assert!(Cli::try_parse_from(["powertrace", "--now", "yesterday"]).is_err());
    }

    #[test]
    fn test_unit_logs_need_boot_list() {
        assert!(Cli::try_parse_from(["powertrace", "--suspend-log", "s.log"]).is_err());
        assert!(
            Cli::try_parse_from([
                "powertrace",
                "--boot-list",
                "b.txt",
                "--suspend-log",
                "s.log",
                "events"
            ])
            .is_ok()
        );
    }
}
