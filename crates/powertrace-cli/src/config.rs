use chrono::{DateTime, FixedOffset, Local};
use is_terminal::IsTerminal;
use powertrace_providers::{
    DEFAULT_JOURNALCTL, FileSource, HIBERNATE_UNIT, JournalSource, LogSource, SUSPEND_UNIT,
};
use std::path::{Path, PathBuf};

use crate::args::Cli;
use crate::types::OutputFormat;

/// Where raw journal text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    Journal {
        program: PathBuf,
    },
    Files {
        boot_list: PathBuf,
        suspend_log: Option<PathBuf>,
        hibernate_log: Option<PathBuf>,
    },
}

/// Settings for one run, resolved once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub source: SourceConfig,
    pub format: OutputFormat,
    pub now: DateTime<FixedOffset>,
    pub color: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        let source = match &cli.boot_list {
            Some(boot_list) => SourceConfig::Files {
                boot_list: boot_list.clone(),
                suspend_log: cli.suspend_log.clone(),
                hibernate_log: cli.hibernate_log.clone(),
            },
            None => SourceConfig::Journal {
                program: resolve_journalctl(cli.journalctl.as_deref()),
            },
        };

        Self {
            source,
            format: cli.format,
            now: cli.now.unwrap_or_else(|| Local::now().fixed_offset()),
            color: std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    pub fn open_source(&self) -> Box<dyn LogSource> {
        match &self.source {
            SourceConfig::Journal { program } => Box::new(JournalSource::new(program)),
            SourceConfig::Files {
                boot_list,
                suspend_log,
                hibernate_log,
            } => {
                let mut source = FileSource::new(boot_list);
                if let Some(path) = suspend_log {
                    source = source.with_unit_log(&SUSPEND_UNIT, path);
                }
                if let Some(path) = hibernate_log {
                    source = source.with_unit_log(&HIBERNATE_UNIT, path);
                }
                Box::new(source)
            }
        }
    }
}

/// Resolve the journalctl binary based on priority:
/// 1. Explicit path (--journalctl)
/// 2. POWERTRACE_JOURNALCTL environment variable
/// 3. `journalctl` looked up on PATH
pub fn resolve_journalctl(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Some(env_path) = std::env::var_os("POWERTRACE_JOURNALCTL")
        && !env_path.is_empty()
    {
        return PathBuf::from(env_path);
    }

    PathBuf::from(DEFAULT_JOURNALCTL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_explicit_journalctl_wins() {
        assert_eq!(
            resolve_journalctl(Some(Path::new("/opt/bin/journalctl"))),
            PathBuf::from("/opt/bin/journalctl")
        );
    }

    #[test]
    fn test_file_source_selected_by_boot_list() {
        let cli = Cli::parse_from([
            "powertrace",
            "--boot-list",
            "boots.txt",
            "--hibernate-log",
            "hibernate.log",
            "--now",
            "2025-01-01T00:00:00Z",
        ]);
        let config = Config::from_cli(&cli);

        assert_eq!(
            config.source,
            SourceConfig::Files {
                boot_list: PathBuf::from("boots.txt"),
                suspend_log: None,
                hibernate_log: Some(PathBuf::from("hibernate.log")),
            }
        );
        assert_eq!(config.now.to_rfc3339(), "2025-01-01T00:00:00+00:00");
        assert_eq!(config.open_source().id(), "file");
    }

    #[test]
    fn test_journal_is_default_source() {
        let cli = Cli::parse_from(["powertrace", "--journalctl", "/usr/bin/journalctl"]);
        let config = Config::from_cli(&cli);

        assert_eq!(
            config.source,
            SourceConfig::Journal {
                program: PathBuf::from("/usr/bin/journalctl")
            }
        );
        assert_eq!(config.open_source().id(), "journal");
    }
}
