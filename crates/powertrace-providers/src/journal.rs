use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::registry::UnitSpec;
use crate::traits::LogSource;
use crate::{Error, Result};

pub const DEFAULT_JOURNALCTL: &str = "journalctl";

/// Reads boot and unit history from the systemd journal via `journalctl`.
#[derive(Debug, Clone)]
pub struct JournalSource {
    program: PathBuf,
}

impl Default for JournalSource {
    fn default() -> Self {
        Self::new(DEFAULT_JOURNALCTL)
    }
}

impl JournalSource {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn boot_list_args() -> Vec<String> {
        vec![
            "--list-boots".to_string(),
            "--no-pager".to_string(),
            "--output=short-iso".to_string(),
        ]
    }

    pub fn unit_history_args(unit: &UnitSpec) -> Vec<String> {
        vec![
            "--no-pager".to_string(),
            "-o".to_string(),
            "short-iso".to_string(),
            "-u".to_string(),
            unit.name.to_string(),
        ]
    }

    fn run(&self, args: &[String]) -> Result<String> {
        let command = format!("{} {}", self.program.display(), args.join(" "));
        debug!(%command, "running");

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| Error::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl LogSource for JournalSource {
    fn id(&self) -> &'static str {
        "journal"
    }

    fn boot_list(&self) -> Result<String> {
        self.run(&Self::boot_list_args())
    }

    fn unit_history(&self, unit: &UnitSpec) -> Result<String> {
        self.run(&Self::unit_history_args(unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SUSPEND_UNIT;

    #[test]
    fn test_unit_history_args() {
        assert_eq!(
            JournalSource::unit_history_args(&SUSPEND_UNIT).join(" "),
            "--no-pager -o short-iso -u systemd-suspend.service"
        );
    }

    #[test]
    fn test_missing_binary_is_spawn_error() {
        let source = JournalSource::new("/nonexistent/powertrace-journalctl");
        match source.boot_list() {
            Err(Error::Spawn { command, .. }) => {
                assert!(command.starts_with("/nonexistent/powertrace-journalctl --list-boots"));
            }
            other => panic!("expected spawn error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_command_failure() {
        // `false` ignores its arguments and exits 1
        let source = JournalSource::new("false");
        assert!(matches!(
            source.unit_history(&SUSPEND_UNIT),
            Err(Error::CommandFailed { .. })
        ));
    }
}
