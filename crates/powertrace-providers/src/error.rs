use std::fmt;
use std::path::PathBuf;

/// Result type for powertrace-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the providers layer
#[derive(Debug)]
pub enum Error {
    /// Reading a log file failed
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The log command could not be started
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// The log command ran but reported failure
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// The source has no data for this query
    Unavailable(String),

    /// The boot listing could not be retrieved; nothing can be reconstructed
    BootList {
        source_id: &'static str,
        cause: Box<Error>,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::File { path, source } => {
                write!(f, "Cannot read {}: {}", path.display(), source)
            }
            Error::Spawn { command, source } => {
                write!(f, "Cannot run `{}`: {}", command, source)
            }
            Error::CommandFailed {
                command,
                status,
                stderr,
            } => {
                if stderr.is_empty() {
                    write!(f, "`{}` failed ({})", command, status)
                } else {
                    write!(f, "`{}` failed ({}): {}", command, status, stderr)
                }
            }
            Error::Unavailable(msg) => write!(f, "Unavailable: {}", msg),
            Error::BootList { source_id, cause } => {
                write!(f, "Cannot read boot list from {} source: {}", source_id, cause)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::File { source, .. } | Error::Spawn { source, .. } => Some(source),
            Error::BootList { cause, .. } => Some(cause.as_ref()),
            Error::CommandFailed { .. } | Error::Unavailable(_) => None,
        }
    }
}
