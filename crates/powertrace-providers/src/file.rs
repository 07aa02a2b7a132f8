use std::path::{Path, PathBuf};

use crate::registry::UnitSpec;
use crate::traits::LogSource;
use crate::{Error, Result};

/// Reads previously captured journal output from files.
///
/// The boot listing is required; unit histories are optional and a unit
/// without a file reports [`Error::Unavailable`].
#[derive(Debug, Clone)]
pub struct FileSource {
    boot_list: PathBuf,
    unit_logs: Vec<(&'static str, PathBuf)>,
}

impl FileSource {
    pub fn new(boot_list: impl Into<PathBuf>) -> Self {
        Self {
            boot_list: boot_list.into(),
            unit_logs: Vec::new(),
        }
    }

    pub fn with_unit_log(mut self, unit: &UnitSpec, path: impl Into<PathBuf>) -> Self {
        self.unit_logs.retain(|(name, _)| *name != unit.name);
        self.unit_logs.push((unit.name, path.into()));
        self
    }

    fn read(path: &Path) -> Result<String> {
        let bytes = std::fs::read(path).map_err(|source| Error::File {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl LogSource for FileSource {
    fn id(&self) -> &'static str {
        "file"
    }

    fn boot_list(&self) -> Result<String> {
        Self::read(&self.boot_list)
    }

    fn unit_history(&self, unit: &UnitSpec) -> Result<String> {
        let path = self
            .unit_logs
            .iter()
            .find(|(name, _)| *name == unit.name)
            .map(|(_, path)| path)
            .ok_or_else(|| Error::Unavailable(format!("no log file given for {}", unit.name)))?;
        Self::read(path)
    }
}
