use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{PlacerError, PlacerResult};

/// Destination for action outputs. Repeated writes of the same name are
/// allowed; the last one wins.
pub trait OutputSink {
    fn publish(&mut self, name: &str, value: &str) -> PlacerResult<()>;
}

/// Appends `name=value` lines to the file named by `GITHUB_OUTPUT`.
pub struct GithubOutputFile {
    path: PathBuf,
}

impl GithubOutputFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputSink for GithubOutputFile {
    fn publish(&mut self, name: &str, value: &str) -> PlacerResult<()> {
        if value.contains('\n') || value.contains('\r') {
            return Err(PlacerError::InvalidInput(format!(
                "output {} must be a single line",
                name
            )));
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}={}", name, value)?;

        info!(output = name, %value, "published output");
        Ok(())
    }
}

/// Used outside the Actions runner, where there is no output file.
#[derive(Debug, Default)]
pub struct LogOutputs;

impl OutputSink for LogOutputs {
    fn publish(&mut self, name: &str, value: &str) -> PlacerResult<()> {
        info!(output = name, %value, "output (no GITHUB_OUTPUT file configured)");
        Ok(())
    }
}
