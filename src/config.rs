use std::{env, path::PathBuf};

use camino::Utf8Path;
use log::debug;

use crate::error::{ReportError, Result};
use crate::types::OutputMode;

pub fn report_file() -> PathBuf {
    PathBuf::from("assignment_report.md")
}

/// `members` directory next to the running executable.
pub fn default_members_dir() -> Result<PathBuf> {
    let exe = env::current_exe()?;
    let program_dir = exe
        .parent()
        .ok_or_else(|| ReportError::ProgramDir(exe.display().to_string()))?;
    Ok(program_dir.join("members"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub members_dir: PathBuf,
    pub mode: OutputMode,
    pub report_file: PathBuf,
}

impl RunConfig {
    /// Resolves the members directory and output mode from the positional
    /// arguments. A lone argument naming a mode selects that mode; any other
    /// lone argument is a members directory. The mode in the two argument
    /// form is taken as given.
    pub fn from_args(
        first: Option<&Utf8Path>,
        second: Option<&str>,
        default_members_dir: impl FnOnce() -> Result<PathBuf>,
    ) -> Result<RunConfig> {
        let (members_dir, mode) = match (first, second) {
            (None, _) => (default_members_dir()?, OutputMode::Both),
            (Some(first), None) => match first.as_str().parse::<OutputMode>() {
                Ok(mode) => (default_members_dir()?, mode),
                Err(_) => (first.as_std_path().to_path_buf(), OutputMode::Both),
            },
            (Some(first), Some(second)) => (
                first.as_std_path().to_path_buf(),
                OutputMode::from_literal(second),
            ),
        };
        debug!("members directory: {}, mode: {:?}", members_dir.display(), mode);
        Ok(RunConfig {
            members_dir,
            mode,
            report_file: report_file(),
        })
    }
}
