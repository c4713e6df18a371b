//! Project language detection
//!
//! Each supported language answers three questions about a project directory:
//! does it match, how to install the logger package into it, and where its log
//! files live.

mod go;

pub use go::GoLanguage;

use std::path::{Path, PathBuf};

use crate::config::LoggerConfig;
use crate::error::InstallError;

/// Result of a successful install
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    /// Path of the logger source file that was written
    pub logger_path: PathBuf,
    /// Directory the logger will write to
    pub output_dir: PathBuf,
    /// Whether an existing logger file was overwritten
    pub replaced_existing: bool,
}

/// A supported project type
pub trait Language: Sync {
    /// Display name, e.g. "Go"
    fn name(&self) -> &'static str;

    /// Whether `project_path` is a project of this type
    fn detect(&self, project_path: &Path) -> bool;

    /// Write the logger package and create the output directory
    ///
    /// An existing logger file is overwritten; the outcome reports when that happened.
    fn install(
        &self,
        project_path: &Path,
        config: &LoggerConfig,
    ) -> Result<InstallOutcome, InstallError>;

    /// Relative location of the logger source file inside a project
    fn logger_file(&self) -> &'static str;

    /// Log files the installed logger produces, sorted by path
    fn log_paths(&self, project_path: &Path, config: &LoggerConfig) -> Vec<PathBuf>;
}

/// Registered languages in priority order
static SUPPORTED_LANGUAGES: &[&dyn Language] = &[&GoLanguage];

/// Detect the language of a project directory
///
/// Returns the first registered language that matches, or None.
pub fn detect_language(project_path: &Path) -> Option<&'static dyn Language> {
    SUPPORTED_LANGUAGES
        .iter()
        .copied()
        .find(|lang| lang.detect(project_path))
}
