//! Go project support

use std::fs;
use std::path::{Path, PathBuf};

use super::{InstallOutcome, Language};
use crate::config::LoggerConfig;
use crate::error::InstallError;
use crate::store;

/// Logger package source, with `{{...}}` placeholders filled at install time
const LOGGER_TEMPLATE: &str = include_str!("../../templates/logger.go.tmpl");

/// Location of the generated package inside the project
const LOGGER_FILE: &str = "internal/logdog/logger.go";

/// Go modules (a `go.mod` at the project root)
#[derive(Debug, Clone, Copy, Default)]
pub struct GoLanguage;

impl GoLanguage {
    /// Fill the logger template for a project
    fn render_logger(project_path: &Path, config: &LoggerConfig) -> String {
        let project = project_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "project".to_string());

        LOGGER_TEMPLATE
            .replace("{{OUTPUT_DIR}}", &go_string(&config.output_dir))
            .replace("{{LOG_LEVEL}}", &go_string(&config.log_level))
            .replace("{{MAX_FILES}}", &config.max_files.to_string())
            .replace("{{DATE_FORMAT}}", &go_string(&config.date_format))
            .replace("{{PROJECT}}", &go_string(&project))
    }
}

/// Escape a value for use inside a Go double-quoted string literal
fn go_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

impl Language for GoLanguage {
    fn name(&self) -> &'static str {
        "Go"
    }

    fn detect(&self, project_path: &Path) -> bool {
        project_path.join("go.mod").is_file()
    }

    fn install(
        &self,
        project_path: &Path,
        config: &LoggerConfig,
    ) -> Result<InstallOutcome, InstallError> {
        let logger_path = project_path.join(LOGGER_FILE);
        if let Some(package_dir) = logger_path.parent() {
            fs::create_dir_all(package_dir).map_err(|source| InstallError::CreateDir {
                path: package_dir.to_path_buf(),
                source,
            })?;
        }

        let replaced_existing = logger_path.exists();
        if replaced_existing {
            tracing::warn!("Overwriting existing logger at {}", logger_path.display());
        }

        fs::write(&logger_path, Self::render_logger(project_path, config)).map_err(|source| {
            InstallError::WriteFile {
                path: logger_path.clone(),
                source,
            }
        })?;

        let output_dir = project_path.join(&config.output_dir);
        fs::create_dir_all(&output_dir).map_err(|source| InstallError::CreateDir {
            path: output_dir.clone(),
            source,
        })?;

        tracing::info!(
            "Installed Go logger at {} (output: {})",
            logger_path.display(),
            output_dir.display()
        );

        Ok(InstallOutcome {
            logger_path,
            output_dir,
            replaced_existing,
        })
    }

    fn logger_file(&self) -> &'static str {
        LOGGER_FILE
    }

    fn log_paths(&self, project_path: &Path, config: &LoggerConfig) -> Vec<PathBuf> {
        store::list_logs(&project_path.join(&config.output_dir))
    }
}
