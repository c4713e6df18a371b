//! Project context
//!
//! Immutable per-run snapshot: working directory, detected language, logger
//! configuration, and the global log root.

use std::path::{Path, PathBuf};

use super::state::LogSource;
use crate::config::{Config, LoggerConfig};
use crate::detector::{self, Language};
use crate::store;

/// What the session operates on
pub struct ProjectContext {
    /// Working directory the tool was launched in
    pub project_path: PathBuf,
    /// Detected language, None when the directory is not a supported project
    pub language: Option<&'static dyn Language>,
    /// Configuration handed to install
    pub logger: LoggerConfig,
    /// Root of the per-user global log tree, None when unknown
    pub global_root: Option<PathBuf>,
}

impl ProjectContext {
    /// Detect the project in `project_path` using the loaded configuration
    pub fn detect(project_path: &Path, config: &Config) -> Self {
        let language = detector::detect_language(project_path);
        match language {
            Some(lang) => tracing::info!(
                "Detected {} project in {}",
                lang.name(),
                project_path.display()
            ),
            None => tracing::info!("No supported project in {}", project_path.display()),
        }

        Self {
            project_path: project_path.to_path_buf(),
            language,
            logger: config.logger.clone(),
            global_root: config.global_root(),
        }
    }

    /// Name of the detected language
    pub fn language_name(&self) -> Option<&'static str> {
        self.language.map(|lang| lang.name())
    }

    /// Log files for a source; empty when the source cannot be resolved
    pub fn logs_for(&self, source: &LogSource) -> Vec<PathBuf> {
        match source {
            LogSource::Local => self
                .language
                .map(|lang| lang.log_paths(&self.project_path, &self.logger))
                .unwrap_or_default(),
            LogSource::Global(project) => self
                .global_root
                .as_deref()
                .map(|root| store::project_logs(root, project))
                .unwrap_or_default(),
        }
    }

    /// Project names under the global root
    pub fn global_projects(&self) -> Vec<String> {
        self.global_root
            .as_deref()
            .map(store::list_projects)
            .unwrap_or_default()
    }

    /// Path shown to the user, relative to the project when possible
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.project_path).unwrap_or(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_detect_without_language() {
        let project = TempDir::new().unwrap();
        let ctx = ProjectContext::detect(project.path(), &Config::default());
        assert!(ctx.language.is_none());
        assert!(ctx.logs_for(&LogSource::Local).is_empty());
    }

    #[test]
    fn test_logs_for_global_project() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::create_dir_all(global.path().join("api")).unwrap();
        fs::write(global.path().join("api/logdog-2024-01-15.json"), "{}\n").unwrap();

        let config = Config {
            global_root: Some(global.path().to_path_buf()),
            ..Config::default()
        };
        let ctx = ProjectContext::detect(project.path(), &config);

        assert_eq!(ctx.global_projects(), vec!["api"]);
        assert_eq!(
            ctx.logs_for(&LogSource::Global("api".to_string())),
            vec![global.path().join("api/logdog-2024-01-15.json")]
        );
        assert!(ctx.logs_for(&LogSource::Global("web".to_string())).is_empty());
    }

    #[test]
    fn test_relative() {
        let ctx = ProjectContext {
            project_path: PathBuf::from("/work/app"),
            language: None,
            logger: LoggerConfig::default(),
            global_root: None,
        };
        assert_eq!(
            ctx.relative(Path::new("/work/app/internal/logdog/logger.go")),
            Path::new("internal/logdog/logger.go")
        );
        assert_eq!(ctx.relative(Path::new("/other/x")), Path::new("/other/x"));
    }
}
