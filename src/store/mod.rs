//! Log file store
//!
//! Thin filesystem accessor for the JSON log files the generated logger writes:
//! listing (local and global), entry counting, reading, and deletion.
//! Listings are sorted by path so the UI order never depends on directory-read order.

mod retention;

pub use retention::{cutoff_for, modified_before, older_than};

use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// File name prefix of logger output files
pub const LOG_FILE_PREFIX: &str = "logdog-";

/// File extension of logger output files
pub const LOG_FILE_EXTENSION: &str = "json";

/// Check whether a file name follows the logger's naming convention
pub fn is_log_file_name(name: &str) -> bool {
    name.starts_with(LOG_FILE_PREFIX) && has_json_extension(Path::new(name))
}

fn has_json_extension(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(LOG_FILE_EXTENSION)
}

/// List log files directly inside `dir` (non-recursive)
///
/// A missing or unreadable directory yields an empty list.
pub fn list_logs(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(is_log_file_name)
        })
        .collect();
    paths.sort();
    paths
}

/// List every `.json` file below `root`, descending into subdirectories
///
/// Unreadable subdirectories are skipped.
pub fn list_logs_recursive(root: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                if dir != root {
                    tracing::debug!("Skipping unreadable directory {}: {}", dir.display(), e);
                }
                continue;
            }
        };

        for entry in entries.filter_map(|entry| entry.ok()) {
            let path = entry.path();
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            if file_type.is_dir() {
                pending.push(path);
            } else if has_json_extension(&path) {
                paths.push(path);
            }
        }
    }

    paths.sort();
    paths
}

/// List project names under the global log root (one per top-level directory)
pub fn list_projects(global_root: &Path) -> Vec<String> {
    let entries = match fs::read_dir(global_root) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut projects: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect();
    projects.sort();
    projects
}

/// List all log files of a named project under the global root
pub fn project_logs(global_root: &Path, project: &str) -> Vec<PathBuf> {
    list_logs_recursive(&global_root.join(project))
}

/// Count non-blank lines in a log file
///
/// Returns 0 when the file cannot be opened; an unreadable file counts as empty.
pub fn count_entries(path: &Path) -> usize {
    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(_) => return 0,
    };

    BufReader::new(file)
        .lines()
        .map_while(Result::ok)
        .filter(|line| !line.trim().is_empty())
        .count()
}

/// Read the non-blank lines of a log file, trimmed
pub fn read_entries(path: &Path) -> io::Result<Vec<String>> {
    let file = fs::File::open(path)?;
    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok(lines)
}

/// Delete a log file
pub fn remove(path: &Path) -> io::Result<()> {
    fs::remove_file(path)?;
    tracing::info!("Deleted log file {}", path.display());
    Ok(())
}

/// Display name of a log file (its file name)
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        File::create(path)
            .unwrap()
            .write_all(content.as_bytes())
            .unwrap();
    }

    #[test]
    fn test_is_log_file_name() {
        assert!(is_log_file_name("logdog-2024-01-15.json"));
        assert!(!is_log_file_name("logdog-2024-01-15.log"));
        assert!(!is_log_file_name("other-2024-01-15.json"));
        assert!(!is_log_file_name("notes.txt"));
    }

    #[test]
    fn test_list_logs_missing_dir() {
        let path = Path::new("/nonexistent/path/for/testing");
        assert!(list_logs(path).is_empty());
    }

    #[test]
    fn test_list_logs_filters_and_sorts() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        write_file(&dir.join("logdog-2024-01-17.json"), "{}\n");
        write_file(&dir.join("logdog-2024-01-15.json"), "{}\n");
        write_file(&dir.join("other.json"), "{}\n");
        write_file(&dir.join("logdog-notes.txt"), "x\n");
        write_file(&dir.join("nested/logdog-2024-01-16.json"), "{}\n");

        let logs = list_logs(dir);
        assert_eq!(
            logs,
            vec![
                dir.join("logdog-2024-01-15.json"),
                dir.join("logdog-2024-01-17.json"),
            ]
        );
    }

    #[test]
    fn test_list_logs_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_file(&root.join("a.json"), "{}\n");
        write_file(&root.join("deep/er/b.json"), "{}\n");
        write_file(&root.join("deep/readme.md"), "x\n");

        let logs = list_logs_recursive(root);
        assert_eq!(logs, vec![root.join("a.json"), root.join("deep/er/b.json")]);
    }

    #[test]
    fn test_list_projects() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("zeta")).unwrap();
        fs::create_dir_all(root.join("alpha")).unwrap();
        write_file(&root.join("stray.json"), "{}\n");

        assert_eq!(list_projects(root), vec!["alpha", "zeta"]);
        assert!(list_projects(&root.join("missing")).is_empty());
    }

    #[test]
    fn test_project_logs() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_file(&root.join("api/logdog-2024-01-15.json"), "{}\n");
        write_file(&root.join("web/logdog-2024-01-15.json"), "{}\n");

        let logs = project_logs(root, "api");
        assert_eq!(logs, vec![root.join("api/logdog-2024-01-15.json")]);
    }

    #[test]
    fn test_count_entries_skips_blank_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logdog-2024-01-15.json");
        write_file(&path, "{\"a\":1}\n\n   \n{\"b\":2}\nnot json\n");
        assert_eq!(count_entries(&path), 3);
    }

    #[test]
    fn test_count_entries_missing_file_is_zero() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(count_entries(&temp_dir.path().join("gone.json")), 0);
    }

    #[test]
    fn test_read_entries_trims() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logdog-2024-01-15.json");
        write_file(&path, "  first  \n\nsecond\n");
        assert_eq!(read_entries(&path).unwrap(), vec!["first", "second"]);
        assert!(read_entries(&temp_dir.path().join("gone.json")).is_err());
    }

    #[test]
    fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logdog-2024-01-15.json");
        write_file(&path, "{}\n");

        remove(&path).unwrap();
        assert!(!path.exists());
        assert!(list_logs(temp_dir.path()).is_empty());

        let err = remove(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(
            display_name(Path::new("/a/b/logdog-2024-01-15.json")),
            "logdog-2024-01-15.json"
        );
    }
}
