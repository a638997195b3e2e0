//! Where the viewer keeps its preference database and logs
//!
//! Platform directories come from `directories` (XDG on Linux). Setting
//! `BEANTABLE_VIEWER_HOME` puts everything under one directory instead.

use std::env;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use chrono::DateTime;
use chrono::Local;
use directories::ProjectDirs;

const HOME_VAR: &str = "BEANTABLE_VIEWER_HOME";
const LOG_STEM: &str = "viewer";

/// Archived logs kept by [`ViewerPaths::rotate_logs`].
const KEEP_LOGS: usize = 25;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerPaths {
    data: PathBuf,
    logs: PathBuf,
}

impl ViewerPaths {
    /// `$BEANTABLE_VIEWER_HOME` if set, otherwise the platform data and
    /// cache directories. `None` when neither can be determined.
    pub fn discover() -> Option<Self> {
        if let Some(home) = env::var_os(HOME_VAR) {
            return Some(Self::at(Path::new(&home)));
        }
        let dirs = ProjectDirs::from("dev", "beantable", "beantable-viewer")?;
        Some(Self {
            data: dirs.data_dir().to_path_buf(),
            logs: dirs.cache_dir().join("logs"),
        })
    }

    /// Everything under `root`.
    pub fn at(root: &Path) -> Self {
        Self {
            data: root.join("data"),
            logs: root.join("logs"),
        }
    }

    pub fn prefs_db(&self) -> PathBuf {
        self.data.join("table-prefs.db")
    }

    /// The log of the current run.
    pub fn log_file(&self) -> PathBuf {
        self.logs.join(format!("{LOG_STEM}.log"))
    }

    pub fn prepare(&self) -> io::Result<()> {
        fs::create_dir_all(&self.data)?;
        fs::create_dir_all(&self.logs)
    }

    /// Archives the previous run's log as `viewer-<timestamp>.log` and drops
    /// the oldest archives beyond the retention limit. Returns how many were
    /// dropped.
    pub fn rotate_logs(&self, now: DateTime<Local>) -> io::Result<usize> {
        let current = self.log_file();
        if current.exists() {
            let stamp = now.format("%Y%m%d-%H%M%S");
            fs::rename(&current, self.logs.join(format!("{LOG_STEM}-{stamp}.log")))?;
        }

        let mut archives: Vec<PathBuf> = fs::read_dir(&self.logs)?
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| is_archive(p))
            .collect();
        if archives.len() <= KEEP_LOGS {
            return Ok(0);
        }

        // Timestamps sort by name, oldest first.
        archives.sort();
        let dropped = archives.len() - KEEP_LOGS;
        for path in &archives[..dropped] {
            fs::remove_file(path)?;
        }
        Ok(dropped)
    }
}

fn is_archive(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_prefix(LOG_STEM))
        .and_then(|n| n.strip_prefix('-'))
        .is_some_and(|n| n.ends_with(".log"))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use tempfile::TempDir;

    use super::*;

    fn at(h: u32, m: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, 1, h, m, 0).unwrap()
    }

    #[test]
    fn test_layout_under_root() -> io::Result<()> {
        let root = TempDir::new()?;
        let paths = ViewerPaths::at(root.path());
        paths.prepare()?;

        assert!(root.path().join("data").is_dir());
        assert!(root.path().join("logs").is_dir());
        assert_eq!(paths.prefs_db(), root.path().join("data/table-prefs.db"));
        assert_eq!(paths.log_file(), root.path().join("logs/viewer.log"));
        Ok(())
    }

    #[test]
    fn test_rotate_archives_previous_log() -> io::Result<()> {
        let root = TempDir::new()?;
        let paths = ViewerPaths::at(root.path());
        paths.prepare()?;

        assert_eq!(paths.rotate_logs(at(9, 0))?, 0);
        fs::write(paths.log_file(), "first run")?;
        assert_eq!(paths.rotate_logs(at(9, 30))?, 0);

        assert!(!paths.log_file().exists());
        let archived = root.path().join("logs/viewer-20250601-093000.log");
        assert_eq!(fs::read_to_string(archived)?, "first run");
        Ok(())
    }

    #[test]
    fn test_rotate_keeps_newest_archives() -> io::Result<()> {
        let root = TempDir::new()?;
        let paths = ViewerPaths::at(root.path());
        paths.prepare()?;
        for minute in 0..KEEP_LOGS + 2 {
            let name = format!("viewer-20250101-00{minute:02}00.log");
            fs::write(root.path().join("logs").join(name), "")?;
        }
        fs::write(root.path().join("logs/notes.txt"), "")?;
        fs::write(paths.log_file(), "")?;

        assert_eq!(paths.rotate_logs(at(12, 0))?, 3);

        let logs = root.path().join("logs");
        assert!(!logs.join("viewer-20250101-000000.log").exists());
        assert!(!logs.join("viewer-20250101-000200.log").exists());
        assert!(logs.join("viewer-20250101-000300.log").exists());
        assert!(logs.join("viewer-20250601-120000.log").exists());
        assert!(logs.join("notes.txt").exists());
        Ok(())
    }
}
