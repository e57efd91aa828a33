// src/config/settings.rs
use std::{env, fs, io, path::{Path, PathBuf}};

use super::consts::*;

/// Filesystem layout for one run. Construct once, pass by reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub project_root: PathBuf,
    pub downloads_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl Settings {
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            downloads_dir: root.join(DOWNLOADS_DIR),
            logs_dir: root.join(LOGS_DIR),
            project_root: root,
        }
    }

    /// `$SSA_DASHBOARD_ROOT`, else the current directory.
    pub fn from_env() -> Self {
        let root = env::var_os(ROOT_ENV)
            .map(PathBuf::from)
            .or_else(|| env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        Self::from_root(root)
    }

    /// Create downloads/ and logs/ if missing. Not done at construction.
    pub fn ensure_dirs(&self) -> io::Result<()> {
        for dir in [&self.downloads_dir, &self.logs_dir] {
            if dir.exists() && !dir.is_dir() {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("Path exists but is not a directory: {}", dir.display()),
                ));
            }
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    /// `Report.xlsx`, unless only `Report.csv` exists.
    pub fn default_input(&self) -> PathBuf {
        let workbook = self.downloads_dir.join(DEFAULT_REPORT_FILE);
        let text = self.downloads_dir.join(FALLBACK_REPORT_FILE);
        if !workbook.exists() && text.exists() { text } else { workbook }
    }

    pub fn log_file(&self) -> PathBuf {
        self.logs_dir.join(LOG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_hang_off_the_root() {
        let s = Settings::from_root("/tmp/ssa");
        assert_eq!(s.downloads_dir, PathBuf::from("/tmp/ssa/downloads"));
        assert_eq!(s.default_input(), PathBuf::from("/tmp/ssa/downloads/Report.xlsx"));
        assert_eq!(s.log_file(), PathBuf::from("/tmp/ssa/logs/dashboard.log"));
    }

    #[test]
    fn construction_touches_nothing() {
        let root = env::temp_dir().join("ssa_settings_untouched");
        let _ = fs::remove_dir_all(&root);
        let s = Settings::from_root(&root);
        assert!(!s.logs_dir.exists());
        s.ensure_dirs().unwrap();
        assert!(s.logs_dir.is_dir() && s.downloads_dir.is_dir());
    }

    #[test]
    fn default_input_falls_back_to_csv() {
        let root = env::temp_dir().join("ssa_settings_fallback");
        let _ = fs::remove_dir_all(&root);
        let s = Settings::from_root(&root);
        s.ensure_dirs().unwrap();
        assert!(s.default_input().ends_with("Report.xlsx"));

        fs::write(s.downloads_dir.join("Report.csv"), "a\n").unwrap();
        assert!(s.default_input().ends_with("Report.csv"));

        fs::write(s.downloads_dir.join("Report.xlsx"), "").unwrap();
        assert!(s.default_input().ends_with("Report.xlsx"));
    }
}
