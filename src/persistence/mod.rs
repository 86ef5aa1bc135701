//! Best-score file
//!
//! The file holds a single decimal integer as plain text. Saves replace the
//! file wholesale through a temporary sibling and a rename.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::highscores::ScoreStorage;

/// Default file name, placed beside the executable
pub const DEFAULT_FILE_NAME: &str = "BEST";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Path to `name` in the executable's directory.
///
/// Falls back to the bare name (working directory) when the executable path
/// cannot be resolved.
pub fn beside_executable(name: &str) -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => match exe.parent() {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        },
        Err(error) => {
            log::warn!("Could not resolve executable path: {}", error);
            PathBuf::from(name)
        }
    }
}

/// Score storage backed by a plain-text file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStorage for FileStore {
    /// Missing or unparsable files read as 0
    fn load(&self) -> u32 {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                log::info!("No best score at {}, starting fresh", self.path.display());
                return 0;
            }
            Err(error) => {
                log::warn!("Could not read {}: {}", self.path.display(), error);
                return 0;
            }
        };

        match text.trim().parse::<u32>() {
            Ok(score) => {
                log::info!("Loaded best score {}", score);
                score
            }
            Err(error) => {
                log::warn!(
                    "Ignoring malformed best score in {}: {}",
                    self.path.display(),
                    error
                );
                0
            }
        }
    }

    fn save(&mut self, score: u32) -> Result<(), PersistError> {
        write_text_atomic(&self.path, &score.to_string()).map_err(|source| PersistError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

fn write_text_atomic(path: &Path, text: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = temp_path_for(path);
    fs::write(&tmp_path, text)?;
    if let Err(error) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(error);
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(DEFAULT_FILE_NAME);
    path.with_file_name(format!("{file_name}.tmp"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("BEST"));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("BEST"));
        store.save(17).unwrap();
        assert_eq!(store.load(), 17);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "17");
        store.save(23).unwrap();
        assert_eq!(store.load(), 23);
        assert!(!dir.path().join("BEST.tmp").exists());
    }

    #[test]
    fn test_malformed_file_loads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("BEST");
        fs::write(&path, "not a number").unwrap();
        assert_eq!(FileStore::new(&path).load(), 0);
        fs::write(&path, "-5").unwrap();
        assert_eq!(FileStore::new(&path).load(), 0);
    }

    #[test]
    fn test_trailing_newline_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("BEST");
        fs::write(&path, "42\n").unwrap();
        assert_eq!(FileStore::new(&path).load(), 42);
    }

    #[test]
    fn test_default_path_sits_next_to_executable() {
        let exe = std::env::current_exe().unwrap();
        let path = beside_executable(DEFAULT_FILE_NAME);
        assert_eq!(path.parent(), exe.parent());
        assert_eq!(path.file_name().unwrap(), DEFAULT_FILE_NAME);
        assert!(path.is_absolute());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("BEST"));
        store.save(3).unwrap();
        assert_eq!(store.load(), 3);
    }
}
