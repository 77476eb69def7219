//! Atomic file write helpers.
//!
//! Uses a temp file + rename pattern. On Windows, rename-over-existing fails, so we
//! use a backup-and-restore fallback to avoid data loss when overwriting.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileSyncPolicy {
    #[default]
    SyncAll,
    SkipSync,
}

/// Recover from an interrupted write by restoring `path.bak`.
///
/// If `path` does not exist but `path.bak` does, a crash happened inside the
/// backup-rename window of [`atomic_write`]. Rename the backup back so the
/// caller can proceed.
pub fn recover_bak_file(path: &Path) {
    let backup = path.with_extension("bak");
    if !path.exists() && backup.exists() {
        match fs::rename(&backup, path) {
            Ok(()) => {
                tracing::warn!(
                    path = %path.display(),
                    "Recovered .bak file from interrupted atomic write"
                );
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    "Failed to recover .bak file: {e}"
                );
            }
        }
    }
}

/// Replace the contents of `path` with `bytes` without ever exposing a partial file.
pub fn atomic_write(path: impl AsRef<Path>, bytes: &[u8], sync: FileSyncPolicy) -> io::Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    if sync == FileSyncPolicy::SyncAll {
        tmp.as_file().sync_all()?;
    }

    if let Err(err) = tmp.persist(path) {
        if !path.exists() {
            return Err(err.error);
        }
        // Windows fallback: move the old file aside, persist, then drop the backup.
        let backup_path = path.with_extension("bak");
        let _ = fs::remove_file(&backup_path);
        fs::rename(path, &backup_path)?;

        if let Err(rename_err) = err.file.persist(path) {
            let _ = fs::rename(&backup_path, path);
            return Err(rename_err.error);
        }
        if let Err(e) = fs::remove_file(&backup_path) {
            tracing::warn!(
                path = %backup_path.display(),
                "Failed to remove .bak after atomic write: {e}"
            );
        }
    }

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Atomic write complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{FileSyncPolicy, atomic_write, recover_bak_file};

    #[test]
    fn overwrites_existing_and_leaves_no_backup() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");

        atomic_write(&path, b"one", FileSyncPolicy::SkipSync).expect("write one");
        atomic_write(&path, b"two", FileSyncPolicy::SyncAll).expect("write two");

        assert_eq!(fs::read_to_string(&path).expect("read"), "two");
        assert!(!path.with_extension("bak").exists());
    }

    #[test]
    fn fails_when_parent_directory_is_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("config.json");
        assert!(atomic_write(&path, b"{}", FileSyncPolicy::SkipSync).is_err());
    }

    #[test]
    fn recovers_orphaned_backup() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(path.with_extension("bak"), b"saved").expect("write bak");

        recover_bak_file(&path);

        assert_eq!(fs::read_to_string(&path).expect("read"), "saved");
        assert!(!path.with_extension("bak").exists());
    }

    #[test]
    fn recovery_leaves_existing_file_alone() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(&path, b"current").expect("write");
        fs::write(path.with_extension("bak"), b"stale").expect("write bak");

        recover_bak_file(&path);

        assert_eq!(fs::read_to_string(&path).expect("read"), "current");
    }
}
