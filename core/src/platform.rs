//! Boundary: platform-specific system facts and actions.
//!
//! Privilege checks, the per-user data directory, and elevated command
//! execution. Path layout is split from IO so it can be tested on any host.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use tjd_types::Platform;

use crate::errors::{Result, ToolkitError};

const APP_DIR_NAME: &str = "TJD-Toolkit";
const APP_DIR_NAME_UNIX: &str = "tjd-toolkit";

/// Data directory layout for `platform` under `home`.
///
/// - Windows: `~/AppData/Local/TJD-Toolkit`
/// - macOS: `~/Library/Application Support/TJD-Toolkit`
/// - Linux: `~/.config/tjd-toolkit`
#[must_use]
pub fn app_data_dir_for(platform: Platform, home: &Path) -> PathBuf {
    match platform {
        Platform::Windows => home.join("AppData").join("Local").join(APP_DIR_NAME),
        Platform::MacOs => home
            .join("Library")
            .join("Application Support")
            .join(APP_DIR_NAME),
        Platform::Linux => home.join(".config").join(APP_DIR_NAME_UNIX),
    }
}

/// Resolve and create the application data directory for the current user.
pub fn app_data_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| {
        ToolkitError::platform(
            "Failed to resolve or create app data directory: home directory not found",
            "access_app_data",
            None,
        )
    })?;
    let path = app_data_dir_for(Platform::current(), &home);
    ensure_dir(&path)?;
    Ok(path)
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| {
        let message = if e.kind() == io::ErrorKind::PermissionDenied {
            format!("Permission denied accessing app data directory: {e}")
        } else {
            format!("Failed to resolve or create app data directory: {e}")
        };
        tracing::error!(path = %path.display(), "{message}");
        ToolkitError::platform(message, "access_app_data", Some(e))
    })
}

/// Whether the current process runs with administrative rights.
///
/// Unix: effective uid 0. Windows: UAC elevation via `IsUserAnAdmin`.
#[must_use]
pub fn is_admin() -> bool {
    is_admin_impl()
}

#[cfg(unix)]
fn is_admin_impl() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

#[cfg(windows)]
fn is_admin_impl() -> bool {
    // SAFETY: IsUserAnAdmin takes no arguments and only reads the process token.
    unsafe { windows_sys::Win32::UI::Shell::IsUserAnAdmin() != 0 }
}

#[cfg(not(any(unix, windows)))]
fn is_admin_impl() -> bool {
    false
}

/// Program and leading arguments that elevate a command on `platform`.
#[must_use]
pub fn elevation_prefix(platform: Platform) -> (&'static str, &'static [&'static str]) {
    match platform {
        Platform::Windows => ("runas", &["/user:Administrator"]),
        Platform::MacOs | Platform::Linux => ("sudo", &[]),
    }
}

/// Run `command` (program followed by its arguments) with elevated privileges.
///
/// Output is captured, not forwarded to the terminal.
pub fn run_as_admin<S: AsRef<str>>(command: &[S]) -> Result<()> {
    if command.is_empty() {
        return Err(ToolkitError::validation(
            "Command to elevate must not be empty",
            "command",
            "<empty>",
        ));
    }

    let (program, prefix_args) = elevation_prefix(Platform::current());

    let output = Command::new(program)
        .args(prefix_args)
        .args(command.iter().map(AsRef::as_ref))
        .output()
        .map_err(|e| {
            let message = if e.kind() == io::ErrorKind::NotFound {
                format!("Required elevation tool not found: {e}")
            } else {
                format!("Failed to run command as admin: {e}")
            };
            tracing::error!("{message}");
            ToolkitError::platform(message, "privilege_elevation", Some(e))
        })?;

    if output.status.success() {
        tracing::info!(program = command[0].as_ref(), "Elevated command succeeded");
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let message = format!(
        "Failed to run command as admin: {} ({})",
        output.status,
        stderr.trim()
    );
    tracing::error!("{message}");
    Err(ToolkitError::platform(message, "privilege_elevation", None))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use tjd_types::Platform;

    use super::{app_data_dir_for, elevation_prefix, ensure_dir, run_as_admin};

    #[test]
    fn data_dir_layout_per_platform() {
        let home = Path::new("/home/tester");
        assert_eq!(
            app_data_dir_for(Platform::Linux, home),
            Path::new("/home/tester/.config/tjd-toolkit")
        );
        assert_eq!(
            app_data_dir_for(Platform::MacOs, home),
            Path::new("/home/tester/Library/Application Support/TJD-Toolkit")
        );
        assert_eq!(
            app_data_dir_for(Platform::Windows, home),
            Path::new("/home/tester/AppData/Local/TJD-Toolkit")
        );
    }

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("a").join("b");
        ensure_dir(&nested).expect("create");
        assert!(nested.is_dir());
        ensure_dir(&nested).expect("idempotent");
    }

    #[test]
    fn ensure_dir_fails_when_a_file_is_in_the_way() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("occupied");
        std::fs::write(&file, b"x").expect("write");
        let err = ensure_dir(&file.join("child")).unwrap_err();
        assert_eq!(err.operation(), Some("access_app_data"));
    }

    #[test]
    fn elevation_uses_sudo_or_runas() {
        assert_eq!(elevation_prefix(Platform::Linux).0, "sudo");
        assert!(elevation_prefix(Platform::MacOs).1.is_empty());
        let (program, args) = elevation_prefix(Platform::Windows);
        assert_eq!(program, "runas");
        assert_eq!(args, ["/user:Administrator"]);
    }

    #[test]
    fn empty_command_is_rejected() {
        let err = run_as_admin::<&str>(&[]).unwrap_err();
        assert!(err.is_validation());
    }
}
