//! Tool and configuration path resolution
//!
//! The per-target tool binary lives at `<bin_dir>/mao-<target>` and plugin
//! libraries at `<bin_dir>/<name>-<target><lib_ext>`; both conventions are
//! fixed, only `bin_dir` moves.

use std::path::{Path, PathBuf};

use super::{Error, Result};

/// Name used for the config directory
const APP_NAME: &str = "mao-harness";

/// Path of the tool binary for a target
pub fn tool_binary(bin_dir: &Path, target: &str) -> PathBuf {
    bin_dir.join(format!("mao-{target}"))
}

/// Path of a plugin shared library for a target
pub fn plugin_library(bin_dir: &Path, name: &str, target: &str, lib_ext: &str) -> PathBuf {
    bin_dir.join(format!("{name}-{target}{lib_ext}"))
}

/// Resolve a relative `bin_dir` against the harness executable's directory
///
/// Absolute paths are returned unchanged. If the executable path cannot be
/// determined, the current directory is the base.
pub fn resolve_bin_dir(bin_dir: &Path) -> PathBuf {
    if bin_dir.is_absolute() {
        return bin_dir.to_path_buf();
    }
    let base = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join(bin_dir)
}

/// Resolve a helper program: explicit paths pass through, bare names are
/// looked up on PATH
pub fn find_program(program: &str) -> Result<PathBuf> {
    if program.contains(std::path::MAIN_SEPARATOR) {
        return Ok(PathBuf::from(program));
    }
    which::which(program).map_err(|e| Error::Config(format!("{program} not found on PATH: {e}")))
}

/// Verify that a path names an executable file
#[cfg(unix)]
pub fn ensure_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = std::fs::metadata(path).map_err(|_| Error::NotExecutable {
        path: path.display().to_string(),
    })?;
    if !metadata.is_file() || metadata.permissions().mode() & 0o111 == 0 {
        return Err(Error::NotExecutable {
            path: path.display().to_string(),
        });
    }
    Ok(())
}

#[cfg(not(unix))]
pub fn ensure_executable(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(Error::NotExecutable {
            path: path.display().to_string(),
        });
    }
    Ok(())
}

/// Get the configuration directory path
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
