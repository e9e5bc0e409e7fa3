//! Configuration file handling
//!
//! Locations of the external tools and default target conventions. All
//! fields have working defaults so the harness runs without any file.

use serde::Deserialize;
use std::path::PathBuf;

use super::paths::config_path;
use super::Result;

/// Environment variable naming an explicit config file, checked before
/// the platform config directory. The integration tests rely on it.
pub const CONFIG_ENV: &str = "MAO_HARNESS_CONFIG";

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// External tool locations
    #[serde(default)]
    pub tools: Tools,

    /// Default target conventions
    #[serde(default)]
    pub defaults: Defaults,
}

/// Locations of the external executables the harness drives
#[derive(Debug, Deserialize)]
pub struct Tools {
    /// Directory holding the per-target tool binaries (`mao-<target>`)
    /// and plugin libraries. Relative paths resolve against the harness
    /// executable's directory.
    #[serde(default = "default_bin_dir")]
    pub bin_dir: PathBuf,

    /// Reference assembler producing ground-truth object files
    #[serde(default = "default_assembler")]
    pub assembler: String,

    /// Symbol-table dumper used by the function-size comparator
    #[serde(default = "default_symbol_dumper")]
    pub symbol_dumper: String,

    /// Binary diff utility used by the object-diff comparator
    #[serde(default = "default_diff")]
    pub diff: String,

    /// Verification script invoked per suite entry as `<script> TARGET FILE`
    #[serde(default = "default_verify_script")]
    pub verify_script: String,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            bin_dir: default_bin_dir(),
            assembler: default_assembler(),
            symbol_dumper: default_symbol_dumper(),
            diff: default_diff(),
            verify_script: default_verify_script(),
        }
    }
}

fn default_bin_dir() -> PathBuf {
    PathBuf::from("../bin")
}
fn default_assembler() -> String {
    "as-orig".to_string()
}
fn default_symbol_dumper() -> String {
    "readelf".to_string()
}
fn default_diff() -> String {
    "diff".to_string()
}
fn default_verify_script() -> String {
    "./mao_verify.sh".to_string()
}

/// Default target conventions
#[derive(Debug, Deserialize)]
pub struct Defaults {
    /// ISA/ABI identifier selecting the tool build
    #[serde(default = "default_target")]
    pub target: String,

    /// Shared-library suffix for plugin artifacts
    #[serde(default = "default_lib_ext")]
    pub lib_ext: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            target: default_target(),
            lib_ext: default_lib_ext(),
        }
    }
}

fn default_target() -> String {
    "x86_64-linux".to_string()
}
fn default_lib_ext() -> String {
    ".so".to_string()
}

impl Config {
    /// Load configuration from `$MAO_HARNESS_CONFIG` or the default
    /// config file
    ///
    /// Returns default configuration if no file exists.
    pub fn load() -> Result<Self> {
        let path = match std::env::var_os(CONFIG_ENV) {
            Some(explicit) => Some(PathBuf::from(explicit)),
            None => config_path(),
        };

        if let Some(path) = path {
            if path.exists() {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| super::Error::file_read(&path, e))?;
                return toml::from_str(&content)
                    .map_err(|e| super::Error::ConfigParse(e.to_string()));
            }
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tool_conventions() {
        let config = Config::default();
        assert_eq!(config.defaults.target, "x86_64-linux");
        assert_eq!(config.defaults.lib_ext, ".so");
        assert_eq!(config.tools.assembler, "as-orig");
        assert_eq!(config.tools.bin_dir, PathBuf::from("../bin"));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [defaults]
            target = "x86_64-darwin"
            "#,
        )
        .unwrap();
        assert_eq!(config.defaults.target, "x86_64-darwin");
        assert_eq!(config.defaults.lib_ext, ".so");
        assert_eq!(config.tools.symbol_dumper, "readelf");
    }
}
