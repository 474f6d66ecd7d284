//! Configuration loading and root folder resolution

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Environment variable naming the root folder.
pub const ROOT_FOLDER_ENV: &str = "SHOWBILL_ROOT";
/// Environment variable naming the listen port.
pub const PORT_ENV: &str = "SHOWBILL_PORT";
/// Environment variable naming the log file sink.
pub const LOG_FILE_ENV: &str = "SHOWBILL_LOG_FILE";

/// Default listen port when nothing else resolves.
pub const DEFAULT_PORT: u16 = 5740;

/// Database file name inside the root folder.
const DATABASE_FILE: &str = "showbill.db";

/// Resolved service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Folder holding the database and any log sink
    pub root_folder: PathBuf,
    /// HTTP listen port
    pub port: u16,
    /// Structured log sink; `None` logs to stdout
    pub log_file: Option<PathBuf>,
}

impl ServiceConfig {
    /// Resolve configuration following the priority order:
    /// 1. Command-line argument (highest priority)
    /// 2. Environment variable
    /// 3. TOML config file
    /// 4. Compiled default (fallback)
    pub fn resolve(
        cli_root: Option<&str>,
        cli_port: Option<u16>,
        cli_log_file: Option<&str>,
    ) -> Self {
        let file = load_config_file().ok();

        let root_folder = cli_root
            .map(PathBuf::from)
            .or_else(|| std::env::var(ROOT_FOLDER_ENV).ok().map(PathBuf::from))
            .or_else(|| {
                file.as_ref()
                    .and_then(|f| f.get("root_folder"))
                    .and_then(|v| v.as_str())
                    .map(PathBuf::from)
            })
            .unwrap_or_else(default_root_folder);

        let port = cli_port
            .or_else(|| {
                std::env::var(PORT_ENV)
                    .ok()
                    .and_then(|raw| raw.parse::<u16>().ok())
            })
            .or_else(|| {
                file.as_ref()
                    .and_then(|f| f.get("port"))
                    .and_then(|v| v.as_integer())
                    .and_then(|n| u16::try_from(n).ok())
            })
            .unwrap_or(DEFAULT_PORT);

        let log_file = cli_log_file
            .map(PathBuf::from)
            .or_else(|| std::env::var(LOG_FILE_ENV).ok().map(PathBuf::from))
            .or_else(|| {
                file.as_ref()
                    .and_then(|f| f.get("log_file"))
                    .and_then(|v| v.as_str())
                    .map(PathBuf::from)
            });

        Self {
            root_folder,
            port,
            log_file,
        }
    }

    /// Path of the SQLite database inside the root folder.
    pub fn database_path(&self) -> PathBuf {
        self.root_folder.join(DATABASE_FILE)
    }

    /// Create the root folder if it does not exist yet.
    pub fn ensure_root_folder(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root_folder)?;
        Ok(())
    }
}

/// Load the TOML config file if one exists for this platform.
fn load_config_file() -> Result<toml::Value> {
    let path = find_config_file()?;
    let content = std::fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Locate the config file: `~/.config/showbill/config.toml` first, then
/// `/etc/showbill/config.toml` on Linux.
fn find_config_file() -> Result<PathBuf> {
    if let Some(user_config) = dirs::config_dir().map(|d| d.join("showbill").join("config.toml")) {
        if user_config.exists() {
            return Ok(user_config);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/showbill/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
    }

    Err(Error::Config("No config file found".to_string()))
}

/// OS-dependent default root folder.
fn default_root_folder() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("showbill"))
        .unwrap_or_else(|| PathBuf::from("./showbill_data"))
}

/// Parse a TOML config file at an explicit path (used by tests and tooling).
pub fn parse_config_file(path: &Path) -> Result<toml::Value> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
}
