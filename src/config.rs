use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub upload: UploadConfig,
    pub generation: GenerationConfig,
    pub export: ExportConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
    /// Enable mouse support in the terminal.
    pub mouse_enabled: bool,
    /// Ticks a notification stays on screen.
    pub notification_ttl_ticks: u32,
}

/// Upload validation limits and simulated progress pacing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub max_file_size_bytes: u64,
    /// Lower-case extensions without the leading dot.
    pub accepted_extensions: Vec<String>,
    pub tick_interval_ms: u64,
    /// Percentage points added per tick while uploading.
    pub progress_step: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub delay_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            mouse_enabled: false,
            notification_ttl_ticks: 100,
        }
    }
}

impl TuiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: 10 * 1024 * 1024,
            accepted_extensions: ["pdf", "docx", "txt", "csv", "xlsx"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            tick_interval_ms: 200,
            progress_step: 10,
        }
    }
}

impl UploadConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    /// Case-insensitive membership test; `ext` is given without the dot.
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.accepted_extensions
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(ext))
    }

    /// "PDF, DOCX, TXT, CSV, XLSX"
    pub fn extensions_hint(&self) -> String {
        self.accepted_extensions
            .iter()
            .map(|e| e.to_uppercase())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// User-facing limit: "10MB", "2.5MB", "512KB", or bytes below 1KB.
    pub fn max_size_label(&self) -> String {
        const KIB: u64 = 1024;
        const MIB: u64 = 1024 * 1024;
        let bytes = self.max_file_size_bytes;
        if bytes >= MIB {
            if bytes % MIB == 0 {
                format!("{}MB", bytes / MIB)
            } else {
                format!("{:.1}MB", bytes as f64 / MIB as f64)
            }
        } else if bytes >= KIB {
            if bytes % KIB == 0 {
                format!("{}KB", bytes / KIB)
            } else {
                format!("{:.1}KB", bytes as f64 / KIB as f64)
            }
        } else {
            format!("{bytes}B")
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { delay_ms: 3000 }
    }
}

impl GenerationConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { delay_ms: 2000 }
    }
}

impl ExportConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/discovery-wizard/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Self {
        match Self::try_load_from(config_path) {
            Ok(config) => {
                log::info!("Loaded config from {}", config_path.display());
                config
            }
            Err(ConfigError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                log::debug!(
                    "No config file at {}; using defaults",
                    config_path.display()
                );
                Self::default()
            }
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    pub fn try_load_from(config_path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
                path: config_path.to_path_buf(),
                source,
            })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })
    }

    /// Directory for rolling log files.
    pub fn log_dir() -> PathBuf {
        dirs::data_dir()
            .map(|d| d.join("discovery-wizard").join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs"))
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("discovery-wizard").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
