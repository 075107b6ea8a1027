//! Path management for Kasa
//!
//! ## Path Resolution Order
//!
//! 1. `KASA_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/kasa` or `~/.config/kasa`
//! 3. Windows: `%APPDATA%\kasa`

use std::path::PathBuf;

use crate::error::KasaError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "KASA_DATA_DIR";

/// Manages all paths used by Kasa
#[derive(Debug, Clone)]
pub struct KasaPaths {
    base_dir: PathBuf,
}

impl KasaPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or application data directory can be determined.
    pub fn new() -> Result<Self, KasaError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create KasaPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/kasa/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/kasa/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    pub fn invoices_file(&self) -> PathBuf {
        self.data_dir().join("invoices.json")
    }

    pub fn checks_file(&self) -> PathBuf {
        self.data_dir().join("checks.json")
    }

    pub fn cash_accounts_file(&self) -> PathBuf {
        self.data_dir().join("cash_accounts.json")
    }

    pub fn cash_transactions_file(&self) -> PathBuf {
        self.data_dir().join("cash_transactions.json")
    }

    pub fn projects_file(&self) -> PathBuf {
        self.data_dir().join("projects.json")
    }

    pub fn contracts_file(&self) -> PathBuf {
        self.data_dir().join("contracts.json")
    }

    pub fn installments_file(&self) -> PathBuf {
        self.data_dir().join("installments.json")
    }

    pub fn payroll_file(&self) -> PathBuf {
        self.data_dir().join("payroll.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), KasaError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| KasaError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| KasaError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Kasa has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, KasaError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| KasaError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("kasa"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, KasaError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| KasaError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("kasa"))
}
