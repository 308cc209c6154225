//! Configuration for CampusBites
//!
//! Centralized configuration with defaults that reproduce the classic
//! layout: `menu.txt` and `customers.txt` in the working directory.

use std::path::PathBuf;

use crate::error::{CafeError, Result};

/// Main configuration for a CampusBites instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Directory holding the record files
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── menu.txt         (menu records)
    ///     └── customers.txt    (customer records)
    pub data_dir: PathBuf,

    /// File name of the menu records, relative to `data_dir`
    pub menu_file: String,

    /// File name of the customer records, relative to `data_dir`
    pub customer_file: String,

    // -------------------------------------------------------------------------
    // Bootstrap Configuration
    // -------------------------------------------------------------------------
    /// Seed the sample menu when no menu file exists yet
    pub seed_sample_menu: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            menu_file: "menu.txt".to_string(),
            customer_file: "customers.txt".to_string(),
            seed_sample_menu: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Full path of the menu file
    pub fn menu_path(&self) -> PathBuf {
        self.data_dir.join(&self.menu_file)
    }

    /// Full path of the customer file
    pub fn customer_path(&self) -> PathBuf {
        self.data_dir.join(&self.customer_file)
    }

    /// Reject empty file names and configurations that would point both
    /// collections at one file
    pub fn validate(&self) -> Result<()> {
        if self.menu_file.trim().is_empty() || self.customer_file.trim().is_empty() {
            return Err(CafeError::Config("file names must not be empty".to_string()));
        }
        if self.menu_path() == self.customer_path() {
            return Err(CafeError::Config(format!(
                "menu and customer records cannot share the file {}",
                self.menu_file
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the menu file name
    pub fn menu_file(mut self, name: impl Into<String>) -> Self {
        self.config.menu_file = name.into();
        self
    }

    /// Set the customer file name
    pub fn customer_file(mut self, name: impl Into<String>) -> Self {
        self.config.customer_file = name.into();
        self
    }

    /// Enable or disable sample menu seeding on first run
    pub fn seed_sample_menu(mut self, seed: bool) -> Self {
        self.config.seed_sample_menu = seed;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
