//! File-system backend
//!
//! One text file per collection. Saves go to a temporary file in the same
//! directory which is then renamed over the target, so a crash mid-save
//! leaves either the old file or the new one.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::config::Config;
use crate::error::{CafeError, Result};
use crate::model::{Customer, MenuItem};

use super::backend::StorageBackend;
use super::codec::{self, Record};

/// Stores the menu and the roster as two flat files
#[derive(Debug, Clone)]
pub struct FsBackend {
    menu_path: PathBuf,
    customer_path: PathBuf,
}

impl FsBackend {
    pub fn new(menu_path: impl Into<PathBuf>, customer_path: impl Into<PathBuf>) -> Self {
        Self {
            menu_path: menu_path.into(),
            customer_path: customer_path.into(),
        }
    }

    /// Backend for the files named by `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.menu_path(), config.customer_path())
    }

    pub fn menu_path(&self) -> &Path {
        &self.menu_path
    }

    pub fn customer_path(&self) -> &Path {
        &self.customer_path
    }

    fn load<T: Record>(path: &Path) -> Result<Option<Vec<T>>> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CafeError::Io(e)),
        };
        let records = codec::read_records(path, BufReader::new(file))?;
        Ok(Some(records))
    }

    fn save<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
        let dir = parent_dir(path);
        fs::create_dir_all(dir)?;

        let tmp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            codec::write_records(&mut writer, records)?;
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| CafeError::Io(e.error))?;
        Ok(())
    }
}

/// Directory a file lives in; bare file names resolve to the working dir
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

impl StorageBackend for FsBackend {
    fn load_menu(&self) -> Result<Option<Vec<MenuItem>>> {
        Self::load(&self.menu_path)
    }

    fn save_menu(&self, items: &[MenuItem]) -> Result<()> {
        Self::save(&self.menu_path, items)
    }

    fn load_customers(&self) -> Result<Option<Vec<Customer>>> {
        Self::load(&self.customer_path)
    }

    fn save_customers(&self, customers: &[Customer]) -> Result<()> {
        Self::save(&self.customer_path, customers)
    }

    fn describe(&self) -> String {
        format!(
            "files {} and {}",
            self.menu_path.display(),
            self.customer_path.display()
        )
    }
}
