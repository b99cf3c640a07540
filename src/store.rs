// src/store.rs
// The structured publications file. YAML, human-readable, key order is
// the Publication field order. Saving fully replaces the file; there is
// no merge with prior data.

use std::{fs, path::Path};

use log::debug;

use crate::error::{Error, Result};
use crate::model::Publication;

/// Serialize the ordered records to `path`, creating parent directories
/// as needed. Truncate-and-write, never append. Nothing touches the disk
/// until serialization has succeeded.
pub fn save(path: &Path, pubs: &[Publication]) -> Result<()> {
    let yaml = serde_yaml::to_string(pubs).map_err(|e| Error::Serialize {
        path: path.into(),
        reason: e.to_string(),
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::Serialize {
                path: path.into(),
                reason: e.to_string(),
            })?;
        }
    }

    fs::write(path, yaml).map_err(|e| Error::Serialize {
        path: path.into(),
        reason: e.to_string(),
    })?;
    debug!("wrote {} records to {}", pubs.len(), path.display());
    Ok(())
}

/// Load the ordered records back. Missing or malformed file is a Parse
/// error; the loaded order is preserved exactly, never re-sorted.
pub fn load(path: &Path) -> Result<Vec<Publication>> {
    let text = fs::read_to_string(path).map_err(|e| Error::Parse {
        path: path.into(),
        reason: e.to_string(),
    })?;
    serde_yaml::from_str(&text).map_err(|e| Error::Parse {
        path: path.into(),
        reason: e.to_string(),
    })
}
