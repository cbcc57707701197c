use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::features::locations::models::{District, Geography, Province, SubDistrict};
use crate::shared::constants::{
    DISTRICTS_FILE, GEOGRAPHIES_FILE, PROVINCES_FILE, SUB_DISTRICTS_FILE,
};

/// Failure while reading the static dataset. Always fatal at startup.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("Data directory does not exist: {}", path.display())]
    MissingDirectory { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The four collections exactly as they appear in the source files
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub geographies: Vec<Geography>,
    pub provinces: Vec<Province>,
    pub districts: Vec<District>,
    pub sub_districts: Vec<SubDistrict>,
}

/// Load every data file under `dir`.
///
/// All-or-nothing: the first missing or malformed file aborts the load.
pub fn load_dataset(dir: &Path) -> Result<Dataset, DataLoadError> {
    if !dir.is_dir() {
        return Err(DataLoadError::MissingDirectory {
            path: dir.to_path_buf(),
        });
    }

    let dataset = Dataset {
        geographies: load_file(&dir.join(GEOGRAPHIES_FILE))?,
        provinces: load_file(&dir.join(PROVINCES_FILE))?,
        districts: load_file(&dir.join(DISTRICTS_FILE))?,
        sub_districts: load_file(&dir.join(SUB_DISTRICTS_FILE))?,
    };

    tracing::info!(
        "Loaded dataset from {}: geographies={}, provinces={}, districts={}, sub_districts={}",
        dir.display(),
        dataset.geographies.len(),
        dataset.provinces.len(),
        dataset.districts.len(),
        dataset.sub_districts.len()
    );

    Ok(dataset)
}

fn load_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DataLoadError> {
    let bytes = fs::read(path).map_err(|source| DataLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| DataLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
