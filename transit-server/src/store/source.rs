//! Record sources.
//!
//! The store is decoupled from any particular storage medium through the
//! narrow [`RecordSource`] capability. The production implementation reads
//! the two JSON data files the service is pointed at.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::records::{NetworkRecords, RouteRecord, StationRecord};

/// Errors raised while loading records.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading a data file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A data file is not valid JSON of the expected shape.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Capability to load the current route and station records.
pub trait RecordSource: Send + Sync {
    /// Load a fresh copy of the full dataset.
    fn load(&self) -> Result<NetworkRecords, StoreError>;
}

/// Top-level shape of the routes data file.
#[derive(Debug, Deserialize)]
struct RoutesFile {
    #[serde(default)]
    routes: Vec<RouteRecord>,
}

/// Top-level shape of the stations data file.
#[derive(Debug, Deserialize)]
struct StationsFile {
    #[serde(default)]
    stations: Vec<StationRecord>,
}

/// Record source backed by two JSON files on disk.
#[derive(Debug, Clone)]
pub struct JsonDataSource {
    routes_path: PathBuf,
    stations_path: PathBuf,
}

impl JsonDataSource {
    /// Create a source reading the given routes and stations files.
    pub fn new(routes_path: impl Into<PathBuf>, stations_path: impl Into<PathBuf>) -> Self {
        Self {
            routes_path: routes_path.into(),
            stations_path: stations_path.into(),
        }
    }

    fn read<T>(path: &Path) -> Result<T, StoreError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

impl RecordSource for JsonDataSource {
    fn load(&self) -> Result<NetworkRecords, StoreError> {
        let RoutesFile { routes } = Self::read(&self.routes_path)?;
        let StationsFile { stations } = Self::read(&self.stations_path)?;
        Ok(NetworkRecords { routes, stations })
    }
}
