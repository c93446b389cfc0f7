// Dataset source configuration
//
// The record list ships inside the binary. MCCMNC_DATA_DIR (or --data-dir)
// points at a directory holding a newer export of the same two files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::reference::dataset::Dataset;

pub const DATA_DIR_ENV: &str = "MCCMNC_DATA_DIR";
pub const RECORDS_FILE: &str = "mcc-mnc-list.json";
pub const STATUS_CODES_FILE: &str = "status-codes.json";

const EMBEDDED_RECORDS: &str = include_str!("../data/mcc-mnc-list.json");
const EMBEDDED_STATUS_CODES: &str = include_str!("../data/status-codes.json");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DataSource {
    /// The list compiled into the crate
    #[default]
    Embedded,
    /// A directory containing `mcc-mnc-list.json` and, optionally, `status-codes.json`
    Directory(PathBuf),
}

impl DataSource {
    /// `Directory` when MCCMNC_DATA_DIR is set and non-empty, `Embedded` otherwise
    pub fn from_env() -> Self {
        match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => DataSource::Directory(PathBuf::from(dir)),
            _ => DataSource::Embedded,
        }
    }

    pub fn load(&self) -> Result<Dataset> {
        match self {
            DataSource::Embedded => {
                log::debug!("Loading embedded MCC/MNC list");
                Dataset::from_json(EMBEDDED_RECORDS, Some(EMBEDDED_STATUS_CODES))
            }
            DataSource::Directory(dir) => load_dir(dir),
        }
    }
}

fn load_dir(dir: &Path) -> Result<Dataset> {
    let records_path = dir.join(RECORDS_FILE);
    log::info!("Loading MCC/MNC list from {:?}", records_path);
    let records = fs::read_to_string(&records_path)?;

    let status_path = dir.join(STATUS_CODES_FILE);
    let status_codes = if status_path.exists() {
        Some(fs::read_to_string(&status_path)?)
    } else {
        log::warn!("{:?} not found, deriving status codes from records", status_path);
        None
    };

    Dataset::from_json(&records, status_codes.as_deref())
}
