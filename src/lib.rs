// MCCMNC Library
// MCC/MNC operator reference list, PLMN encoding and record filtering

pub mod config;
pub mod error;
pub mod plmn;
pub mod query;
pub mod reference;

pub use config::DataSource;
pub use error::{FilterError, MccMncError, PlmnError, Result};
pub use plmn::{decode_plmn, encode_mcc, encode_plmn};
pub use query::{FilterConfig, FilterValue};
pub use reference::dataset::Dataset;
pub use reference::records::{normalize_status, Record, RecordType};
pub use reference::regions::{get_region, Region};
pub use reference::{all, filter, filter_json, install, regions, status_codes};
