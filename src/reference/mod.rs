// Reference data module - MCC/MNC operator list and MCC regions
//
// The dataset is installed once per process (explicitly with `install`, or
// lazily on first use) and is read-only afterwards.

pub mod dataset;
pub mod records;
pub mod regions;

use std::sync::OnceLock;

use crate::config::DataSource;
use crate::error::Result;
use crate::query::{self, FilterConfig};
use dataset::Dataset;
use records::Record;
use regions::Region;

static DATASET: OnceLock<Dataset> = OnceLock::new();

/// Install the process-wide dataset
///
/// Returns the dataset already installed if this is not the first call;
/// `dataset` is then dropped.
pub fn install(dataset: Dataset) -> &'static Dataset {
    if DATASET.get().is_some() {
        log::warn!("Dataset already installed, keeping the existing one");
    }
    DATASET.get_or_init(|| dataset)
}

/// The process-wide dataset
///
/// If nothing was installed, loads from MCCMNC_DATA_DIR when set and from the
/// embedded list otherwise.
pub fn dataset() -> Result<&'static Dataset> {
    if let Some(dataset) = DATASET.get() {
        return Ok(dataset);
    }
    let dataset = DataSource::from_env().load()?;
    Ok(DATASET.get_or_init(|| dataset))
}

/// Every record
pub fn all() -> Result<&'static [Record]> {
    Ok(dataset()?.all())
}

/// Sorted status-code vocabulary
pub fn status_codes() -> Result<&'static [String]> {
    Ok(dataset()?.status_codes())
}

pub fn regions() -> &'static [Region] {
    regions::all_regions()
}

/// Filter the process-wide dataset; `None` returns every record
pub fn filter(config: Option<&FilterConfig>) -> Result<Vec<&'static Record>> {
    Ok(query::filter(dataset()?, config)?)
}

pub fn filter_json(config: &serde_json::Value) -> Result<Vec<&'static Record>> {
    Ok(query::filter_json(dataset()?, config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FilterError, MccMncError};
    use serde_json::json;

    #[test]
    fn test_filter_none_is_all() {
        let everything = all().unwrap();
        assert_eq!(filter(None).unwrap().len(), everything.len());
        assert_eq!(filter_json(&json!(null)).unwrap().len(), everything.len());
    }

    #[test]
    fn test_status_codes_sorted_unique() {
        let codes = status_codes().unwrap();
        assert!(codes.windows(2).all(|w| w[0] < w[1]));
        assert!(!codes.iter().any(|c| c == "Not Operational" || c == "operational"));
    }

    #[test]
    fn test_not_operational_is_canonical() {
        let config = FilterConfig::new().status_code("Not operational");
        let result = filter(Some(&config)).unwrap();
        assert!(!result.is_empty());
        assert!(all().unwrap().iter().all(|r| r.status.as_deref() != Some("Not Operational")));

        let config = FilterConfig::new().status_code("Not Operational");
        assert!(matches!(
            filter(Some(&config)),
            Err(MccMncError::Filter(FilterError::UnknownStatusCode(_)))
        ));
    }

    #[test]
    fn test_region_filter() {
        let result = filter_json(&json!({ "region": "Europe" })).unwrap();
        assert!(!result.is_empty());
        assert!(result.iter().all(|r| r.region.as_deref() == Some("Europe")));

        assert!(filter_json(&json!({ "region": "Atlantis" })).is_err());
    }

    #[test]
    fn test_mutual_exclusion() {
        let err = filter_json(&json!({ "plmn": "310410", "mcc": "310" })).unwrap_err();
        assert!(matches!(err, MccMncError::Filter(FilterError::Conflict { field: "mcc" })));
    }

    #[test]
    fn test_conjunction() {
        let by_mcc = filter(Some(&FilterConfig::new().mcc("310"))).unwrap();
        let by_status = filter(Some(&FilterConfig::new().status_code("Operational"))).unwrap();
        let both = filter(Some(&FilterConfig::new().mcc("310").status_code("Operational"))).unwrap();

        let intersection = by_mcc
            .iter()
            .filter(|r| by_status.iter().any(|s| std::ptr::eq(**r, *s)))
            .count();
        assert!(!both.is_empty());
        assert_eq!(both.len(), intersection);
    }

    #[test]
    fn test_embedded_invariants() {
        for record in all().unwrap() {
            match (&record.mcc, &record.mnc) {
                (Some(mcc), Some(mnc)) => {
                    assert_eq!(record.plmn.as_deref(), Some(format!("{}{}", mcc, mnc).as_str()));
                    let nibbled = record.nibbled_plmn.as_deref().unwrap();
                    let (dmcc, dmnc) = crate::plmn::decode_plmn(nibbled).unwrap();
                    assert_eq!(&dmcc, mcc);
                    if mnc.len() == 1 {
                        assert_eq!(dmnc, format!("0{}", mnc));
                    } else {
                        assert_eq!(&dmnc, mnc);
                    }
                }
                _ => {
                    assert!(record.plmn.is_none());
                    assert!(record.nibbled_plmn.is_none());
                }
            }
        }
    }
}
