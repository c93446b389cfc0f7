// Operator dataset
//
// Built once from the persisted record list (mcc-mnc-list.json) and the
// persisted status-code list (status-codes.json). After `from_records`
// returns, nothing mutates the records or the status vocabulary.

use std::collections::{BTreeSet, HashMap};

use super::records::{normalize_status, Record, RecordType};
use crate::error::{MccMncError, Result};

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    status_codes: Vec<String>,
}

impl Dataset {
    /// Build the dataset from raw records
    ///
    /// Every record is normalized (see `Record::normalized`). The status
    /// vocabulary is the sorted union of the statuses seen on records and
    /// `extra_status_codes`, after normalization.
    pub fn from_records<I, S>(records: Vec<Record>, extra_status_codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let records: Vec<Record> = records.into_iter().map(Record::normalized).collect();

        let mut status_codes: BTreeSet<String> = extra_status_codes
            .into_iter()
            .map(|s| normalize_status(s.as_ref().trim()))
            .filter(|s| !s.is_empty())
            .collect();
        status_codes.extend(records.iter().filter_map(|r| r.status.clone()));

        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut other_count = 0;
        for record in &records {
            if let Some(plmn) = record.plmn.as_deref() {
                *seen.entry(plmn).or_insert(0) += 1;
            }
            if record.record_type == RecordType::Other {
                other_count += 1;
            }
        }
        let mut duplicates: Vec<&str> = seen
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(plmn, _)| plmn)
            .collect();
        if !duplicates.is_empty() {
            duplicates.sort_unstable();
            log::warn!("{} duplicate PLMNs in dataset: {}", duplicates.len(), duplicates.join(", "));
        }
        if other_count > 0 {
            log::warn!("{} records have type 'other'", other_count);
        }

        let status_codes: Vec<String> = status_codes.into_iter().collect();
        log::info!(
            "Dataset built: {} records, {} status codes",
            records.len(),
            status_codes.len()
        );

        Self { records, status_codes }
    }

    /// Parse the persisted JSON files and build the dataset
    pub fn from_json(records_json: &str, status_codes_json: Option<&str>) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_str(records_json)?;
        let status_codes: Vec<String> = match status_codes_json {
            Some(json) => serde_json::from_str(json)?,
            None => Vec::new(),
        };

        if records.is_empty() {
            return Err(MccMncError::Dataset("record list is empty".to_string()));
        }

        Ok(Self::from_records(records, status_codes))
    }

    /// Every record, in load order
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    /// Sorted status-code vocabulary
    pub fn status_codes(&self) -> &[String] {
        &self.status_codes
    }

    pub fn has_status_code(&self, status: &str) -> bool {
        self.status_codes.binary_search_by(|s| s.as_str().cmp(status)).is_ok()
    }

    /// All records whose `plmn` equals `plmn` exactly
    pub fn find_by_plmn(&self, plmn: &str) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| r.plmn.as_deref() == Some(plmn))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<Record> {
        vec![
            Record::from_codes(Some("310"), Some("410")).with_status("Operational"),
            Record::from_codes(Some("234"), Some("15")).with_status("Operational"),
            Record {
                mcc: Some("262".to_string()),
                mnc: Some("01".to_string()),
                status: Some("Not Operational".to_string()),
                ..Default::default()
            },
            Record::from_codes(Some("310"), Some("410")).with_status("operational"),
        ]
    }

    #[test]
    fn test_status_vocabulary_sorted_and_normalized() {
        let dataset = Dataset::from_records(sample_records(), ["Reserved", "Not Operational"]);
        assert_eq!(
            dataset.status_codes(),
            &["Not operational", "Operational", "Reserved"]
        );
        assert!(dataset.has_status_code("Not operational"));
        assert!(!dataset.has_status_code("Not Operational"));
    }

    #[test]
    fn test_records_normalized_on_build() {
        let dataset = Dataset::from_records(sample_records(), Vec::<String>::new());
        let record = &dataset.all()[2];
        assert_eq!(record.status.as_deref(), Some("Not operational"));
        assert_eq!(record.plmn.as_deref(), Some("26201"));
        assert_eq!(record.nibbled_plmn.as_deref(), Some("62F210"));
        assert_eq!(record.region.as_deref(), Some("Europe"));
    }

    #[test]
    fn test_duplicates_preserved() {
        let dataset = Dataset::from_records(sample_records(), Vec::<String>::new());
        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.find_by_plmn("310410").len(), 2);
        assert!(dataset.find_by_plmn("31041").is_empty());
    }

    #[test]
    fn test_from_json() {
        let records = r#"[
            {"mcc": "001", "mnc": "01", "type": "Test", "brand": "TEST", "status": "Operational"},
            {"mcc": "901", "mnc": null, "type": "International", "status": ""}
        ]"#;
        let dataset = Dataset::from_json(records, Some(r#"["Operational", "Unknown"]"#)).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.status_codes(), &["Operational", "Unknown"]);
        assert_eq!(dataset.all()[0].nibbled_plmn.as_deref(), Some("00F110"));
        assert_eq!(dataset.all()[1].status, None);
        assert_eq!(dataset.all()[1].plmn, None);
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(Dataset::from_json("{}", None), Err(MccMncError::Json(_))));
        assert!(matches!(Dataset::from_json("[]", None), Err(MccMncError::Dataset(_))));
        assert!(matches!(
            Dataset::from_json(r#"[{"mcc": "001"}]"#, Some("not json")),
            Err(MccMncError::Json(_))
        ));
    }
}
