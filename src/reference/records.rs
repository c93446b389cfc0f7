// Operator records
//
// One record per MCC+MNC assignment. The persisted list is an array of these
// objects in camelCase, with `null` for every absent field.
//
// Derived fields:
// - plmn: mcc + mnc, only when both are present
// - nibbledPlmn: encode_plmn(mcc, mnc), only when plmn is present
// - region: from the leading MCC digit (see regions.rs)

use serde::{Deserialize, Serialize};

use super::regions::get_region;
use crate::plmn::encode_plmn;

/// Section of the source list a record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RecordType {
    National,
    International,
    Test,
    /// Any other section heading. Kept in the dataset, never filtered on.
    #[default]
    #[serde(rename = "other")]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub plmn: Option<String>,
    pub nibbled_plmn: Option<String>,
    pub mcc: Option<String>,
    pub mnc: Option<String>,
    pub region: Option<String>,
    #[serde(rename = "type", default)]
    pub record_type: RecordType,
    pub country_name: Option<String>,
    /// Usually ends in an ISO 3166-1 alpha-2 code (e.g. "US", "GB-GG")
    pub country_code: Option<String>,
    pub lat: Option<String>,
    pub long: Option<String>,
    pub brand: Option<String>,
    pub operator: Option<String>,
    pub status: Option<String>,
    pub bands: Option<String>,
    pub notes: Option<String>,
}

impl Record {
    /// Create a record from its codes, filling in the derived fields
    pub fn from_codes(mcc: Option<&str>, mnc: Option<&str>) -> Self {
        let mut record = Record {
            mcc: non_empty(mcc.map(str::to_string)),
            mnc: non_empty(mnc.map(str::to_string)),
            ..Default::default()
        };
        record.derive_codes();
        record
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = non_empty(Some(normalize_status(status)));
        self
    }

    pub fn with_country(mut self, name: &str, code: &str) -> Self {
        self.country_name = non_empty(Some(name.to_string()));
        self.country_code = non_empty(Some(code.to_string()));
        self
    }

    pub fn with_operator(mut self, brand: &str, operator: &str) -> Self {
        self.brand = non_empty(Some(brand.to_string()));
        self.operator = non_empty(Some(operator.to_string()));
        self
    }

    pub fn with_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    /// Canonicalize a record as loaded from the persisted list
    ///
    /// Blank text becomes `None`, the status is canonicalized and the derived
    /// fields are recomputed from `mcc`/`mnc`.
    pub fn normalized(mut self) -> Self {
        for field in [
            &mut self.mcc,
            &mut self.mnc,
            &mut self.country_name,
            &mut self.country_code,
            &mut self.lat,
            &mut self.long,
            &mut self.brand,
            &mut self.operator,
            &mut self.status,
            &mut self.bands,
            &mut self.notes,
        ] {
            *field = non_empty(field.take());
        }
        self.status = self.status.map(|s| normalize_status(&s));

        let stored = (self.plmn.clone(), self.nibbled_plmn.clone(), self.region.clone());
        self.derive_codes();
        if stored != (self.plmn.clone(), self.nibbled_plmn.clone(), self.region.clone()) {
            log::debug!(
                "Re-derived codes for {:?}/{:?}: stored {:?}",
                self.mcc,
                self.mnc,
                stored
            );
        }
        self
    }

    fn derive_codes(&mut self) {
        match (&self.mcc, &self.mnc) {
            (Some(mcc), Some(mnc)) => {
                self.plmn = Some(format!("{}{}", mcc, mnc));
                self.nibbled_plmn = Some(encode_plmn(mcc, mnc));
            }
            _ => {
                self.plmn = None;
                self.nibbled_plmn = None;
            }
        }
        self.region = get_region(self.mcc.as_deref()).map(str::to_string);
    }
}

/// Canonicalize a status string
///
/// Only the two spellings seen in the source list are rewritten; every other
/// casing is kept as-is.
pub fn normalize_status(status: &str) -> String {
    match status {
        "Not Operational" => "Not operational".to_string(),
        "operational" => "Operational".to_string(),
        other => other.to_string(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
