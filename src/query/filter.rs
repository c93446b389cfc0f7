// Record filter
//
// A `FilterConfig` is what a caller asks for; `Filter` is what survives
// validation. Validation runs to completion before any record is looked at,
// so an invalid configuration never yields a partial result.
//
// Validation order:
//   1. statusCode in the status vocabulary
//   2. plmn is text; split into mcc (first 3 chars) and mnc (rest)
//   3. mcc not given together with plmn, then the same for mnc
//   4. mcc, mnc are text or integer; countryCode is text
//   5. region in the region vocabulary
//
// Predicates are applied in the order status, countryCode, region, mcc, mnc.

use serde::{Deserialize, Serialize};

use crate::error::FilterError;
use crate::reference::dataset::Dataset;
use crate::reference::records::Record;
use crate::reference::regions::get_region_by_name;

/// A filter parameter as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    /// Any other JSON value; always fails the type check
    Other(serde_json::Value),
}

impl FilterValue {
    /// Empty text, zero, `false` and `null` are treated as "not given"
    fn is_set(&self) -> bool {
        match self {
            FilterValue::Text(s) => !s.is_empty(),
            FilterValue::Integer(n) => *n != 0,
            FilterValue::Other(v) => !matches!(v, serde_json::Value::Null | serde_json::Value::Bool(false)),
        }
    }

    fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Text as-is, integers in decimal
    fn to_code(&self) -> Option<String> {
        match self {
            FilterValue::Text(s) => Some(s.clone()),
            FilterValue::Integer(n) => Some(n.to_string()),
            FilterValue::Other(_) => None,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Text(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::Text(s)
    }
}

impl From<i64> for FilterValue {
    fn from(n: i64) -> Self {
        FilterValue::Integer(n)
    }
}

/// Optional query parameters, all ANDed together
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfig {
    pub status_code: Option<FilterValue>,
    pub plmn: Option<FilterValue>,
    pub mcc: Option<FilterValue>,
    pub mnc: Option<FilterValue>,
    pub country_code: Option<FilterValue>,
    pub region: Option<FilterValue>,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status_code(mut self, value: impl Into<FilterValue>) -> Self {
        self.status_code = Some(value.into());
        self
    }

    pub fn plmn(mut self, value: impl Into<FilterValue>) -> Self {
        self.plmn = Some(value.into());
        self
    }

    pub fn mcc(mut self, value: impl Into<FilterValue>) -> Self {
        self.mcc = Some(value.into());
        self
    }

    pub fn mnc(mut self, value: impl Into<FilterValue>) -> Self {
        self.mnc = Some(value.into());
        self
    }

    pub fn country_code(mut self, value: impl Into<FilterValue>) -> Self {
        self.country_code = Some(value.into());
        self
    }

    pub fn region(mut self, value: impl Into<FilterValue>) -> Self {
        self.region = Some(value.into());
        self
    }

    /// Check the configuration against the dataset's vocabularies
    pub fn validate(&self, dataset: &Dataset) -> Result<Filter, FilterError> {
        let mut filter = Filter::default();

        if let Some(value) = given(&self.status_code) {
            match value.as_text() {
                Some(status) if dataset.has_status_code(status) => {
                    filter.status = Some(status.to_string());
                }
                _ => return Err(FilterError::UnknownStatusCode(describe(value))),
            }
        }

        let mut plmn_mcc = None;
        let mut plmn_mnc = None;
        if let Some(value) = given(&self.plmn) {
            let plmn = value
                .as_text()
                .ok_or(FilterError::InvalidType { field: "plmn" })?;
            let mcc: String = plmn.chars().take(3).collect();
            let mnc: String = plmn.chars().skip(3).collect();
            plmn_mcc = Some(mcc).filter(|s| !s.is_empty());
            plmn_mnc = Some(mnc).filter(|s| !s.is_empty());
        }

        let mcc = given(&self.mcc);
        let mnc = given(&self.mnc);
        if mcc.is_some() && plmn_mcc.is_some() {
            return Err(FilterError::Conflict { field: "mcc" });
        }
        if mnc.is_some() && plmn_mnc.is_some() {
            return Err(FilterError::Conflict { field: "mnc" });
        }

        filter.mcc = match mcc {
            Some(value) => Some(value.to_code().ok_or(FilterError::InvalidType { field: "mcc" })?),
            None => plmn_mcc,
        };
        filter.mnc = match mnc {
            Some(value) => Some(value.to_code().ok_or(FilterError::InvalidType { field: "mnc" })?),
            None => plmn_mnc,
        };

        // Checked whenever present; an empty code matches everything
        if let Some(value) = self.country_code.as_ref().filter(|v| !is_null(v)) {
            let code = value
                .as_text()
                .ok_or(FilterError::InvalidType { field: "countryCode" })?;
            filter.country_code = Some(code.to_string()).filter(|s| !s.is_empty());
        }

        if let Some(value) = given(&self.region) {
            match value.as_text().and_then(get_region_by_name) {
                Some(region) => filter.region = Some(region.name.to_string()),
                None => return Err(FilterError::UnknownRegion(describe(value))),
            }
        }

        Ok(filter)
    }
}

fn given(value: &Option<FilterValue>) -> Option<&FilterValue> {
    value.as_ref().filter(|v| v.is_set())
}

fn is_null(value: &FilterValue) -> bool {
    matches!(value, FilterValue::Other(serde_json::Value::Null))
}

fn describe(value: &FilterValue) -> String {
    match value {
        FilterValue::Text(s) => s.clone(),
        FilterValue::Integer(n) => n.to_string(),
        FilterValue::Other(v) => v.to_string(),
    }
}

/// A validated filter; every `Some` field is an exact-match predicate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub status: Option<String>,
    pub country_code: Option<String>,
    pub region: Option<String>,
    pub mcc: Option<String>,
    pub mnc: Option<String>,
}

impl Filter {
    pub fn matches(&self, record: &Record) -> bool {
        let predicates = [
            (&self.status, &record.status),
            (&self.country_code, &record.country_code),
            (&self.region, &record.region),
            (&self.mcc, &record.mcc),
            (&self.mnc, &record.mnc),
        ];
        predicates.iter().all(|(wanted, actual)| match wanted {
            Some(wanted) => actual.as_deref() == Some(wanted.as_str()),
            None => true,
        })
    }

    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}
