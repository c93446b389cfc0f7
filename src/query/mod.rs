// Query engine over the operator dataset
//
// `filter(dataset, None)` is a pass-through: the whole dataset, in order.
// Anything else is validated first (see filter.rs) and then evaluated.

pub mod filter;

pub use filter::{Filter, FilterConfig, FilterValue};

use crate::error::FilterError;
use crate::reference::dataset::Dataset;
use crate::reference::records::Record;

/// Records matching every parameter in `config`
pub fn filter<'a>(
    dataset: &'a Dataset,
    config: Option<&FilterConfig>,
) -> Result<Vec<&'a Record>, FilterError> {
    let Some(config) = config else {
        return Ok(dataset.all().iter().collect());
    };

    let filter = config.validate(dataset)?;
    Ok(filter.apply(dataset.all()))
}

/// Same as `filter`, for a configuration that arrives as untyped JSON
pub fn filter_json<'a>(
    dataset: &'a Dataset,
    config: &serde_json::Value,
) -> Result<Vec<&'a Record>, FilterError> {
    match config {
        serde_json::Value::Null => filter(dataset, None),
        serde_json::Value::Object(_) => {
            // Every field is an untagged FilterValue, so any object deserializes
            let config: FilterConfig =
                serde_json::from_value(config.clone()).map_err(|_| FilterError::NotAnObject)?;
            filter(dataset, Some(&config))
        }
        _ => Err(FilterError::NotAnObject),
    }
}
