use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::ContentError;
use crate::models::{PropertyFilter, PropertyStatus};

/// Named parameters for a GROQ query, e.g. `$slug`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    values: BTreeMap<String, Value>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter; the name is given without the leading `$`
    pub fn with(mut self, name: &str, value: impl Serialize) -> Result<Self, ContentError> {
        let value = serde_json::to_value(value).map_err(|source| ContentError::Param {
            name: name.to_string(),
            source,
        })?;
        self.values.insert(name.to_string(), value);
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Query-string pairs as the HTTP API expects them: `$name` mapped to
    /// the JSON encoding of the value
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.values
            .iter()
            .map(|(name, value)| (format!("${name}"), value.to_string()))
            .collect()
    }

    pub fn for_slug(slug: &str) -> Result<Self, ContentError> {
        Self::new().with("slug", slug)
    }

    pub fn for_status(status: PropertyStatus) -> Result<Self, ContentError> {
        Self::new().with("status", status)
    }

    /// Parameters for the filtered query.
    ///
    /// Unset criteria are sent as `null` so the query's `defined()` guards
    /// skip them. The location becomes a `*text*` match pattern. Price bounds
    /// are not sent.
    pub fn for_filter(filter: &PropertyFilter) -> Result<Self, ContentError> {
        let location = filter.location_text().map(|text| format!("*{text}*"));
        Self::new()
            .with("status", filter.statuses())?
            .with("type", filter.types())?
            .with("location", location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyType;
    use serde_json::json;

    #[test]
    fn pairs_are_prefixed_and_json_encoded() {
        let params = QueryParams::for_slug("modern-villa-algarve").unwrap();
        assert_eq!(
            params.to_query_pairs(),
            vec![("$slug".to_string(), "\"modern-villa-algarve\"".to_string())]
        );
    }

    #[test]
    fn status_is_sent_as_wire_value() {
        let params = QueryParams::for_status(PropertyStatus::Reserved).unwrap();
        assert_eq!(params.get("status"), Some(&json!("reserved")));
    }

    #[test]
    fn filter_params_use_lists_and_match_pattern() {
        let filter = PropertyFilter {
            status: Some(vec![PropertyStatus::Available, PropertyStatus::Sold]),
            property_type: Some(vec![PropertyType::Villa]),
            location: Some("Marbella".to_string()),
            min_price: Some(100),
            max_price: Some(200),
        };
        let params = QueryParams::for_filter(&filter).unwrap();

        assert_eq!(params.get("status"), Some(&json!(["available", "sold"])));
        assert_eq!(params.get("type"), Some(&json!(["villa"])));
        assert_eq!(params.get("location"), Some(&json!("*Marbella*")));
        assert!(params.get("minPrice").is_none());
        assert!(params.get("min_price").is_none());
    }

    #[test]
    fn unset_filter_criteria_are_null() {
        let filter = PropertyFilter {
            status: Some(vec![]),
            ..Default::default()
        };
        let params = QueryParams::for_filter(&filter).unwrap();

        for name in ["status", "type", "location"] {
            assert_eq!(params.get(name), Some(&Value::Null), "{name}");
        }
    }
}
