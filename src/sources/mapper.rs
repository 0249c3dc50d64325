//! Mapping from raw `property` documents to [`Property`].

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::models::{Property, PropertyStatus, PropertyType};

/// A `property` document as returned by the GROQ projection.
///
/// System fields and `type` are always present; everything else may be
/// missing on drafts or older documents and is defaulted by
/// [`map_property`].
#[derive(Debug, Clone, Deserialize)]
pub struct SanityProperty {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "_updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<PropertyStatus>,
    pub price: Option<String>,
    pub location: Option<String>,
    pub area: Option<String>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub features: Option<Vec<String>>,
    pub images: Option<Vec<Option<String>>>,
}

/// Convert one document. Never fails.
pub fn map_property(doc: SanityProperty) -> Property {
    Property {
        id: doc.id,
        slug: doc.slug.unwrap_or_default(),
        title: doc.title.unwrap_or_default(),
        description: doc.description.unwrap_or_default(),
        property_type: doc.property_type,
        status: doc.status.unwrap_or_default(),
        price: doc.price.unwrap_or_default(),
        location: doc.location.unwrap_or_default(),
        area: doc.area.unwrap_or_default(),
        bedrooms: doc.bedrooms.unwrap_or(0),
        bathrooms: doc.bathrooms.unwrap_or(0),
        features: doc.features.unwrap_or_default(),
        images: doc
            .images
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .collect(),
        created_at: doc.created_at,
        updated_at: doc.updated_at,
    }
}

/// Convert a list of documents, keeping their order
pub fn map_properties(docs: Vec<SanityProperty>) -> Vec<Property> {
    docs.into_iter().map(map_property).collect()
}

/// Decode and convert one raw document.
///
/// A document that does not fit [`SanityProperty`] (a draft without `type`,
/// an unknown status) is logged and yields `None`.
pub fn decode_property(doc: Value) -> Option<Property> {
    let id = doc
        .get("_id")
        .and_then(Value::as_str)
        .unwrap_or("<missing _id>")
        .to_string();

    match serde_json::from_value::<SanityProperty>(doc) {
        Ok(raw) => Some(map_property(raw)),
        Err(err) => {
            warn!(id = %id, error = %err, "Skipping malformed property document");
            None
        },
    }
}

/// Decode a list of raw documents, dropping only the malformed ones
pub fn decode_properties(docs: Vec<Value>) -> Vec<Property> {
    docs.into_iter().filter_map(decode_property).collect()
}
