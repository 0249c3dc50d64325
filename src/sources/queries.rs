//! GROQ queries for `property` documents.
//!
//! Every query returns the same projection. `images` is the cover image
//! followed by the gallery, with missing entries removed.

macro_rules! property_projection {
    () => {
        r#"{
    _id,
    _createdAt,
    _updatedAt,
    "slug": slug.current,
    title,
    description,
    type,
    status,
    price,
    location,
    area,
    bedrooms,
    bathrooms,
    features,
    "images": array::compact([coverImage.asset->url] + gallery[].asset->url)
  }"#
    };
}

/// All properties, newest first
pub const PROPERTIES_QUERY: &str = concat!(
    r#"*[_type == "property"] | order(_createdAt desc) "#,
    property_projection!()
);

/// A single property by slug. Takes `$slug`.
pub const PROPERTY_BY_SLUG_QUERY: &str = concat!(
    r#"*[_type == "property" && slug.current == $slug][0] "#,
    property_projection!()
);

/// Properties with one status, newest first. Takes `$status`.
pub const PROPERTIES_BY_STATUS_QUERY: &str = concat!(
    r#"*[_type == "property" && status == $status] | order(_createdAt desc) "#,
    property_projection!()
);

/// Filtered properties, newest first.
///
/// Takes `$status` and `$type` (lists) and `$location` (a `match` pattern).
/// Each may be `null` to skip that criterion.
pub const PROPERTIES_FILTERED_QUERY: &str = concat!(
    r#"*[_type == "property"
    && (!defined($status) || status in $status)
    && (!defined($type) || type in $type)
    && (!defined($location) || location match $location)
  ] | order(_createdAt desc) "#,
    property_projection!()
);

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [&str; 4] = [
        PROPERTIES_QUERY,
        PROPERTY_BY_SLUG_QUERY,
        PROPERTIES_BY_STATUS_QUERY,
        PROPERTIES_FILTERED_QUERY,
    ];

    #[test]
    fn every_query_projects_images_from_cover_and_gallery() {
        for query in ALL {
            assert!(query.contains(r#""slug": slug.current"#), "{query}");
            assert!(
                query.contains("array::compact([coverImage.asset->url] + gallery[].asset->url)"),
                "{query}"
            );
        }
    }

    #[test]
    fn list_queries_are_newest_first() {
        for query in [PROPERTIES_QUERY, PROPERTIES_BY_STATUS_QUERY, PROPERTIES_FILTERED_QUERY] {
            assert!(query.contains("order(_createdAt desc)"), "{query}");
        }
        assert!(!PROPERTY_BY_SLUG_QUERY.contains("order("));
    }

    #[test]
    fn parameterized_queries_name_their_parameters() {
        assert!(PROPERTY_BY_SLUG_QUERY.contains("$slug"));
        assert!(PROPERTIES_BY_STATUS_QUERY.contains("$status"));
        for param in ["$status", "$type", "$location"] {
            assert!(PROPERTIES_FILTERED_QUERY.contains(param));
        }
    }
}
