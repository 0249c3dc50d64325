//! Image URLs for Sanity image assets.

use serde::Deserialize;

use crate::config::SanityConfig;

const CDN_BASE: &str = "https://cdn.sanity.io/images";

/// The shapes an image reference takes in Sanity documents
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ImageSource {
    /// `image-<id>-<W>x<H>-<fmt>` or an absolute URL
    Ref(String),
    /// An image field: `{ "asset": { "_ref": ... } }`
    Image { asset: Box<ImageSource> },
    /// A reference object: `{ "_ref": ... }`
    Reference {
        #[serde(rename = "_ref")]
        reference: String,
    },
    /// A dereferenced asset document with its URL
    Asset { url: String },
    /// An asset document: `{ "_id": ... }`
    Document {
        #[serde(rename = "_id")]
        id: String,
    },
}

impl From<&str> for ImageSource {
    fn from(value: &str) -> Self {
        Self::Ref(value.to_string())
    }
}

/// Builds CDN URLs for one project and dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlBuilder {
    project_id: String,
    dataset: String,
}

impl ImageUrlBuilder {
    pub fn new(config: &SanityConfig) -> Self {
        Self {
            project_id: config.project_id.clone(),
            dataset: config.dataset.clone(),
        }
    }

    /// Full-size URL, or an empty string if the reference is missing or
    /// not an image asset
    pub fn url_for(&self, source: Option<&ImageSource>) -> String {
        self.resolve(source, None)
    }

    /// URL scaled to `width` pixels, or an empty string
    pub fn url_for_width(&self, source: Option<&ImageSource>, width: u32) -> String {
        self.resolve(source, Some(width))
    }

    fn resolve(&self, source: Option<&ImageSource>, width: Option<u32>) -> String {
        let Some(base) = source.and_then(|source| self.base_url(source)) else {
            return String::new();
        };

        match width {
            Some(width) if base.contains('?') => format!("{base}&w={width}"),
            Some(width) => format!("{base}?w={width}"),
            None => base,
        }
    }

    fn base_url(&self, source: &ImageSource) -> Option<String> {
        match source {
            ImageSource::Ref(value) if is_absolute_url(value) => Some(value.clone()),
            ImageSource::Ref(value)
            | ImageSource::Reference { reference: value }
            | ImageSource::Document { id: value } => self.asset_url(value),
            ImageSource::Asset { url } if is_absolute_url(url) => Some(url.clone()),
            ImageSource::Asset { .. } => None,
            ImageSource::Image { asset } => self.base_url(asset),
        }
    }

    fn asset_url(&self, reference: &str) -> Option<String> {
        let (id, dimensions, format) = parse_asset_ref(reference)?;
        Some(format!(
            "{CDN_BASE}/{}/{}/{id}-{dimensions}.{format}",
            self.project_id, self.dataset
        ))
    }
}

fn is_absolute_url(value: &str) -> bool {
    value.starts_with("https://") || value.starts_with("http://")
}

/// Split `image-<id>-<W>x<H>-<fmt>` into its parts
fn parse_asset_ref(reference: &str) -> Option<(&str, &str, &str)> {
    let rest = reference.strip_prefix("image-")?;
    let mut parts = rest.rsplitn(3, '-');
    let format = parts.next()?;
    let dimensions = parts.next()?;
    let id = parts.next()?;

    let (w, h) = dimensions.split_once('x')?;
    let numeric = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    if id.is_empty() || format.is_empty() || !numeric(w) || !numeric(h) {
        return None;
    }

    Some((id, dimensions, format))
}
