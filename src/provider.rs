use crate::config::SanityConfig;
use crate::models::{Property, PropertyFilter, PropertyStatus};
use crate::sources::{
    ImageSource, ImageUrlBuilder, PropertySource, SanityClient, SanitySource, StaticCatalog,
};
use anyhow::Result;
use tracing::{debug, info, warn};

/// Entry point pages use to read the catalog
///
/// Every operation asks the remote source when one is wired in and serves
/// the static catalog when there is none or the remote call fails. Failures
/// are logged, never returned: callers always get a list or an `Option`.
pub struct CatalogProvider {
    remote: Option<Box<dyn PropertySource>>,
    images: Option<ImageUrlBuilder>,
    fallback: StaticCatalog,
}

impl CatalogProvider {
    /// Provider with an explicit remote source (or none)
    pub fn new(remote: Option<Box<dyn PropertySource>>) -> Self {
        Self {
            remote,
            images: None,
            fallback: StaticCatalog::new(),
        }
    }

    /// Provider that only serves the static catalog
    pub fn fallback_only() -> Self {
        Self::new(None)
    }

    pub fn with_images(mut self, images: ImageUrlBuilder) -> Self {
        self.images = Some(images);
        self
    }

    /// Wire the Sanity source when a configuration is present.
    ///
    /// A client that cannot be built is treated like a missing configuration.
    pub fn from_config(config: Option<SanityConfig>) -> Self {
        let Some(config) = config else {
            info!("Content source not configured, serving the static catalog");
            return Self::fallback_only();
        };

        match SanityClient::new(config) {
            Ok(client) => {
                info!(
                    project = %client.config().project_id,
                    dataset = %client.config().dataset,
                    "Using Sanity content source"
                );
                let images = ImageUrlBuilder::new(client.config());
                Self::new(Some(Box::new(SanitySource::new(client)))).with_images(images)
            },
            Err(err) => {
                warn!(error = %err, "Could not create content client, serving the static catalog");
                Self::fallback_only()
            },
        }
    }

    pub fn from_env() -> Self {
        Self::from_config(SanityConfig::from_env())
    }

    pub fn is_remote_configured(&self) -> bool {
        self.remote.is_some()
    }

    /// All properties, newest first from the remote or in declared order
    /// from the static catalog
    pub async fn get_properties(&self) -> Vec<Property> {
        let remote = match &self.remote {
            Some(source) => Some(source.all().await),
            None => None,
        };
        self.settle("get_properties", remote, || self.fallback.all())
    }

    /// Properties matching `filter`. Price bounds have no effect.
    pub async fn get_filtered_properties(&self, filter: &PropertyFilter) -> Vec<Property> {
        let remote = match &self.remote {
            Some(source) => Some(source.filtered(filter).await),
            None => None,
        };
        self.settle("get_filtered_properties", remote, || {
            self.fallback.filter(filter)
        })
    }

    /// The property with exactly this slug, if any
    pub async fn get_property_by_slug(&self, slug: &str) -> Option<Property> {
        let remote = match &self.remote {
            Some(source) => Some(source.by_slug(slug).await),
            None => None,
        };
        self.settle("get_property_by_slug", remote, || {
            self.fallback.find_by_slug(slug)
        })
    }

    pub async fn get_properties_by_status(&self, status: PropertyStatus) -> Vec<Property> {
        let remote = match &self.remote {
            Some(source) => Some(source.by_status(status).await),
            None => None,
        };
        self.settle("get_properties_by_status", remote, || {
            self.fallback.with_status(status)
        })
    }

    /// Slugs of every property, for generating detail pages ahead of time
    pub async fn get_property_slugs(&self) -> Vec<String> {
        self.get_properties()
            .await
            .into_iter()
            .map(|property| property.slug)
            .collect()
    }

    /// CDN URL for an image reference, empty without a remote source
    pub fn image_url(&self, source: Option<&ImageSource>) -> String {
        self.images
            .as_ref()
            .map(|images| images.url_for(source))
            .unwrap_or_default()
    }

    pub fn image_url_with_width(&self, source: Option<&ImageSource>, width: u32) -> String {
        self.images
            .as_ref()
            .map(|images| images.url_for_width(source, width))
            .unwrap_or_default()
    }

    fn settle<T>(
        &self,
        operation: &'static str,
        remote: Option<Result<T>>,
        fallback: impl FnOnce() -> T,
    ) -> T {
        let source = self
            .remote
            .as_ref()
            .map(|remote| remote.source_name())
            .unwrap_or("none");

        match remote {
            Some(Ok(value)) => {
                debug!(operation, source, "Served from content source");
                value
            },
            Some(Err(err)) => {
                warn!(
                    operation,
                    source,
                    error = %format!("{err:#}"),
                    "Content source failed, serving the static catalog"
                );
                fallback()
            },
            None => {
                debug!(operation, "Served from the static catalog");
                fallback()
            },
        }
    }
}
