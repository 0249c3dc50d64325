use crate::config::SanityConfig;
use crate::error::ContentError;
use crate::models::{Property, PropertyFilter, PropertyStatus};
use crate::sources::images::{ImageSource, ImageUrlBuilder};
use crate::sources::mapper::{decode_properties, decode_property};
use crate::sources::queries::{
    PROPERTIES_BY_STATUS_QUERY, PROPERTIES_FILTERED_QUERY, PROPERTIES_QUERY,
    PROPERTY_BY_SLUG_QUERY,
};
use crate::sources::traits::PropertySource;
use crate::sources::types::QueryParams;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

/// Envelope of a query API response
#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: T,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<ErrorBody>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    description: Option<String>,
}

/// HTTP client for the Sanity query API
///
/// Can only be built from a present [`SanityConfig`], so holding one means
/// remote mode is configured.
#[derive(Debug, Clone)]
pub struct SanityClient {
    client: Client,
    config: SanityConfig,
    images: ImageUrlBuilder,
}

impl SanityClient {
    pub fn new(config: SanityConfig) -> Result<Self, ContentError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ContentError::Client)?;

        Ok(Self {
            client,
            images: ImageUrlBuilder::new(&config),
            config,
        })
    }

    pub fn config(&self) -> &SanityConfig {
        &self.config
    }

    /// Run a GROQ query and decode its `result`
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        query: &str,
        params: &QueryParams,
    ) -> Result<T, ContentError> {
        let url = self.config.query_url();
        debug!(%url, params = ?params, "Running content query");

        let mut request = self
            .client
            .get(&url)
            .query(&[("query", query)])
            .query(&params.to_query_pairs());
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(ContentError::Transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(ContentError::Transport)?;

        if !status.is_success() {
            let description = serde_json::from_slice::<ErrorResponse>(&body)
                .ok()
                .and_then(|err| err.error.and_then(|e| e.description).or(err.message))
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unexpected response")
                        .to_string()
                });
            return Err(ContentError::Api {
                status,
                description,
            });
        }

        let envelope: QueryResponse<T> =
            serde_json::from_slice(&body).map_err(ContentError::Decode)?;
        Ok(envelope.result)
    }

    pub fn url_for(&self, source: Option<&ImageSource>) -> String {
        self.images.url_for(source)
    }

    pub fn url_for_width(&self, source: Option<&ImageSource>, width: u32) -> String {
        self.images.url_for_width(source, width)
    }
}

/// Catalog backed by `property` documents in Sanity
pub struct SanitySource {
    client: SanityClient,
}

impl SanitySource {
    pub fn new(client: SanityClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &SanityClient {
        &self.client
    }

    async fn fetch_list(&self, query: &str, params: QueryParams) -> Result<Vec<Property>> {
        let docs: Vec<serde_json::Value> = self.client.fetch(query, &params).await?;
        Ok(decode_properties(docs))
    }
}

#[async_trait]
impl PropertySource for SanitySource {
    async fn all(&self) -> Result<Vec<Property>> {
        self.fetch_list(PROPERTIES_QUERY, QueryParams::new())
            .await
            .context("Failed to fetch properties")
    }

    async fn filtered(&self, filter: &PropertyFilter) -> Result<Vec<Property>> {
        let params = QueryParams::for_filter(filter)?;
        self.fetch_list(PROPERTIES_FILTERED_QUERY, params)
            .await
            .context("Failed to fetch filtered properties")
    }

    async fn by_slug(&self, slug: &str) -> Result<Option<Property>> {
        let params = QueryParams::for_slug(slug)?;
        let doc: Option<serde_json::Value> = self
            .client
            .fetch(PROPERTY_BY_SLUG_QUERY, &params)
            .await
            .with_context(|| format!("Failed to fetch property '{slug}'"))?;
        Ok(doc.and_then(decode_property))
    }

    async fn by_status(&self, status: PropertyStatus) -> Result<Vec<Property>> {
        let params = QueryParams::for_status(status)?;
        self.fetch_list(PROPERTIES_BY_STATUS_QUERY, params)
            .await
            .with_context(|| format!("Failed to fetch {status} properties"))
    }

    fn source_name(&self) -> &'static str {
        "Sanity"
    }
}
