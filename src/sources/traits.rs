use crate::models::{Property, PropertyFilter, PropertyStatus};
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for everything that can answer catalog queries
///
/// The provider can be wired with any remote that implements it (the Sanity
/// source, or a test double).
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// All properties in the source's own order
    async fn all(&self) -> Result<Vec<Property>>;

    /// Properties matching the status, type and location criteria
    async fn filtered(&self, filter: &PropertyFilter) -> Result<Vec<Property>>;

    /// Exact slug lookup, `Ok(None)` when nothing matches
    async fn by_slug(&self, slug: &str) -> Result<Option<Property>>;

    async fn by_status(&self, status: PropertyStatus) -> Result<Vec<Property>>;

    /// Get the name of the source, used in log output
    fn source_name(&self) -> &'static str;
}
