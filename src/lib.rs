//! Property catalog for the brokerage website.
//!
//! Pages use [`CatalogProvider`] to list properties and look them up by
//! slug. Listings come from Sanity when it is configured and reachable, and
//! from a built-in dataset otherwise.

pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod sources;

pub use config::SanityConfig;
pub use error::ContentError;
pub use models::{Property, PropertyFilter, PropertyStatus, PropertyType};
pub use provider::CatalogProvider;
