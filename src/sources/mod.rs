pub mod fallback;
pub mod images;
pub mod mapper;
pub mod queries;
pub mod sanity;
pub mod traits;
pub mod types;

pub use fallback::StaticCatalog;
pub use images::{ImageSource, ImageUrlBuilder};
pub use sanity::{SanityClient, SanitySource};
pub use traits::PropertySource;
pub use types::QueryParams;
