pub mod config;
pub mod logging;

pub mod base_url;
pub mod error;
pub mod location;
pub mod resource;
pub mod transformer;
pub mod transport;

pub use error::DownloadError;
pub use location::ResourceLocation;
pub use resource::{DownloadableResource, FetchOutcome, RemoteResource};
pub use transformer::DevResourceTransformer;
