pub mod detail;
pub mod error;
pub mod http;
pub mod source;

pub use detail::load_detail;
pub use error::{Error, Resource, Result};
pub use http::{DEFAULT_BASE_URL, HttpDirectory};
pub use source::DirectorySource;

// Re-exported so callers can build an HttpDirectory without naming reqwest.
pub use reqwest::Url;
