//! Validated value types.

mod base_url;
mod params;

pub use base_url::BaseUrl;
pub use params::Params;
