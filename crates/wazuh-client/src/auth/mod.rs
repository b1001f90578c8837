//! Authentication primitives.
//!
//! Credentials are exchanged once for a bearer token; the token itself stays
//! inside the client's default headers.

mod credentials;
mod tokens;

pub use credentials::Credentials;
pub(crate) use tokens::AuthToken;
