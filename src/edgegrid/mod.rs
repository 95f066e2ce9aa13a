//! EdgeGrid authentication: credentials and request signing.

pub mod credentials;
pub mod signer;

pub use credentials::{Credentials, DEFAULT_MAX_BODY, DEFAULT_SECTION};
pub use signer::Signer;
