//! Signing-identity domain: validated credentials, redacted secret material, nonces.

pub mod credentials;
pub mod nonce;
pub mod secret;

pub use credentials::*;
pub use nonce::*;
pub use secret::*;
