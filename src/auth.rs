//! Credential models and secret handling.

pub mod credentials;
pub mod secret;

pub use credentials::*;
pub use secret::*;
