//! Public extension contract for attaching authorization to outbound requests.

pub mod request_signer;

pub use request_signer::*;
