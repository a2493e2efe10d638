//! Request signing contract shared by user-context and application-only authorization.

// self
use crate::request::Request;

/// Writes authorization state into an outbound [`Request`].
///
/// Both the OAuth 1.0a [`Signer`](crate::oauth1::Signer) and an issued
/// [`BearerToken`](crate::bearer::BearerToken) implement this trait, so REST wrappers can
/// hold either behind `dyn RequestSigner` and stay agnostic of the scheme in use.
/// Implementations must only touch [`Request::authorization`].
pub trait RequestSigner
where
	Self: Send + Sync,
{
	/// Replaces the request's authorization value.
	fn sign_request(&self, request: &mut Request);
}
