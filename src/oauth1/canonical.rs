//! Parameter normalization for the OAuth 1.0a signature base string.
//!
//! Query parameters, the six `oauth_*` protocol parameters, and form body parameters are
//! each encoded as `encode(key)=encode(value)`, sorted by byte order, and joined with `&`.
//! Names are never deduplicated: a caller-supplied `oauth_nonce` query parameter sits next to
//! the generated one and both are signed.

// self
use crate::{
	auth::Credentials,
	encode::encode_pair,
	oauth1::{
		OAUTH_CONSUMER_KEY, OAUTH_NONCE, OAUTH_SIGNATURE_METHOD, OAUTH_TIMESTAMP, OAUTH_TOKEN,
		OAUTH_VERSION, SigningContext,
	},
	request::Request,
};

/// Canonical inputs to the signature base string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalRequest {
	/// `protocol://host/uri`, unencoded and without a query string.
	pub base_url: String,
	/// Sorted, `&`-joined, encoded parameters.
	pub parameters: String,
}

/// Builds the base URL and normalized parameter string for `request`.
pub fn canonicalize(
	request: &Request,
	credentials: &Credentials,
	context: &SigningContext,
) -> CanonicalRequest {
	let oauth_params = [
		(OAUTH_CONSUMER_KEY, credentials.consumer_key()),
		(OAUTH_NONCE, context.nonce.as_str()),
		(OAUTH_SIGNATURE_METHOD, context.signature_method.as_str()),
		(OAUTH_TIMESTAMP, context.timestamp.as_str()),
		(OAUTH_TOKEN, credentials.user_token()),
		(OAUTH_VERSION, context.version),
	];
	let mut encoded = Vec::with_capacity(request.queries.len() + 6 + request.form.len());

	encoded.extend(request.queries.iter().map(|(k, v)| encode_pair(k, v)));
	encoded.extend(oauth_params.iter().map(|(k, v)| encode_pair(k, v)));
	encoded.extend(request.form.iter().map(|(k, v)| encode_pair(k, v)));
	// `String` ordering is byte-wise, which is what the verifier uses.
	encoded.sort_unstable();

	CanonicalRequest { base_url: request.base_url(), parameters: encoded.join("&") }
}
