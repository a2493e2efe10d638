//! HMAC-SHA1 signature over the OAuth 1.0a base string.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha1::Sha1;
// self
use crate::encode::encode;

type HmacSha1 = Hmac<Sha1>;

/// `METHOD&encode(base_url)&encode(parameters)`.
///
/// The parameter string is already made of encoded pairs; encoding it again as one value is
/// part of the wire format.
pub fn signature_base_string(method: &str, base_url: &str, parameters: &str) -> String {
	let mut base = method.to_ascii_uppercase();

	base.push('&');
	base.push_str(&encode(base_url));
	base.push('&');
	base.push_str(&encode(parameters));

	base
}

/// `encode(consumer_secret)&encode(token_secret)`; either half may be empty.
pub fn signing_key(consumer_secret: &str, token_secret: &str) -> String {
	let mut key = encode(consumer_secret);

	key.push('&');
	key.push_str(&encode(token_secret));

	key
}

/// Computes the base64 HMAC-SHA1 signature of `base_string` under `key`.
///
/// The result is not percent-encoded; that happens when it is placed in the header.
pub fn hmac_sha1(key: &str, base_string: &str) -> String {
	let mut mac =
		<HmacSha1 as Mac>::new_from_slice(key.as_bytes()).expect("HMAC can accept any key length");

	mac.update(base_string.as_bytes());

	STANDARD.encode(mac.finalize().into_bytes())
}

/// Signs a canonicalized request with the consumer and token secrets.
pub fn sign(
	method: &str,
	base_url: &str,
	parameters: &str,
	consumer_secret: &str,
	token_secret: &str,
) -> String {
	let base_string = signature_base_string(method, base_url, parameters);

	#[cfg(feature = "tracing")]
	tracing::debug!(base_string = %base_string, "computed OAuth 1.0a signature base string");

	hmac_sha1(&signing_key(consumer_secret, token_secret), &base_string)
}
