//! RFC 3986 percent-encoding used for every OAuth parameter, key, and header value.
//!
//! Only ASCII letters, digits, and `-`, `.`, `_`, `~` pass through. Every other byte
//! becomes `%XX` with uppercase hex digits. The encoder works on raw bytes and has no
//! notion of a source character set, so it never fails.

// crates.io
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, percent_encode};

/// Bytes that must be escaped: everything outside the RFC 3986 unreserved set.
const OAUTH_ENCODE_SET: &AsciiSet =
	&NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Percent-encodes `input` byte by byte.
///
/// Already-encoded input is encoded again (`%` becomes `%25`). The signing path relies on
/// that when it encodes the joined parameter string as one opaque value.
pub fn encode(input: impl AsRef<[u8]>) -> String {
	percent_encode(input.as_ref(), OAUTH_ENCODE_SET).to_string()
}

/// Reverses [`encode`], returning the raw bytes.
///
/// Malformed escapes (a `%` not followed by two hex digits) are kept verbatim.
pub fn decode(input: &str) -> Vec<u8> {
	percent_decode_str(input).collect()
}

/// Encodes a key/value pair as `encode(key)=encode(value)`.
pub fn encode_pair(key: &str, value: &str) -> String {
	let mut pair = encode(key);

	pair.push('=');
	pair.push_str(&encode(value));

	pair
}

/// Encodes and joins pairs with `&`, preserving the given order.
pub(crate) fn encode_pairs<'a, I>(pairs: I) -> String
where
	I: IntoIterator<Item = (&'a str, &'a str)>,
{
	pairs.into_iter().map(|(k, v)| encode_pair(k, v)).collect::<Vec<_>>().join("&")
}
