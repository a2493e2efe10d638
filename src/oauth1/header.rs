//! `Authorization: OAuth ...` header rendering.

// self
use crate::{
	_prelude::*,
	encode::encode,
	oauth1::{
		OAUTH_CONSUMER_KEY, OAUTH_NONCE, OAUTH_SIGNATURE, OAUTH_SIGNATURE_METHOD, OAUTH_TIMESTAMP,
		OAUTH_TOKEN, OAUTH_VERSION,
	},
	request::Request,
};

/// Signed protocol parameters ready to be rendered into an `Authorization` header.
///
/// [`Display`] emits `OAuth ` followed by `name="value"` pairs separated by `, ` in a fixed
/// order: consumer key, nonce, signature, signature method, timestamp, token, version. Every
/// name and value is percent-encoded, so quotes and commas in values cannot break the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OAuthHeader<'a> {
	/// `oauth_consumer_key`.
	pub consumer_key: &'a str,
	/// `oauth_nonce`.
	pub nonce: &'a str,
	/// `oauth_signature`, base64 and not yet percent-encoded.
	pub signature: &'a str,
	/// `oauth_signature_method`.
	pub signature_method: &'a str,
	/// `oauth_timestamp`.
	pub timestamp: &'a str,
	/// `oauth_token`.
	pub token: &'a str,
	/// `oauth_version`.
	pub version: &'a str,
}
impl OAuthHeader<'_> {
	fn fields(&self) -> [(&'static str, &str); 7] {
		[
			(OAUTH_CONSUMER_KEY, self.consumer_key),
			(OAUTH_NONCE, self.nonce),
			(OAUTH_SIGNATURE, self.signature),
			(OAUTH_SIGNATURE_METHOD, self.signature_method),
			(OAUTH_TIMESTAMP, self.timestamp),
			(OAUTH_TOKEN, self.token),
			(OAUTH_VERSION, self.version),
		]
	}

	/// Replaces `request.authorization` with the rendered header value.
	///
	/// This is the only field of the request the signing flow touches.
	pub fn write_to(&self, request: &mut Request) {
		request.authorization = self.to_string();
	}
}
impl Display for OAuthHeader<'_> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("OAuth ")?;

		for (idx, (name, value)) in self.fields().into_iter().enumerate() {
			if idx > 0 {
				f.write_str(", ")?;
			}

			write!(f, "{}=\"{}\"", encode(name), encode(value))?;
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn header<'a>(consumer_key: &'a str, signature: &'a str) -> OAuthHeader<'a> {
		OAuthHeader {
			consumer_key,
			nonce: "N1",
			signature,
			signature_method: "HMAC-SHA1",
			timestamp: "1000000000",
			token: "ut",
			version: "1.0",
		}
	}

	#[test]
	fn renders_fields_in_fixed_order() {
		assert_eq!(
			header("ck", "iTsf5lotIeA9CP9RtyjlZayfqxA=").to_string(),
			"OAuth oauth_consumer_key=\"ck\", oauth_nonce=\"N1\", \
			 oauth_signature=\"iTsf5lotIeA9CP9RtyjlZayfqxA%3D\", \
			 oauth_signature_method=\"HMAC-SHA1\", oauth_timestamp=\"1000000000\", \
			 oauth_token=\"ut\", oauth_version=\"1.0\""
		);
	}

	#[test]
	fn order_does_not_depend_on_values() {
		let rendered = header("zzz", "+/=").to_string();
		let names = rendered
			.trim_start_matches("OAuth ")
			.split(", ")
			.map(|pair| pair.split('=').next().unwrap_or_default())
			.collect::<Vec<_>>();

		assert_eq!(
			names,
			[
				"oauth_consumer_key",
				"oauth_nonce",
				"oauth_signature",
				"oauth_signature_method",
				"oauth_timestamp",
				"oauth_token",
				"oauth_version",
			]
		);
	}

	#[test]
	fn quotes_and_commas_are_encoded() {
		let rendered = header("a\"b, c", "x").to_string();

		assert!(rendered.contains("oauth_consumer_key=\"a%22b%2C%20c\""));
		assert_eq!(rendered.matches('"').count(), 14);
		assert_eq!(rendered.matches(", ").count(), 6);
	}

	#[test]
	fn write_to_replaces_previous_authorization_only() {
		let mut request = Request::get("api.example.com", "/1/statuses").with_query("a", "1");

		request.authorization = "Bearer stale".into();

		let before = request.clone();

		header("ck", "sig").write_to(&mut request);

		assert!(request.authorization.starts_with("OAuth oauth_consumer_key=\"ck\""));
		assert_eq!(Request { authorization: before.authorization.clone(), ..request }, before);
	}
}
