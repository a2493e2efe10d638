//! Outbound request model shared by the OAuth 1.0a signer and the bearer issuer.
//!
//! A [`Request`] carries everything a transport needs to put the call on the wire. Signing
//! only ever writes [`Request::authorization`]; every other field belongs to the caller.

// self
use crate::{_prelude::*, encode};

/// Content type used for form-encoded request bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Mutable description of an HTTP request awaiting authorization.
///
/// Query, form, and header pairs keep insertion order for the wire, but their order has no
/// effect on the OAuth 1.0a signature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
	/// HTTP method, e.g. `GET`; the signer upper-cases it for the base string.
	pub method: String,
	/// Target scheme without `://`, e.g. `https`.
	pub protocol: String,
	/// Target host, including an explicit port when one is needed.
	///
	/// Signed verbatim, while [`Request::url`] lowercases it. Pass a lowercase host so the
	/// signed and sent forms match.
	pub host: String,
	/// URI path, starting with `/`, without a query string.
	///
	/// Signed verbatim, while [`Request::url`] percent-escapes spaces and non-ASCII bytes. Pass
	/// an already-escaped path so the signed and sent forms match.
	pub uri: String,
	/// Query-string parameters.
	pub queries: Vec<(String, String)>,
	/// Form body parameters.
	pub form: Vec<(String, String)>,
	/// Additional headers.
	pub headers: Vec<(String, String)>,
	/// `Content-Type` sent with a form body.
	pub content_type: String,
	/// `Authorization` header value; empty until a signer writes it.
	pub authorization: String,
}
impl Request {
	/// Creates an HTTPS request with no parameters or authorization.
	pub fn new(method: impl Into<String>, host: impl Into<String>, uri: impl Into<String>) -> Self {
		Self {
			method: method.into(),
			host: host.into(),
			uri: uri.into(),
			..Default::default()
		}
	}

	/// Shorthand for [`Request::new`] with `GET`.
	pub fn get(host: impl Into<String>, uri: impl Into<String>) -> Self {
		Self::new("GET", host, uri)
	}

	/// Shorthand for [`Request::new`] with `POST`.
	pub fn post(host: impl Into<String>, uri: impl Into<String>) -> Self {
		Self::new("POST", host, uri)
	}

	/// Overrides the scheme.
	pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
		self.protocol = protocol.into();

		self
	}

	/// Appends a query-string parameter.
	pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.queries.push((key.into(), value.into()));

		self
	}

	/// Appends a form body parameter.
	pub fn with_form(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.form.push((key.into(), value.into()));

		self
	}

	/// Appends a header.
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));

		self
	}

	/// Overrides the content type.
	pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
		self.content_type = content_type.into();

		self
	}

	/// `protocol://host/uri`, never including the query string.
	pub fn base_url(&self) -> String {
		format!("{}://{}{}", self.protocol, self.host, self.uri)
	}

	/// Percent-encoded query string in insertion order, without the leading `?`.
	pub fn query_string(&self) -> String {
		encode::encode_pairs(self.queries.iter().map(|(k, v)| (k.as_str(), v.as_str())))
	}

	/// Percent-encoded form body in insertion order.
	///
	/// Uses the same encoder as the signature so the server decodes exactly the values that
	/// were signed.
	pub fn form_body(&self) -> String {
		encode::encode_pairs(self.form.iter().map(|(k, v)| (k.as_str(), v.as_str())))
	}

	/// Full target URL including the encoded query string.
	///
	/// The host and path go through URL normalization; see [`Request::host`] and
	/// [`Request::uri`].
	pub fn url(&self) -> Result<Url, url::ParseError> {
		let mut raw = self.base_url();

		if !self.queries.is_empty() {
			raw.push('?');
			raw.push_str(&self.query_string());
		}

		Url::parse(&raw)
	}
}
impl Default for Request {
	fn default() -> Self {
		Self {
			method: "GET".into(),
			protocol: "https".into(),
			host: String::new(),
			uri: "/".into(),
			queries: Vec::new(),
			form: Vec::new(),
			headers: Vec::new(),
			content_type: FORM_CONTENT_TYPE.into(),
			authorization: String::new(),
		}
	}
}
