//! Response shape returned by transports and the field-reading capability the bearer issuer
//! consumes.

// crates.io
use serde_json::{Map, Value};
// self
use crate::{_prelude::*, error::ResponseError};

const BODY_PREVIEW_LEN: usize = 256;

/// Raw HTTP response captured by a [`Transport`](crate::http::Transport).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
	/// HTTP status code.
	pub status: u16,
	/// Response headers in wire order.
	pub headers: Vec<(String, String)>,
	/// Decoded (decompressed) body bytes.
	pub body: Vec<u8>,
}
impl Response {
	/// Builds a `200 OK` response with the given body.
	pub fn ok(body: impl Into<Vec<u8>>) -> Self {
		Self { status: 200, headers: Vec::new(), body: body.into() }
	}

	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// First header value matching `name`, compared case-insensitively.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.iter().find(|(k, _)| k.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
	}

	/// Rejects non-2xx responses, keeping a short body preview for diagnostics.
	pub fn error_for_status(&self) -> Result<(), ResponseError> {
		if self.is_success() {
			return Ok(());
		}

		let preview = String::from_utf8_lossy(&self.body);
		let body_preview = preview.chars().take(BODY_PREVIEW_LEN).collect();

		Err(ResponseError::Status { status: self.status, body_preview })
	}
}

/// Reads named fields out of a [`Response`].
///
/// Implementations decide the body format. Each call reads one field so callers can stop
/// after the first field that fails validation.
pub trait ResponseParser
where
	Self: 'static + Send + Sync,
{
	/// Returns the string value of `name`, failing when the field is absent.
	fn field(&self, response: &Response, name: &str) -> Result<String, ResponseError>;
}

/// Parser for JSON object bodies.
///
/// String values are returned as-is; other scalars use their JSON rendering.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonResponseParser;
impl JsonResponseParser {
	fn object(body: &[u8]) -> Result<Map<String, Value>, ResponseError> {
		let mut de = serde_json::Deserializer::from_slice(body);

		serde_path_to_error::deserialize(&mut de).map_err(|source| ResponseError::Parse { source })
	}
}
impl ResponseParser for JsonResponseParser {
	fn field(&self, response: &Response, name: &str) -> Result<String, ResponseError> {
		let object = Self::object(&response.body)?;

		match object.get(name) {
			Some(Value::String(value)) => Ok(value.clone()),
			Some(Value::Null) | None => Err(ResponseError::MissingField { name: name.into() }),
			Some(other) => Ok(other.to_string()),
		}
	}
}
