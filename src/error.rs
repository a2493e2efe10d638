//! Crate-level error types shared by the bearer issuer, transports, and parsers.
//!
//! The OAuth 1.0a signing path is total over its inputs and never produces these errors;
//! only the bearer issuance round-trip can fail.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn StdError + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, request construction).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// The token endpoint response could not be read.
	#[error(transparent)]
	Response(#[from] ResponseError),

	/// Token endpoint issued something other than a bearer token.
	#[error("Token endpoint returned token_type `{token_type}`, expected `bearer`.")]
	AuthProtocol {
		/// The `token_type` value the provider returned.
		token_type: String,
	},
}

/// Configuration and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Token endpoint URL cannot be parsed.
	#[error("Token endpoint URL is invalid.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Token endpoint must use HTTPS.
	#[error("The token endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// Token endpoint must not carry its own query string.
	#[error("The token endpoint must not contain a query string: {url}.")]
	EndpointHasQuery {
		/// Endpoint URL that failed validation.
		url: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO, request construction).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while sending the request.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while sending the request.")]
	Io(#[from] std::io::Error),
	/// The request cannot be expressed on the wire.
	#[error("Request cannot be sent: {reason}.")]
	InvalidRequest {
		/// What was wrong with the request.
		reason: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Builds an [`TransportError::InvalidRequest`] from any displayable reason.
	pub fn invalid_request(reason: impl Display) -> Self {
		Self::InvalidRequest { reason: reason.to_string() }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Failures raised while reading structured fields out of a response.
#[derive(Debug, ThisError)]
pub enum ResponseError {
	/// Endpoint answered with a non-success HTTP status.
	#[error("Endpoint returned HTTP {status}: {body_preview}.")]
	Status {
		/// HTTP status code.
		status: u16,
		/// Leading part of the response body, lossily decoded.
		body_preview: String,
	},
	/// Body is not a JSON object.
	#[error("Response body is malformed JSON.")]
	Parse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Requested field is absent.
	#[error("Response is missing the `{name}` field.")]
	MissingField {
		/// Field name that was requested.
		name: String,
	},
}
