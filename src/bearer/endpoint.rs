//! Validated token issuance endpoint.

// self
use crate::{_prelude::*, error::ConfigError};

/// Token issuance endpoint used when no other endpoint is configured.
pub const DEFAULT_TOKEN_ENDPOINT: &str = "https://api.twitter.com/oauth2/token";

/// HTTPS URL of the provider's OAuth 2.0 token issuance endpoint.
///
/// The URL must use HTTPS and must not carry a query string; the issuer adds its own
/// `include_entities` parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Url", into = "Url")]
pub struct TokenEndpoint(Url);
impl TokenEndpoint {
	/// Validates `url` as a token endpoint.
	pub fn new(url: Url) -> Result<Self, ConfigError> {
		if url.scheme() != "https" {
			return Err(ConfigError::InsecureEndpoint { url: url.to_string() });
		}
		if url.query().is_some() {
			return Err(ConfigError::EndpointHasQuery { url: url.to_string() });
		}

		Ok(Self(url))
	}

	/// Parses and validates a token endpoint URL.
	pub fn parse(raw: &str) -> Result<Self, ConfigError> {
		let url = Url::parse(raw).map_err(|source| ConfigError::InvalidEndpoint { source })?;

		Self::new(url)
	}

	/// Full endpoint URL.
	pub fn url(&self) -> &Url {
		&self.0
	}

	/// URL scheme, always `https`.
	pub fn protocol(&self) -> &str {
		self.0.scheme()
	}

	/// Host, with the port appended when it is not the scheme default.
	pub fn host(&self) -> String {
		let host = self.0.host_str().unwrap_or_default();

		match self.0.port() {
			Some(port) => format!("{host}:{port}"),
			None => host.to_owned(),
		}
	}

	/// Path component, e.g. `/oauth2/token`.
	pub fn path(&self) -> &str {
		self.0.path()
	}
}
impl Default for TokenEndpoint {
	fn default() -> Self {
		Self::parse(DEFAULT_TOKEN_ENDPOINT).expect("Default token endpoint must be valid.")
	}
}
impl TryFrom<Url> for TokenEndpoint {
	type Error = ConfigError;

	fn try_from(url: Url) -> Result<Self, Self::Error> {
		Self::new(url)
	}
}
impl From<TokenEndpoint> for Url {
	fn from(endpoint: TokenEndpoint) -> Self {
		endpoint.0
	}
}
impl Display for TokenEndpoint {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		Display::fmt(&self.0, f)
	}
}
