//! OAuth 2.0 application-only bearer token issuance.
//!
//! The issuer sends one fixed-shape `client_credentials` request to the provider's token
//! endpoint, authenticating with HTTP Basic over the percent-encoded consumer key and
//! secret, and returns the issued access token. It shares the percent-encoder and the
//! [`Request`]/[`Response`](crate::response::Response) shapes with the OAuth 1.0a signer but
//! never touches the signature path. Issued tokens are not cached; callers keep them for as
//! long as they need.

pub mod endpoint;

pub use endpoint::*;

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
// self
use crate::{
	_prelude::*,
	auth::Secret,
	encode::encode,
	ext::RequestSigner,
	http::Transport,
	obs::{self, FlowKind, FlowOutcome, FlowSpan, FlowTarget},
	request::{FORM_CONTENT_TYPE, Request},
	response::{JsonResponseParser, ResponseParser},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

/// The only `token_type` the issuer accepts.
pub const BEARER_TOKEN_TYPE: &str = "bearer";

const TOKEN_TYPE_FIELD: &str = "token_type";
const ACCESS_TOKEN_FIELD: &str = "access_token";

#[cfg(feature = "reqwest")]
/// Issuer specialized for the crate's default reqwest transport and JSON parser.
pub type ReqwestBearerIssuer = BearerIssuer<ReqwestTransport, JsonResponseParser>;

/// Application-only access token returned by the provider.
///
/// The value is kept exactly as issued and redacted from `Debug`/`Display` output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BearerToken(Secret);
impl BearerToken {
	/// Wraps an issued access token.
	pub fn new(value: impl Into<String>) -> Self {
		Self(Secret::new(value))
	}

	/// Returns the raw token. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		self.0.expose()
	}
}
impl RequestSigner for BearerToken {
	fn sign_request(&self, request: &mut Request) {
		request.authorization = format!("Bearer {}", self.expose());
	}
}
impl Debug for BearerToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("BearerToken").field(&"<redacted>").finish()
	}
}
impl Display for BearerToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// `base64(encode(consumer_key) ":" encode(consumer_secret))`, the HTTP Basic credential.
pub fn basic_credentials(consumer_key: &str, consumer_secret: &str) -> String {
	let mut pair = encode(consumer_key);

	pair.push(':');
	pair.push_str(&encode(consumer_secret));

	STANDARD.encode(pair)
}

/// Builds the token issuance request for `endpoint`.
///
/// The shape is a contract with the provider: `POST`, `Authorization: Basic ...`, a form
/// content type with `;charset=UTF-8`, `grant_type=client_credentials` in the body,
/// `include_entities=true` in the query, and `Accept-Encoding: gzip`.
pub fn bearer_request(
	endpoint: &TokenEndpoint,
	consumer_key: &str,
	consumer_secret: &str,
) -> Request {
	let mut request = Request::post(endpoint.host(), endpoint.path())
		.with_protocol(endpoint.protocol())
		.with_content_type(format!("{FORM_CONTENT_TYPE};charset=UTF-8"))
		.with_form("grant_type", "client_credentials")
		.with_query("include_entities", "true")
		.with_header("Accept-Encoding", "gzip");

	request.authorization = format!("Basic {}", basic_credentials(consumer_key, consumer_secret));

	request
}

/// Performs the one-shot OAuth 2.0 application-only token exchange.
///
/// The issuer owns a [`Transport`] for the round-trip and a [`ResponseParser`] for reading
/// `token_type` and `access_token`. It keeps no state between calls.
pub struct BearerIssuer<T, P = JsonResponseParser>
where
	T: ?Sized + Transport,
	P: ?Sized + ResponseParser,
{
	/// Transport used for the token request.
	pub transport: Arc<T>,
	/// Parser used to read response fields.
	pub parser: Arc<P>,
	/// Token issuance endpoint.
	pub endpoint: TokenEndpoint,
}
impl<T, P> BearerIssuer<T, P>
where
	T: ?Sized + Transport,
	P: ?Sized + ResponseParser,
{
	/// Creates an issuer for the default endpoint using the given transport and parser.
	pub fn with_transport(transport: impl Into<Arc<T>>, parser: impl Into<Arc<P>>) -> Self {
		Self {
			transport: transport.into(),
			parser: parser.into(),
			endpoint: TokenEndpoint::default(),
		}
	}

	/// Overrides the token endpoint.
	pub fn with_endpoint(mut self, endpoint: TokenEndpoint) -> Self {
		self.endpoint = endpoint;

		self
	}

	/// Exchanges the consumer key and secret for an application-only bearer token.
	///
	/// Fails with [`Error::AuthProtocol`] when the response's `token_type` is not exactly
	/// `bearer`; in that case `access_token` is never read. Transport and parsing failures
	/// propagate unchanged.
	pub async fn issue_bearer_token(
		&self,
		consumer_key: &str,
		consumer_secret: &str,
	) -> Result<BearerToken> {
		let request = bearer_request(&self.endpoint, consumer_key, consumer_secret);
		let span = FlowSpan::new(
			FlowTarget::new(FlowKind::BearerIssuance, &request),
			"issue_bearer_token",
		);

		obs::record_flow_outcome(span.target(), FlowOutcome::Attempt);

		let result: Result<BearerToken> = span
			.instrument(async {
				let response = self.transport.send(&request).await?;

				response.error_for_status()?;

				let token_type = self.parser.field(&response, TOKEN_TYPE_FIELD)?;

				if token_type != BEARER_TOKEN_TYPE {
					return Err(Error::AuthProtocol { token_type });
				}

				let access_token = self.parser.field(&response, ACCESS_TOKEN_FIELD)?;

				Ok(BearerToken::new(access_token))
			})
			.await;

		match &result {
			Ok(_) => obs::record_flow_outcome(span.target(), FlowOutcome::Success),
			Err(_) => obs::record_flow_outcome(span.target(), FlowOutcome::Failure),
		}

		result
	}
}
#[cfg(feature = "reqwest")]
impl BearerIssuer<ReqwestTransport, JsonResponseParser> {
	/// Creates an issuer backed by a fresh reqwest transport that does not follow redirects.
	pub fn new() -> Result<Self> {
		Ok(Self::with_transport(ReqwestTransport::new()?, JsonResponseParser))
	}
}
impl<T, P> Debug for BearerIssuer<T, P>
where
	T: ?Sized + Transport,
	P: ?Sized + ResponseParser,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("BearerIssuer").field("endpoint", &self.endpoint).finish()
	}
}
