//! Transport capability used by the bearer issuer and by callers sending signed requests.
//!
//! The crate never opens sockets itself. A [`Transport`] turns a [`Request`] into a
//! [`Response`]; timeouts, retries, and cancellation are the transport's business. The
//! reqwest-backed [`ReqwestTransport`] ships behind the default `reqwest` feature.

// self
use crate::{_prelude::*, error::TransportError, request::Request, response::Response};
#[cfg(feature = "reqwest")]
use {
	crate::error::ConfigError,
	reqwest::{
		Method, Request as WireRequest,
		header::{AUTHORIZATION, CONTENT_TYPE},
		redirect::Policy,
	},
};

/// Boxed future returned by [`Transport::send`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<Response, TransportError>> + 'a + Send>>;

/// Sends fully-formed requests and returns the raw response.
///
/// Implementations must be `Send + Sync + 'static` so a single transport can be shared behind
/// an `Arc` by several issuers, and the returned future must be `Send` so callers can move it
/// across executor threads.
pub trait Transport
where
	Self: 'static + Send + Sync,
{
	/// Sends `request` exactly as described, including its `authorization` value.
	fn send<'a>(&'a self, request: &'a Request) -> TransportFuture<'a>;
}

/// Thin wrapper around [`ReqwestClient`].
///
/// Query strings and form bodies are written with the crate's percent-encoder so the bytes on
/// the wire match the bytes that were signed. [`ReqwestTransport::new`] disables redirect
/// following; token endpoints answer directly and a redirect would replay credentials to
/// another origin.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Builds a client that never follows redirects.
	pub fn new() -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder().redirect(Policy::none()).build()?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Converts `request` into a reqwest request without sending it.
	pub fn build(&self, request: &Request) -> Result<WireRequest, TransportError> {
		let method = Method::from_bytes(request.method.to_ascii_uppercase().as_bytes())
			.map_err(TransportError::invalid_request)?;
		let url = request.url().map_err(TransportError::invalid_request)?;
		let mut builder = self.0.request(method, url);

		for (name, value) in &request.headers {
			builder = builder.header(name.as_str(), value.as_str());
		}

		if !request.authorization.is_empty() {
			builder = builder.header(AUTHORIZATION, request.authorization.as_str());
		}
		if !request.form.is_empty() {
			builder = builder
				.header(CONTENT_TYPE, request.content_type.as_str())
				.body(request.form_body());
		}

		Ok(builder.build()?)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Transport for ReqwestTransport {
	fn send<'a>(&'a self, request: &'a Request) -> TransportFuture<'a> {
		Box::pin(async move {
			let wire = self.build(request)?;
			let response = self.0.execute(wire).await?;
			let status = response.status().as_u16();
			let headers = response
				.headers()
				.iter()
				.map(|(name, value)| {
					(name.as_str().to_owned(), String::from_utf8_lossy(value.as_bytes()).into_owned())
				})
				.collect();
			let body = response.bytes().await?.to_vec();

			Ok(Response { status, headers, body })
		})
	}
}
