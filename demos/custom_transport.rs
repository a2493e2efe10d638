//! Demonstrates plugging a non-reqwest transport and a custom response parser into the bearer
//! issuer.
//!
//! 1. Implement [`Transport`] so the issuer can hand over the fixed-shape token request.
//! 2. Implement [`ResponseParser`] for whatever body format the provider speaks.
//! 3. Pass both to [`BearerIssuer::with_transport`] and inspect the resulting [`Error`].

// std
use std::collections::HashMap;
// crates.io
use color_eyre::Result;
// self
use oauth_signer::{
	bearer::BearerIssuer,
	error::{Error, ResponseError, TransportError},
	http::{Transport, TransportFuture},
	request::Request,
	response::{Response, ResponseParser},
};

/// Answers every request from memory with a `key=value` body.
struct CannedTransport {
	body: &'static str,
}
impl Transport for CannedTransport {
	fn send<'a>(&'a self, request: &'a Request) -> TransportFuture<'a> {
		Box::pin(async move {
			if !request.authorization.starts_with("Basic ") {
				return Err(TransportError::invalid_request("missing Basic credentials"));
			}

			println!("{} {}?{}", request.method, request.base_url(), request.query_string());

			Ok(Response::ok(self.body))
		})
	}
}

/// Reads fields from an `application/x-www-form-urlencoded` style body.
struct FormParser;
impl ResponseParser for FormParser {
	fn field(&self, response: &Response, name: &str) -> Result<String, ResponseError> {
		let body = String::from_utf8_lossy(&response.body);
		let fields = body
			.split('&')
			.filter_map(|pair| pair.split_once('='))
			.collect::<HashMap<_, _>>();

		fields
			.get(name)
			.map(|value| value.to_string())
			.ok_or_else(|| ResponseError::MissingField { name: name.into() })
	}
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let issuer = <BearerIssuer<CannedTransport, FormParser>>::with_transport(
		CannedTransport { body: "token_type=bearer&access_token=canned-access" },
		FormParser,
	);
	let token = issuer.issue_bearer_token("demo-consumer-key", "demo-consumer-secret").await?;

	println!("Canned transport issued token of length {}.", token.expose().len());

	let rejecting = <BearerIssuer<CannedTransport, FormParser>>::with_transport(
		CannedTransport { body: "token_type=mac&access_token=never-read" },
		FormParser,
	);

	match rejecting.issue_bearer_token("demo-consumer-key", "demo-consumer-secret").await {
		Err(Error::AuthProtocol { token_type }) =>
			println!("Provider returned unsupported token type `{token_type}`."),
		other => println!("Unexpected outcome: {other:?}."),
	}

	Ok(())
}
