//! Demonstrates exchanging consumer credentials for an application-only bearer token and using
//! it to authorize a follow-up request.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use oauth_signer::{
	bearer::{BearerIssuer, TokenEndpoint},
	ext::RequestSigner,
	http::ReqwestTransport,
	request::Request,
	reqwest::Client,
	response::JsonResponseParser,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth2/token")
				.query_param("include_entities", "true")
				.body("grant_type=client_credentials");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"token_type\":\"bearer\",\"access_token\":\"demo-access\"}");
		})
		.await;
	let endpoint =
		TokenEndpoint::parse(&server.url("/oauth2/token").replacen("http://", "https://", 1))?;
	let transport = ReqwestTransport::with_client(
		Client::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()?,
	);
	let issuer = <BearerIssuer<ReqwestTransport, JsonResponseParser>>::with_transport(
		transport,
		JsonResponseParser,
	)
	.with_endpoint(endpoint);
	let token = issuer.issue_bearer_token("demo-consumer-key", "demo-consumer-secret").await?;

	token_mock.assert_async().await;

	println!("Issued token (redacted): {token:?}.");

	let mut request =
		Request::get("api.twitter.com", "/1.1/search/tweets.json").with_query("q", "rust");

	token.sign_request(&mut request);

	println!("Follow-up request carries `{}`.", request.authorization);

	Ok(())
}
