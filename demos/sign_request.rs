//! Demonstrates signing a user-context request with OAuth 1.0a and sending it through the
//! default reqwest transport to a local mock server.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use oauth_signer::{
	auth::Credentials,
	http::{ReqwestTransport, Transport},
	oauth1::Signer,
	request::Request,
	url::Url,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let timeline_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/1.1/statuses/user_timeline.json")
				.query_param("screen_name", "hack_ink")
				.header_exists("authorization");
			then.status(200).header("content-type", "application/json").body("[]");
		})
		.await;
	let base = Url::parse(&server.url("/1.1/statuses/user_timeline.json"))?;
	let host = format!("{}:{}", base.host_str().unwrap_or("127.0.0.1"), server.port());
	let signer = Signer::new(Credentials::new(
		"demo-consumer-key",
		"demo-consumer-secret",
		"demo-user-token",
		"demo-token-secret",
	));
	let mut request = Request::get(host, base.path())
		.with_protocol(base.scheme())
		.with_query("screen_name", "hack_ink");

	signer.authorize(&mut request);

	println!("Authorization: {}", request.authorization);

	let transport = ReqwestTransport::with_client(
		oauth_signer::reqwest::Client::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()?,
	);
	let response = transport.send(&request).await?;

	timeline_mock.assert_async().await;

	println!("Mock API answered HTTP {} with {} bytes.", response.status, response.body.len());

	Ok(())
}
