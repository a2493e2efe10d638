#![cfg(feature = "reqwest")]

mod common;

// crates.io
use httpmock::prelude::*;
// self
use common::*;
use oauth_signer::{
	auth::Credentials,
	http::Transport,
	oauth1::{FixedNonce, FixedTimestamp, Signer},
};

#[tokio::test]
async fn signed_request_reaches_the_wire_unchanged() {
	let server = MockServer::start_async().await;
	let signer = Signer::with_sources(
		Credentials::new("ck", "cs", "ut", "ts"),
		FixedNonce::new("N1"),
		FixedTimestamp::new("1000000000"),
	);
	let mut request = mock_request(&server, "GET", "/1/statuses").with_query("screen_name", "a b");

	signer.authorize(&mut request);

	let expected_authorization = request.authorization.clone();
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/1/statuses")
				.query_param("screen_name", "a b")
				.header("authorization", expected_authorization.as_str());
			then.status(200).body("[]");
		})
		.await;
	let response = test_reqwest_transport()
		.send(&request)
		.await
		.expect("Signed request should be delivered.");

	mock.assert_async().await;

	assert!(response.is_success());
	assert_eq!(response.body, b"[]");
	assert!(expected_authorization.starts_with("OAuth oauth_consumer_key=\"ck\", oauth_nonce=\"N1\""));
}
