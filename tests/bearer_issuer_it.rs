#![cfg(feature = "reqwest")]

mod common;

// crates.io
use httpmock::prelude::*;
// self
use common::*;
use oauth_signer::{
	error::{Error, ResponseError},
	ext::RequestSigner,
	request::Request,
};

const CONSUMER_KEY: &str = "ck";
const CONSUMER_SECRET: &str = "cs";

#[tokio::test]
async fn issue_bearer_token_sends_the_documented_request() {
	let server = MockServer::start_async().await;
	let issuer = build_reqwest_test_issuer(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth2/token")
				.query_param("include_entities", "true")
				.header("authorization", "Basic Y2s6Y3M=")
				.header("content-type", "application/x-www-form-urlencoded;charset=UTF-8")
				.header("accept-encoding", "gzip")
				.body("grant_type=client_credentials");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"token_type\":\"bearer\",\"access_token\":\"ABC123\"}");
		})
		.await;
	let token = issuer
		.issue_bearer_token(CONSUMER_KEY, CONSUMER_SECRET)
		.await
		.expect("Bearer token should be issued.");

	mock.assert_async().await;

	assert_eq!(token.expose(), "ABC123");

	let mut request = Request::get("api.example.com", "/1.1/search/tweets.json");

	token.sign_request(&mut request);

	assert_eq!(request.authorization, "Bearer ABC123");
}

#[tokio::test]
async fn non_bearer_token_type_is_rejected() {
	let server = MockServer::start_async().await;
	let issuer = build_reqwest_test_issuer(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth2/token");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"token_type\":\"mac\",\"access_token\":\"ABC123\"}");
		})
		.await;
	let err = issuer
		.issue_bearer_token(CONSUMER_KEY, CONSUMER_SECRET)
		.await
		.expect_err("A mac token must not be accepted.");

	mock.assert_async().await;

	assert!(matches!(err, Error::AuthProtocol { ref token_type } if token_type == "mac"));
}

#[tokio::test]
async fn error_status_surfaces_before_parsing() {
	let server = MockServer::start_async().await;
	let issuer = build_reqwest_test_issuer(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth2/token");
			then.status(403).body("{\"errors\":[{\"code\":99}]}");
		})
		.await;
	let err = issuer
		.issue_bearer_token(CONSUMER_KEY, CONSUMER_SECRET)
		.await
		.expect_err("Forbidden responses should fail.");

	mock.assert_async().await;

	assert!(matches!(err, Error::Response(ResponseError::Status { status: 403, .. })));
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
	let server = MockServer::start_async().await;
	let issuer = build_reqwest_test_issuer(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth2/token");
			then.status(200).body("not json");
		})
		.await;
	let err = issuer
		.issue_bearer_token(CONSUMER_KEY, CONSUMER_SECRET)
		.await
		.expect_err("Non-JSON bodies should fail.");

	mock.assert_async().await;

	assert!(matches!(err, Error::Response(ResponseError::Parse { .. })));
}
