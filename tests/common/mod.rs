//! Helpers shared by the integration tests.

#![allow(dead_code)]

// crates.io
use httpmock::MockServer;
// self
use oauth_signer::{
	bearer::{BearerIssuer, TokenEndpoint},
	http::ReqwestTransport,
	request::Request,
	reqwest::Client,
	response::JsonResponseParser,
	url::Url,
};

/// Bearer issuer type alias used by reqwest-backed integration tests.
pub type ReqwestTestIssuer = BearerIssuer<ReqwestTransport, JsonResponseParser>;

/// Builds a reqwest transport that accepts the self-signed certificates produced by
/// `httpmock` during tests.
pub fn test_reqwest_transport() -> ReqwestTransport {
	let client = Client::builder()
		.danger_accept_invalid_certs(true)
		.danger_accept_invalid_hostnames(true)
		.build()
		.expect("Failed to build insecure Reqwest client for tests.");

	ReqwestTransport::with_client(client)
}

/// Returns the HTTPS form of the mock server URL for `path`.
pub fn https_url(server: &MockServer, path: &str) -> String {
	server.url(path).replacen("http://", "https://", 1)
}

/// Constructs a [`BearerIssuer`] that talks to the mock server's token endpoint.
pub fn build_reqwest_test_issuer(server: &MockServer) -> ReqwestTestIssuer {
	let endpoint = TokenEndpoint::parse(&https_url(server, "/oauth2/token"))
		.expect("Mock token endpoint should be a valid HTTPS URL.");

	BearerIssuer::with_transport(test_reqwest_transport(), JsonResponseParser)
		.with_endpoint(endpoint)
}

/// Builds a request aimed at `path` on the mock server.
pub fn mock_request(server: &MockServer, method: &str, path: &str) -> Request {
	let url = Url::parse(&server.url(path)).expect("Mock server URL should parse.");
	let host = match url.port() {
		Some(port) => format!("{}:{port}", url.host_str().unwrap_or_default()),
		None => url.host_str().unwrap_or_default().to_owned(),
	};

	Request::new(method, host, url.path()).with_protocol(url.scheme())
}
