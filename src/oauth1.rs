//! OAuth 1.0a user-context request signing.
//!
//! [`Signer`] runs the whole flow for one request: draw a nonce and timestamp, canonicalize
//! the request parameters, compute the HMAC-SHA1 signature, and write the `OAuth` header into
//! [`Request::authorization`]. Every step is a pure function over its inputs except the two
//! injectable sources, so signing never fails and needs no locking.

pub mod canonical;
pub mod header;
pub mod nonce;
pub mod signature;

pub use canonical::*;
pub use header::*;
pub use nonce::*;
pub use signature::*;

// self
use crate::{
	_prelude::*,
	auth::Credentials,
	ext::RequestSigner,
	obs::{self, FlowKind, FlowOutcome, FlowSpan, FlowTarget},
	request::Request,
};

/// Protocol version sent as `oauth_version`.
pub const OAUTH_VERSION_1_0: &str = "1.0";

pub(crate) const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
pub(crate) const OAUTH_NONCE: &str = "oauth_nonce";
pub(crate) const OAUTH_SIGNATURE: &str = "oauth_signature";
pub(crate) const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub(crate) const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
pub(crate) const OAUTH_TOKEN: &str = "oauth_token";
pub(crate) const OAUTH_VERSION: &str = "oauth_version";

/// Supported `oauth_signature_method` values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignatureMethod {
	/// HMAC over SHA-1, keyed with `consumer_secret&token_secret`.
	#[default]
	#[serde(rename = "HMAC-SHA1")]
	HmacSha1,
}
impl SignatureMethod {
	/// Returns the wire label.
	pub const fn as_str(self) -> &'static str {
		match self {
			SignatureMethod::HmacSha1 => "HMAC-SHA1",
		}
	}
}
impl Display for SignatureMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Per-call protocol values; built fresh for every signature and never reused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningContext {
	/// `oauth_version`, always `1.0`.
	pub version: &'static str,
	/// `oauth_signature_method`.
	pub signature_method: SignatureMethod,
	/// `oauth_nonce`.
	pub nonce: String,
	/// `oauth_timestamp`.
	pub timestamp: String,
}
impl SigningContext {
	/// Creates a context from an explicit nonce and timestamp.
	pub fn new(nonce: impl Into<String>, timestamp: impl Into<String>) -> Self {
		Self {
			version: OAUTH_VERSION_1_0,
			signature_method: SignatureMethod::HmacSha1,
			nonce: nonce.into(),
			timestamp: timestamp.into(),
		}
	}

	/// Draws a fresh nonce and timestamp from the given sources.
	pub fn generate<N, T>(nonces: &N, clock: &T) -> Self
	where
		N: ?Sized + NonceSource,
		T: ?Sized + TimestampSource,
	{
		Self::new(nonces.nonce(), clock.timestamp())
	}
}

/// Signs requests on behalf of one user.
///
/// The nonce and timestamp sources default to [`RandomNonce`] and [`SystemClock`]; swap them
/// with [`Signer::with_sources`] to get reproducible signatures.
#[derive(Clone, Debug)]
pub struct Signer<N = RandomNonce, T = SystemClock> {
	credentials: Credentials,
	nonces: N,
	clock: T,
}
impl Signer {
	/// Creates a signer that uses the system CSPRNG and wall clock.
	pub fn new(credentials: Credentials) -> Self {
		Self::with_sources(credentials, RandomNonce, SystemClock)
	}
}
impl<N, T> Signer<N, T>
where
	N: NonceSource,
	T: TimestampSource,
{
	/// Creates a signer with caller-supplied nonce and timestamp sources.
	pub fn with_sources(credentials: Credentials, nonces: N, clock: T) -> Self {
		Self { credentials, nonces, clock }
	}

	/// Credentials this signer acts for.
	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	/// Signs `request` with a freshly generated context and writes its `Authorization` value.
	pub fn authorize(&self, request: &mut Request) {
		let context = SigningContext::generate(&self.nonces, &self.clock);

		self.authorize_with_context(request, &context);
	}

	/// Signs `request` with an explicit context and writes its `Authorization` value.
	pub fn authorize_with_context(&self, request: &mut Request, context: &SigningContext) {
		write_authorization(request, &self.credentials, context);
	}

	/// Computes the base64 signature for `request` without modifying it.
	pub fn sign_with_context(&self, request: &Request, context: &SigningContext) -> String {
		compute_signature(request, &self.credentials, context)
	}
}
impl<N, T> RequestSigner for Signer<N, T>
where
	N: NonceSource,
	T: TimestampSource,
{
	fn sign_request(&self, request: &mut Request) {
		self.authorize(request);
	}
}

/// Adds an OAuth 1.0a `Authorization` value to `request` using a random nonce and the current
/// time.
pub fn authorize(request: &mut Request, credentials: &Credentials) {
	let context = SigningContext::generate(&RandomNonce, &SystemClock);

	authorize_with_context(request, credentials, &context);
}

/// Adds an OAuth 1.0a `Authorization` value to `request` for a fixed context.
pub fn authorize_with_context(
	request: &mut Request,
	credentials: &Credentials,
	context: &SigningContext,
) {
	write_authorization(request, credentials, context);
}

fn compute_signature(
	request: &Request,
	credentials: &Credentials,
	context: &SigningContext,
) -> String {
	let CanonicalRequest { base_url, parameters } = canonicalize(request, credentials, context);

	sign(
		&request.method,
		&base_url,
		&parameters,
		credentials.consumer_secret().expose(),
		credentials.token_secret().expose(),
	)
}

fn write_authorization(
	request: &mut Request,
	credentials: &Credentials,
	context: &SigningContext,
) {
	let guard =
		FlowSpan::new(FlowTarget::new(FlowKind::UserSignature, request), "authorize").entered();

	obs::record_flow_outcome(guard.target(), FlowOutcome::Attempt);

	let signature = compute_signature(request, credentials, context);

	OAuthHeader {
		consumer_key: credentials.consumer_key(),
		nonce: &context.nonce,
		signature: &signature,
		signature_method: context.signature_method.as_str(),
		timestamp: &context.timestamp,
		token: credentials.user_token(),
		version: context.version,
	}
	.write_to(request);

	obs::record_flow_outcome(guard.target(), FlowOutcome::Success);
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn golden_signer() -> Signer<FixedNonce, FixedTimestamp> {
		Signer::with_sources(
			Credentials::new("ck", "cs", "ut", "ts"),
			FixedNonce::new("N1"),
			FixedTimestamp::new("1000000000"),
		)
	}

	fn golden_request() -> Request {
		Request::get("api.example.com", "/1/statuses").with_query("screen_name", "abc")
	}

	#[test]
	fn golden_vector_signature() {
		let signer = golden_signer();
		let context = SigningContext::new("N1", "1000000000");

		assert_eq!(
			signer.sign_with_context(&golden_request(), &context),
			"iTsf5lotIeA9CP9RtyjlZayfqxA="
		);
	}

	#[test]
	fn authorize_writes_the_golden_header() {
		let mut request = golden_request();

		golden_signer().authorize(&mut request);

		assert_eq!(
			request.authorization,
			"OAuth oauth_consumer_key=\"ck\", oauth_nonce=\"N1\", \
			 oauth_signature=\"iTsf5lotIeA9CP9RtyjlZayfqxA%3D\", \
			 oauth_signature_method=\"HMAC-SHA1\", oauth_timestamp=\"1000000000\", \
			 oauth_token=\"ut\", oauth_version=\"1.0\""
		);
		assert_eq!(request.queries, golden_request().queries);
	}

	#[test]
	fn method_case_does_not_matter() {
		let signer = golden_signer();
		let context = SigningContext::new("N1", "1000000000");
		let lower = Request { method: "get".into(), ..golden_request() };

		assert_eq!(
			signer.sign_with_context(&lower, &context),
			signer.sign_with_context(&golden_request(), &context)
		);
	}

	#[test]
	fn random_sources_produce_fresh_headers() {
		let credentials = Credentials::new("ck", "cs", "ut", "ts");
		let mut first = golden_request();
		let mut second = golden_request();

		authorize(&mut first, &credentials);
		authorize(&mut second, &credentials);

		assert!(first.authorization.starts_with("OAuth oauth_consumer_key=\"ck\", oauth_nonce=\""));
		assert_ne!(first.authorization, second.authorization);
	}

	#[test]
	fn free_function_matches_signer() {
		let credentials = Credentials::new("ck", "cs", "ut", "ts");
		let context = SigningContext::new("N1", "1000000000");
		let mut via_fn = golden_request();
		let mut via_signer = golden_request();

		authorize_with_context(&mut via_fn, &credentials, &context);
		golden_signer().sign_request(&mut via_signer);

		assert_eq!(via_fn.authorization, via_signer.authorization);
	}

	#[test]
	fn free_function_signs_with_borrowed_credentials() {
		let credentials = Credentials::new("ck", "cs", "ut", "ts");
		let context = SigningContext::new("N1", "1000000000");
		let mut first = golden_request();
		let mut second = golden_request();

		authorize_with_context(&mut first, &credentials, &context);
		authorize_with_context(&mut second, &credentials, &context);

		assert_eq!(first.authorization, second.authorization);
		assert!(
			first.authorization.contains("oauth_signature=\"iTsf5lotIeA9CP9RtyjlZayfqxA%3D\"")
		);
		assert_eq!(credentials.consumer_key(), "ck");
	}

	#[test]
	fn empty_secrets_are_accepted() {
		let signer = Signer::with_sources(
			Credentials::new("ck", "", "ut", ""),
			FixedNonce::new("N1"),
			FixedTimestamp::new("1000000000"),
		);
		let mut request = golden_request();

		signer.authorize(&mut request);

		assert!(request.authorization.contains("oauth_signature=\""));
	}

	#[test]
	fn signature_method_serializes_as_wire_label() {
		assert_eq!(SignatureMethod::HmacSha1.to_string(), "HMAC-SHA1");
		assert_eq!(
			serde_json::to_string(&SignatureMethod::HmacSha1)
				.expect("Signature method should serialize."),
			"\"HMAC-SHA1\""
		);
	}
}
