//! OAuth 1.0a user-context credentials.

// self
use crate::{_prelude::*, auth::Secret};

/// The four values that identify an application acting on behalf of a user.
///
/// Credentials are immutable once built; the signer only reads them. Empty secrets are
/// accepted because the protocol permits them.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
	consumer_key: String,
	consumer_secret: Secret,
	user_token: String,
	token_secret: Secret,
}
impl Credentials {
	/// Creates a credential set from its four components.
	pub fn new(
		consumer_key: impl Into<String>,
		consumer_secret: impl Into<Secret>,
		user_token: impl Into<String>,
		token_secret: impl Into<Secret>,
	) -> Self {
		Self {
			consumer_key: consumer_key.into(),
			consumer_secret: consumer_secret.into(),
			user_token: user_token.into(),
			token_secret: token_secret.into(),
		}
	}

	/// Application identifier sent as `oauth_consumer_key`.
	pub fn consumer_key(&self) -> &str {
		&self.consumer_key
	}

	/// Application secret; first half of the signing key.
	pub fn consumer_secret(&self) -> &Secret {
		&self.consumer_secret
	}

	/// User access token sent as `oauth_token`.
	pub fn user_token(&self) -> &str {
		&self.user_token
	}

	/// User token secret; second half of the signing key.
	pub fn token_secret(&self) -> &Secret {
		&self.token_secret
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("consumer_key", &self.consumer_key)
			.field("consumer_secret", &self.consumer_secret)
			.field("user_token", &self.user_token)
			.field("token_secret", &self.token_secret)
			.finish()
	}
}
