//! Per-request freshness markers: nonce and timestamp capabilities.
//!
//! Both are modeled as injectable sources so tests can pin them while production code draws
//! from the thread-local CSPRNG and the wall clock.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use rand::Rng;
use time::OffsetDateTime;

const NONCE_ENTROPY_LEN: usize = 32;

/// Produces `oauth_nonce` values.
pub trait NonceSource
where
	Self: Send + Sync,
{
	/// Returns a fresh nonce; must not repeat across calls in practice.
	fn nonce(&self) -> String;
}

/// Produces `oauth_timestamp` values.
pub trait TimestampSource
where
	Self: Send + Sync,
{
	/// Returns the current time as decimal seconds since the Unix epoch.
	fn timestamp(&self) -> String;
}

/// Nonce drawn from 32 random bytes, base64-encoded, with every non-alphanumeric character
/// removed.
///
/// The result is at most 44 characters and usually a few shorter; its length is not fixed.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomNonce;
impl NonceSource for RandomNonce {
	fn nonce(&self) -> String {
		let mut entropy = [0_u8; NONCE_ENTROPY_LEN];

		rand::rng().fill(&mut entropy);

		let mut nonce = STANDARD.encode(entropy);

		nonce.retain(|c| c.is_ascii_alphanumeric());

		nonce
	}
}

/// Wall-clock timestamp source.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;
impl TimestampSource for SystemClock {
	fn timestamp(&self) -> String {
		OffsetDateTime::now_utc().unix_timestamp().to_string()
	}
}

/// Nonce source that always returns the same value; for tests and golden vectors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedNonce(pub String);
impl FixedNonce {
	/// Wraps the nonce to return.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}
}
impl NonceSource for FixedNonce {
	fn nonce(&self) -> String {
		self.0.clone()
	}
}

/// Timestamp source that always returns the same value; for tests and golden vectors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedTimestamp(pub String);
impl FixedTimestamp {
	/// Wraps the timestamp to return.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}
}
impl TimestampSource for FixedTimestamp {
	fn timestamp(&self) -> String {
		self.0.clone()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn random_nonce_is_alphanumeric_and_bounded() {
		for _ in 0..64 {
			let nonce = RandomNonce.nonce();

			assert!(nonce.len() <= 44);
			assert!(!nonce.is_empty());
			assert!(nonce.chars().all(|c| c.is_ascii_alphanumeric()));
		}
	}

	#[test]
	fn random_nonces_do_not_repeat() {
		let nonces = (0..256).map(|_| RandomNonce.nonce()).collect::<std::collections::HashSet<_>>();

		assert_eq!(nonces.len(), 256);
	}

	#[test]
	fn system_clock_renders_plain_decimal_seconds() {
		let before = OffsetDateTime::now_utc().unix_timestamp();
		let stamp = SystemClock.timestamp();
		let after = OffsetDateTime::now_utc().unix_timestamp();

		assert!(stamp.chars().all(|c| c.is_ascii_digit()));
		assert!(!stamp.starts_with('0'));

		let parsed = stamp.parse::<i64>().expect("Timestamp should parse as an integer.");

		assert!((before..=after).contains(&parsed));
	}

	#[test]
	fn fixed_sources_repeat_their_values() {
		let nonce = FixedNonce::new("N1");
		let clock = FixedTimestamp::new("1000000000");

		assert_eq!(nonce.nonce(), "N1");
		assert_eq!(nonce.nonce(), "N1");
		assert_eq!(clock.timestamp(), "1000000000");
	}
}
