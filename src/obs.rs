//! Optional observability helpers for signing and token issuance.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oauth_signer.flow` carrying the `flow`,
//!   `stage`, `method`, and `host` of the request being authorized.
//! - Enable `metrics` to increment the `oauth_signer_flow_total` counter for every
//!   attempt/success/failure, labeled by `flow`, `method`, `host`, and `outcome`.
//!
//! Both layers read the same [`FlowTarget`], so a span and its counters always agree on which
//! request they describe.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, request::Request};

/// Authorization flows observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowKind {
	/// OAuth 1.0a per-request signature.
	UserSignature,
	/// OAuth 2.0 application-only bearer token issuance.
	BearerIssuance,
}
impl FlowKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowKind::UserSignature => "oauth1_signature",
			FlowKind::BearerIssuance => "bearer_issuance",
		}
	}
}
impl Display for FlowKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Request attributes attached to every span and counter of one flow.
///
/// Only the method and host are captured; paths, parameters, and credentials never reach
/// telemetry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowTarget {
	/// Flow being observed.
	pub kind: FlowKind,
	/// Upper-cased HTTP method.
	pub method: String,
	/// Target host, including an explicit port.
	pub host: String,
}
impl FlowTarget {
	/// Captures the attributes of `request` for `kind`.
	pub fn new(kind: FlowKind, request: &Request) -> Self {
		Self { kind, method: request.method.to_ascii_uppercase(), host: request.host.clone() }
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowOutcome {
	/// Entry to a signing or issuance helper.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl FlowOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowOutcome::Attempt => "attempt",
			FlowOutcome::Success => "success",
			FlowOutcome::Failure => "failure",
		}
	}
}
impl Display for FlowOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
