// self
use crate::obs::{FlowOutcome, FlowTarget};

/// Name of the counter incremented by [`record_flow_outcome`].
pub const FLOW_COUNTER: &str = "oauth_signer_flow_total";

/// Label pairs attached to [`FLOW_COUNTER`] for `target` and `outcome`.
pub fn flow_labels(target: &FlowTarget, outcome: FlowOutcome) -> [(&'static str, String); 4] {
	[
		("flow", target.kind.as_str().to_owned()),
		("method", target.method.clone()),
		("host", target.host.clone()),
		("outcome", outcome.as_str().to_owned()),
	]
}

/// Increments [`FLOW_COUNTER`] through the global recorder; a no-op without `metrics`.
pub fn record_flow_outcome(target: &FlowTarget, outcome: FlowOutcome) {
	#[cfg(feature = "metrics")]
	{
		let labels = flow_labels(target, outcome);

		metrics::counter!(FLOW_COUNTER, &labels).increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (target, outcome);
	}
}
