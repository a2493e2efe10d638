// self
use crate::{_prelude::*, obs::FlowTarget};

/// Future returned by [`FlowSpan::instrument`]; plain `F` when tracing is compiled out.
#[cfg(feature = "tracing")]
pub type InstrumentedFlow<F> = tracing::instrument::Instrumented<F>;
/// Future returned by [`FlowSpan::instrument`]; plain `F` when tracing is compiled out.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedFlow<F> = F;

/// Span covering one signing or issuance call for a single [`FlowTarget`].
#[derive(Clone, Debug)]
pub struct FlowSpan {
	target: FlowTarget,
	stage: &'static str,
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl FlowSpan {
	/// Opens a span for `target` at call site `stage`.
	pub fn new(target: FlowTarget, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		let span = tracing::info_span!(
			"oauth_signer.flow",
			flow = target.kind.as_str(),
			stage,
			method = target.method.as_str(),
			host = target.host.as_str()
		);

		Self {
			target,
			stage,
			#[cfg(feature = "tracing")]
			span,
		}
	}

	/// Request attributes recorded on this span.
	pub fn target(&self) -> &FlowTarget {
		&self.target
	}

	/// Call site recorded on this span.
	pub fn stage(&self) -> &'static str {
		self.stage
	}

	/// Enters the span for a synchronous section and hands back the target for counters.
	pub fn entered(self) -> FlowSpanGuard {
		FlowSpanGuard {
			target: self.target,
			#[cfg(feature = "tracing")]
			_guard: self.span.entered(),
		}
	}

	/// Attaches the span to `fut` without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedFlow<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Guard returned by [`FlowSpan::entered`]; the span stays entered until it drops.
pub struct FlowSpanGuard {
	target: FlowTarget,
	#[cfg(feature = "tracing")]
	_guard: tracing::span::EnteredSpan,
}
impl FlowSpanGuard {
	/// Request attributes of the entered span.
	pub fn target(&self) -> &FlowTarget {
		&self.target
	}
}
impl Debug for FlowSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("FlowSpanGuard").field("target", &self.target).finish_non_exhaustive()
	}
}
