//! Optional observability helpers for gallery calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `gallery_client.call` with the `endpoint`
//!   and `stage` fields.
//! - Enable `metrics` to increment the `gallery_client_call_total` counter for every
//!   attempt/success/failure, labeled by `endpoint` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Gallery endpoints observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
	/// Subscription workflow listing.
	Subscription,
	/// App question listing.
	Questions,
	/// Job submission for an app.
	ExecuteWorkflow,
	/// Job listing for an app.
	GetJobs,
	/// Single-job state lookup.
	GetJobStatus,
	/// Job output artifact retrieval.
	GetJobOutput,
	/// Admin workflow listing.
	GetWorkflows,
	/// App package retrieval.
	GetApp,
}
impl CallKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallKind::Subscription => "subscription",
			CallKind::Questions => "questions",
			CallKind::ExecuteWorkflow => "execute_workflow",
			CallKind::GetJobs => "get_jobs",
			CallKind::GetJobStatus => "get_job_status",
			CallKind::GetJobOutput => "get_job_output",
			CallKind::GetWorkflows => "get_workflows",
			CallKind::GetApp => "get_app",
		}
	}
}
impl Display for CallKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to an endpoint operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
