//! The fixed endpoint set.
//!
//! Each operation builds fresh OAuth parameters (new nonce, current
//! timestamp), signs them, attaches `oauth_signature`, and dispatches the
//! request exactly once. Responses are decoded as JSON except for job output
//! retrieval, which stays raw text. Non-2xx statuses are never intercepted;
//! callers read them from the returned [`Reply`].

// self
use crate::{
	_prelude::*,
	client::{AppId, Gallery, JobId, OutputId, Reply},
	error::ConfigError,
	http::{GalleryTransport, HttpMethod, RawResponse, SignedRequest},
	obs::{self, CallKind, CallOutcome, CallSpan},
	sign::{self, OauthParams},
};

impl<C> Gallery<C>
where
	C: ?Sized + GalleryTransport,
{
	/// Lists the workflows in the caller's subscription.
	pub async fn subscription(&self) -> Result<Reply<Value>> {
		self.call_json(
			CallKind::Subscription,
			HttpMethod::Get,
			"/v1/workflows/subscription/".into(),
			None,
		)
		.await
	}

	/// Lists the interface questions exposed by the given app.
	pub async fn questions(&self, app: &AppId) -> Result<Reply<Value>> {
		self.call_json(
			CallKind::Questions,
			HttpMethod::Get,
			format!("/v1/workflows/{app}/questions/"),
			None,
		)
		.await
	}

	/// Queues an execution job for the given app.
	///
	/// When `payload` is supplied it is sent as a JSON body with
	/// `Content-Type: application/json`; otherwise the POST carries only the
	/// signed query parameters. Either way the server replies with the job
	/// descriptor, including its identifier.
	pub async fn execute_workflow(
		&self,
		app: &AppId,
		payload: Option<Value>,
	) -> Result<Reply<Value>> {
		self.call_json(
			CallKind::ExecuteWorkflow,
			HttpMethod::Post,
			format!("/v1/workflows/{app}/jobs/"),
			payload,
		)
		.await
	}

	/// Lists the jobs queued for the given app.
	pub async fn get_jobs(&self, app: &AppId) -> Result<Reply<Value>> {
		self.call_json(CallKind::GetJobs, HttpMethod::Get, format!("/v1/workflows/{app}/jobs/"), None)
			.await
	}

	/// Fetches a job and its current state.
	pub async fn get_job_status(&self, job: &JobId) -> Result<Reply<Value>> {
		self.call_json(CallKind::GetJobStatus, HttpMethod::Get, format!("/v1/jobs/{job}/"), None)
			.await
	}

	/// Fetches one output artifact of a job as raw UTF-8 text.
	///
	/// The body is returned verbatim and never passed through JSON parsing,
	/// even when it happens to look like JSON.
	pub async fn get_job_output(&self, job: &JobId, output: &OutputId) -> Result<Reply<String>> {
		let response = self
			.dispatch(
				CallKind::GetJobOutput,
				HttpMethod::Get,
				format!("/v1/jobs/{job}/output/{output}/"),
				None,
			)
			.await?;
		let content = response.text()?;

		Ok(Reply { response, content })
	}

	/// Lists every workflow visible to the admin API.
	pub async fn get_workflows(&self) -> Result<Reply<Value>> {
		self.call_json(CallKind::GetWorkflows, HttpMethod::Get, "/admin/v1/workflows/".into(), None)
			.await
	}

	/// Fetches the package of the given published app.
	pub async fn get_app(&self, app: &AppId) -> Result<Reply<Value>> {
		self.call_json(CallKind::GetApp, HttpMethod::Get, format!("/v1/workflows/{app}/package/"), None)
			.await
	}

	async fn call_json(
		&self,
		kind: CallKind,
		method: HttpMethod,
		path: String,
		json_body: Option<Value>,
	) -> Result<Reply<Value>> {
		let response = self.dispatch(kind, method, path, json_body).await?;
		let content = response.json()?;

		Ok(Reply { response, content })
	}

	async fn dispatch(
		&self,
		kind: CallKind,
		method: HttpMethod,
		path: String,
		json_body: Option<Value>,
	) -> Result<RawResponse> {
		let span = CallSpan::new(kind, "dispatch");

		obs::record_call_outcome(kind, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let request = self.signed_request(method, &path, json_body)?;

				self.http_client
					.execute(request)
					.await
					.map_err(|source| Error::Transport(source.into()))
			})
			.await;

		match &result {
			Ok(_) => obs::record_call_outcome(kind, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(kind, CallOutcome::Failure),
		}

		result
	}

	fn signed_request(
		&self,
		method: HttpMethod,
		path: &str,
		json_body: Option<Value>,
	) -> Result<SignedRequest> {
		let endpoint = format!("{}{}", self.credentials.api_location(), path);
		let params = OauthParams::fresh(&self.credentials);
		let signature =
			sign::generate_signature(method, &endpoint, &params, self.credentials.api_secret())?;
		let params = params.with_signature(signature);
		let mut url =
			Url::parse(&endpoint).map_err(|source| ConfigError::InvalidRequestUrl { source })?;

		url.query_pairs_mut().extend_pairs(params.iter());

		Ok(SignedRequest { method, url, json_body })
	}
}
