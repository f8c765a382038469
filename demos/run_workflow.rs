//! Queues a job with an answer payload, polls its state once, and fetches the
//! first output artifact, all against a local mock gallery.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
// self
use gallery_client::{
	auth::Credentials,
	client::{AppId, JobId, OutputId, ReqwestGallery},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let execute_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v1/workflows/app-42/jobs/")
				.header("content-type", "application/json")
				.query_param_exists("oauth_signature");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"id\":\"job-7\",\"status\":\"Queued\"}");
		})
		.await;
	let status_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/jobs/job-7/").query_param_exists("oauth_signature");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"id\":\"job-7\",\"status\":\"Completed\",\"outputs\":[{\"id\":\"out-1\"}]}");
		})
		.await;
	let output_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/jobs/job-7/output/out-1/")
				.query_param_exists("oauth_signature");
			then.status(200).header("content-type", "text/csv").body("region,total\neast,42\n");
		})
		.await;
	let credentials = Credentials::new(server.base_url(), "demo-key", "demo-secret")?;
	let gallery = ReqwestGallery::new(credentials);
	let app = AppId::new("app-42")?;
	let queued = gallery
		.execute_workflow(&app, Some(json!({ "questions": [{ "name": "region", "value": "east" }] })))
		.await?;

	println!("Queued job: {}.", queued.content["id"]);

	let job = JobId::new("job-7")?;
	let state = gallery.get_job_status(&job).await?;

	println!("Job state: {}.", state.content["status"]);

	let output = OutputId::new("out-1")?;
	let artifact = gallery.get_job_output(&job, &output).await?;

	println!("First artifact:\n{}", artifact.content);

	execute_mock.assert_async().await;
	status_mock.assert_async().await;
	output_mock.assert_async().await;

	Ok(())
}
