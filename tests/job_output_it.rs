// crates.io
use httpmock::prelude::*;
// self
use gallery_client::{
	auth::Credentials,
	client::{JobId, OutputId, ReqwestGallery},
	error::{DecodeError, Error},
};

const API_KEY: &str = "consumer-key";
const API_SECRET: &str = "consumer-secret";

fn build_gallery(server: &MockServer) -> ReqwestGallery {
	let credentials = Credentials::new(server.base_url(), API_KEY, API_SECRET)
		.expect("Credential fixture should be valid.");

	ReqwestGallery::new(credentials)
}

#[tokio::test]
async fn job_output_returns_raw_text_even_when_json_shaped() {
	let server = MockServer::start_async().await;
	let gallery = build_gallery(&server);
	let job = JobId::new("job-7").expect("Job fixture should be valid.");
	let output = OutputId::new("out-1").expect("Output fixture should be valid.");
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/jobs/job-7/output/out-1/")
				.query_param_exists("oauth_signature");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"looks\":\"like json\"}");
		})
		.await;
	let reply = gallery
		.get_job_output(&job, &output)
		.await
		.expect("Job output retrieval should succeed.");

	// Verbatim body, no JSON round trip.
	assert_eq!(reply.content, "{\"looks\":\"like json\"}");
	assert_eq!(reply.response.header("content-type"), Some("application/json"));

	mock.assert_async().await;
}

#[tokio::test]
async fn job_output_rejects_non_utf8_bodies() {
	let server = MockServer::start_async().await;
	let gallery = build_gallery(&server);
	let job = JobId::new("job-7").expect("Job fixture should be valid.");
	let output = OutputId::new("out-2").expect("Output fixture should be valid.");
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/jobs/job-7/output/out-2/");
			then.status(200).body(&[0xFF_u8, 0xFE, 0x00, 0x01][..]);
		})
		.await;
	let err = gallery
		.get_job_output(&job, &output)
		.await
		.expect_err("Non-UTF-8 output bodies must fail decoding.");

	assert!(matches!(err, Error::Decode(DecodeError::Utf8 { status: 200, .. })));

	mock.assert_async().await;
}
