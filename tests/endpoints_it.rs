// crates.io
use httpmock::prelude::*;
// self
use gallery_client::{
	auth::Credentials,
	client::{AppId, JobId, ReqwestGallery},
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
async fn subscription_sends_oauth_params_and_decodes_json() {
	let server = MockServer::start_async().await;
	let gallery = build_gallery(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/workflows/subscription/")
				.query_param("oauth_consumer_key", API_KEY)
				.query_param("oauth_signature_method", "HMAC-SHA1")
				.query_param("oauth_version", "1.0")
				.query_param_exists("oauth_nonce")
				.query_param_exists("oauth_timestamp")
				.query_param_exists("oauth_signature");
			then.status(200)
				.header("content-type", "application/json")
				.body("[{\"id\":\"wf-1\",\"metaInfo\":{\"name\":\"Daily Refresh\"}}]");
		})
		.await;
	let reply = gallery.subscription().await.expect("Subscription call should succeed.");

	assert_eq!(reply.response.status, 200);
	assert!(reply.response.is_success());
	assert_eq!(reply.content[0]["id"], "wf-1");

	mock.assert_async().await;
}

#[tokio::test]
async fn questions_targets_the_app_scoped_path() {
	let server = MockServer::start_async().await;
	let gallery = build_gallery(&server);
	let app = AppId::new("app-42").expect("App fixture should be valid.");
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/workflows/app-42/questions/")
				.query_param_exists("oauth_signature");
			then.status(200)
				.header("content-type", "application/json")
				.body("[{\"name\":\"threshold\",\"type\":\"Numeric\"}]");
		})
		.await;
	let reply = gallery.questions(&app).await.expect("Questions call should succeed.");

	assert_eq!(reply.content[0]["name"], "threshold");

	mock.assert_async().await;
}

#[tokio::test]
async fn get_jobs_lists_jobs_for_the_app() {
	let server = MockServer::start_async().await;
	let gallery = build_gallery(&server);
	let app = AppId::new("app-42").expect("App fixture should be valid.");
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/workflows/app-42/jobs/")
				.query_param_exists("oauth_signature");
			then.status(200)
				.header("content-type", "application/json")
				.body("[{\"id\":\"job-1\",\"status\":\"Completed\"}]");
		})
		.await;
	let reply = gallery.get_jobs(&app).await.expect("Job listing should succeed.");

	assert_eq!(reply.content[0]["status"], "Completed");

	mock.assert_async().await;
}

#[tokio::test]
async fn get_job_status_targets_the_job_path() {
	let server = MockServer::start_async().await;
	let gallery = build_gallery(&server);
	let job = JobId::new("job-7").expect("Job fixture should be valid.");
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/jobs/job-7/").query_param_exists("oauth_signature");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"id\":\"job-7\",\"status\":\"Running\"}");
		})
		.await;
	let reply = gallery.get_job_status(&job).await.expect("Job status call should succeed.");

	assert_eq!(reply.content["status"], "Running");

	mock.assert_async().await;
}

#[tokio::test]
async fn get_workflows_uses_the_admin_path() {
	let server = MockServer::start_async().await;
	let gallery = build_gallery(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/admin/v1/workflows/").query_param_exists("oauth_signature");
			then.status(200).header("content-type", "application/json").body("[]");
		})
		.await;
	let reply = gallery.get_workflows().await.expect("Admin workflow listing should succeed.");

	assert!(reply.content.as_array().expect("Admin listing should be an array.").is_empty());

	mock.assert_async().await;
}

#[tokio::test]
async fn get_app_fetches_the_package() {
	let server = MockServer::start_async().await;
	let gallery = build_gallery(&server);
	let app = AppId::new("app-42").expect("App fixture should be valid.");
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/workflows/app-42/package/")
				.query_param_exists("oauth_signature");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"id\":\"app-42\",\"packageWorkflow\":true}");
		})
		.await;
	let reply = gallery.get_app(&app).await.expect("Package call should succeed.");

	assert_eq!(reply.content["id"], "app-42");

	mock.assert_async().await;
}

#[tokio::test]
async fn non_2xx_statuses_pass_through_with_decoded_bodies() {
	let server = MockServer::start_async().await;
	let gallery = build_gallery(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/workflows/subscription/");
			then.status(503)
				.header("content-type", "application/json")
				.body("{\"message\":\"Gallery is draining.\"}");
		})
		.await;
	let reply = gallery
		.subscription()
		.await
		.expect("Non-2xx responses with JSON bodies should not be intercepted.");

	assert_eq!(reply.response.status, 503);
	assert!(!reply.response.is_success());
	assert_eq!(reply.content["message"], "Gallery is draining.");

	mock.assert_async().await;
}

#[tokio::test]
async fn malformed_json_surfaces_a_decode_error() {
	let server = MockServer::start_async().await;
	let gallery = build_gallery(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/workflows/subscription/");
			then.status(200).header("content-type", "text/html").body("<html>login page</html>");
		})
		.await;
	let err = gallery
		.subscription()
		.await
		.expect_err("Unparseable bodies must surface as decode errors.");

	assert!(matches!(err, Error::Decode(DecodeError::Json { status: 200, .. })));

	mock.assert_async().await;
}
