//! Lists the subscription's workflows against a local mock gallery using the
//! default reqwest transport.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use gallery_client::{auth::Credentials, client::ReqwestGallery};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let subscription_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/workflows/subscription/")
				.query_param_exists("oauth_signature");
			then.status(200)
				.header("content-type", "application/json")
				.body("[{\"id\":\"wf-1\",\"metaInfo\":{\"name\":\"Daily Refresh\"}}]");
		})
		.await;
	let credentials = Credentials::new(server.base_url(), "demo-key", "demo-secret")?;
	let gallery = ReqwestGallery::new(credentials);
	let reply = gallery.subscription().await?;

	println!("Subscription payload ({}): {}.", reply.response.status, reply.content);

	subscription_mock.assert_async().await;

	Ok(())
}
