//! Transport seam for signed gallery requests.
//!
//! The module exposes [`GalleryTransport`] alongside [`SignedRequest`] and
//! [`RawResponse`] so downstream crates can integrate custom HTTP clients.
//! Implementations execute exactly one request and hand back the complete
//! response (status, headers, body bytes); decoding and status interpretation
//! stay inside the client so the transport never needs to understand payloads.

// std
use std::ops::Deref;
// self
use crate::{
	_prelude::*,
	error::{DecodeError, TransportError},
};

/// HTTP methods used by the gallery endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
	/// `GET`.
	Get,
	/// `POST`.
	Post,
}
impl HttpMethod {
	/// Uppercase wire name; also the first component of signature base strings.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
		}
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Wire-ready request produced after signing.
///
/// The OAuth parameters (including `oauth_signature`) are already attached to
/// `url` as query parameters, so transports dispatch it unchanged.
#[derive(Clone, Debug)]
pub struct SignedRequest {
	/// HTTP method to issue.
	pub method: HttpMethod,
	/// Full request URL including the signed query string.
	pub url: Url,
	/// Optional JSON body, sent with `Content-Type: application/json`.
	pub json_body: Option<Value>,
}

/// Raw HTTP response captured by the transport.
///
/// Non-2xx statuses are never intercepted by the client; callers inspect
/// [`status`](Self::status) here independently of payload decoding.
#[derive(Clone, Debug)]
pub struct RawResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response headers in arrival order.
	pub headers: Vec<(String, String)>,
	/// Unparsed body bytes.
	pub body: Vec<u8>,
}
impl RawResponse {
	/// Returns true for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// First header value matching `name` (ASCII case-insensitive).
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}

	/// Decodes the body as UTF-8 text, verbatim.
	pub fn text(&self) -> Result<String, DecodeError> {
		let view = std::str::from_utf8(&self.body)
			.map_err(|source| DecodeError::Utf8 { source, status: self.status })?;

		Ok(view.to_owned())
	}

	/// Decodes the body as UTF-8 JSON, reporting the failing path on error.
	pub fn json(&self) -> Result<Value, DecodeError> {
		let text = self.text()?;
		let mut deserializer = serde_json::Deserializer::from_str(&text);

		serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| DecodeError::Json { source, status: self.status })
	}
}

/// Abstraction over HTTP stacks capable of executing one signed request.
///
/// The trait is the client's only dependency on an HTTP stack. Implementations
/// must be `Send + Sync + 'static` so they can be shared behind `Arc<T>`, and
/// the futures they return must be `Send` so caller tasks can hop executors.
/// Transport errors convert into [`TransportError`] without interpretation;
/// the client never retries, so each `execute` call is dispatched at most once.
pub trait GalleryTransport
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type Error: 'static + Send + Sync + StdError + Into<TransportError>;

	/// Executes a single signed request to completion.
	fn execute(
		&self,
		request: SignedRequest,
	) -> impl Future<Output = Result<RawResponse, Self::Error>> + Send;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one
/// place. The default client is sufficient for gallery calls; timeouts and TLS
/// configuration are whatever the supplied [`ReqwestClient`] carries.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl GalleryTransport for ReqwestHttpClient {
	type Error = ReqwestError;

	fn execute(
		&self,
		request: SignedRequest,
	) -> impl Future<Output = Result<RawResponse, Self::Error>> + Send {
		let client = self.0.clone();
		let SignedRequest { method, url, json_body } = request;

		async move {
			let mut builder = match method {
				HttpMethod::Get => client.get(url),
				HttpMethod::Post => client.post(url),
			};

			if let Some(body) = json_body.as_ref() {
				builder = builder.json(body);
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let headers = response
				.headers()
				.iter()
				.map(|(name, value)| {
					(name.as_str().to_owned(), String::from_utf8_lossy(value.as_bytes()).into_owned())
				})
				.collect();
			let body = response.bytes().await?.to_vec();

			Ok(RawResponse { status, headers, body })
		}
	}
}
