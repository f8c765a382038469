//! Client-level error types shared across configuration, signing, transport, and decoding.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem, raised before any network activity.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Signature generation failure; the call is aborted pre-dispatch.
	#[error(transparent)]
	Signing(#[from] SigningError),
	/// Transport failure (DNS, TCP, TLS) surfaced by the HTTP stack.
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Response body could not be decoded.
	#[error(transparent)]
	Decode(#[from] DecodeError),
}

/// Configuration and validation failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Credential field validation failed.
	#[error(transparent)]
	Credential(#[from] crate::auth::CredentialError),
	/// The configured location and endpoint path do not combine into a URL.
	#[error("Request URL could not be assembled from the configured location.")]
	InvalidRequestUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}

/// Signature generation failures.
///
/// The signing key and every parameter must encode as ASCII; there is no
/// fallback transcoding, so a violation aborts the call before dispatch.
#[derive(Debug, ThisError)]
pub enum SigningError {
	/// The consumer secret contains non-ASCII bytes.
	#[error("API secret contains non-ASCII bytes and cannot be used as signing key material.")]
	NonAsciiSecret,
	/// An OAuth parameter key or value contains non-ASCII bytes.
	#[error("OAuth parameter `{key}` contains non-ASCII bytes and cannot be signed.")]
	NonAsciiParam {
		/// Key of the offending parameter.
		key: String,
	},
	/// HMAC key initialization failed. HMAC-SHA1 accepts keys of any length,
	/// so this is unreachable for validated credentials.
	#[error("Signing key could not be initialized.")]
	Key {
		/// Underlying key-length failure.
		#[source]
		source: hmac::digest::InvalidLength,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the gallery endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Response-body decoding failures.
///
/// Decoding is attempted for every status code; the HTTP status is carried so
/// callers can tell an unparseable error page from an unparseable success body.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// Body bytes are not valid UTF-8.
	#[error("Response body is not valid UTF-8.")]
	Utf8 {
		/// Underlying UTF-8 failure.
		#[source]
		source: std::str::Utf8Error,
		/// HTTP status code of the response.
		status: u16,
	},
	/// Body text is not valid JSON.
	#[error("Response body is not valid JSON.")]
	Json {
		/// Structured parsing failure including the failing path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
}
