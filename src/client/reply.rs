//! Reply envelope pairing decoded payloads with their raw responses.

// self
use crate::http::RawResponse;

/// Decoded endpoint payload paired with the raw response it came from.
///
/// Operations return both so callers can inspect the HTTP status (which is
/// never interpreted by the client) independently of payload decoding.
#[derive(Clone, Debug)]
pub struct Reply<T> {
	/// Raw transport response (status, headers, body bytes).
	pub response: RawResponse,
	/// Decoded body.
	pub content: T,
}
