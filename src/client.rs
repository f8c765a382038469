//! Gallery client facade: typed resource identifiers, the reply envelope, and
//! the fixed endpoint operations.

pub mod id;
pub mod reply;

mod ops;

pub use id::*;
pub use reply::*;

// self
use crate::{_prelude::*, auth::Credentials, http::GalleryTransport};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Gallery client specialized for the crate's default reqwest transport.
pub type ReqwestGallery = Gallery<ReqwestHttpClient>;

/// Issues signed calls against a single gallery deployment.
///
/// The client owns the validated credential triple and the HTTP transport.
/// Endpoint operations build a fresh OAuth parameter set per call, sign it,
/// and dispatch exactly once; there is no caching, retry, or shared mutable
/// state between calls, so a cloned client is safe to use from any task.
#[derive(Clone)]
pub struct Gallery<C>
where
	C: ?Sized + GalleryTransport,
{
	/// HTTP transport used for every outbound request.
	pub http_client: Arc<C>,
	/// Validated credential triple (location, consumer key, consumer secret).
	pub credentials: Credentials,
}
impl<C> Gallery<C>
where
	C: ?Sized + GalleryTransport,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(credentials: Credentials, http_client: impl Into<Arc<C>>) -> Self {
		Self { http_client: http_client.into(), credentials }
	}
}
#[cfg(feature = "reqwest")]
impl Gallery<ReqwestHttpClient> {
	/// Creates a client with a default reqwest transport.
	pub fn new(credentials: Credentials) -> Self {
		Self::with_http_client(credentials, ReqwestHttpClient::default())
	}
}
impl<C> Debug for Gallery<C>
where
	C: ?Sized + GalleryTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Gallery").field("credentials", &self.credentials).finish()
	}
}
