//! OAuth 1.0a request canonicalization and HMAC-SHA1 signing.
//!
//! The gallery's variant never acquires a request or access token: every call
//! is signed directly with the consumer secret and an empty token secret. That
//! is part of the vendor contract and is preserved exactly, as is the
//! canonical form the server recomputes: parameters sorted by key,
//! percent-encoded with the RFC 3986 unreserved set, and joined into
//! `METHOD&enc(url)&enc(paramstring)`.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use sha1::Sha1;
// self
use crate::{
	_prelude::*,
	auth::{ApiSecret, Credentials, nonce},
	error::SigningError,
	http::HttpMethod,
};

type HmacSha1 = Hmac<Sha1>;

/// `oauth_signature_method` constant carried by every parameter set.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";
/// `oauth_version` constant carried by every parameter set.
pub const OAUTH_VERSION: &str = "1.0";

/// Everything except alphanumerics and `-._~` is escaped (RFC 3986
/// unreserved); the server reproduces this set when verifying signatures.
const UNRESERVED: &AsciiSet =
	&NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// OAuth parameter set with deterministic key order.
///
/// Insertion order never matters: the backing map sorts keys
/// lexicographically, which is exactly the order the signature base string
/// requires.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OauthParams(BTreeMap<String, String>);
impl OauthParams {
	/// Builds a parameter set with a fresh nonce and the current timestamp.
	pub fn fresh(credentials: &Credentials) -> Self {
		Self::assemble(
			credentials.api_key(),
			nonce::generate_nonce(nonce::DEFAULT_NONCE_LEN),
			OffsetDateTime::now_utc().unix_timestamp(),
		)
	}

	/// Builds a parameter set from explicit parts, for callers that need the
	/// nonce and timestamp to be reproducible.
	pub fn assemble(
		consumer_key: impl Into<String>,
		nonce: impl Into<String>,
		timestamp: i64,
	) -> Self {
		let mut params = Self::default();

		params.insert("oauth_consumer_key", consumer_key);
		params.insert("oauth_nonce", nonce);
		params.insert("oauth_signature_method", SIGNATURE_METHOD);
		params.insert("oauth_timestamp", timestamp.to_string());
		params.insert("oauth_version", OAUTH_VERSION);

		params
	}

	/// Inserts or replaces a parameter.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.0.insert(key.into(), value.into());
	}

	/// Attaches the computed signature as `oauth_signature`.
	pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
		self.insert("oauth_signature", signature);

		self
	}

	/// Iterates parameters in lexicographic key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
	}

	/// Sorted `key=value&…` string with keys and values percent-encoded.
	fn normalized_query(&self) -> String {
		let mut buf = String::new();

		for (idx, (key, value)) in self.iter().enumerate() {
			if idx > 0 {
				buf.push('&');
			}

			buf.push_str(&percent(key));
			buf.push('=');
			buf.push_str(&percent(value));
		}

		buf
	}
}

/// Computes the base64 HMAC-SHA1 signature for one request.
///
/// `url` must not carry a query string; the parameters are supplied
/// separately and canonicalized here. The signing key is the consumer secret
/// followed by `&` with an empty token secret. Given a fixed method, URL, and
/// parameter set this is a pure function: identical inputs always produce an
/// identical signature.
pub fn generate_signature(
	method: HttpMethod,
	url: &str,
	params: &OauthParams,
	secret: &ApiSecret,
) -> Result<String, SigningError> {
	if !secret.expose().is_ascii() {
		return Err(SigningError::NonAsciiSecret);
	}

	for (key, value) in params.iter() {
		if !key.is_ascii() || !value.is_ascii() {
			return Err(SigningError::NonAsciiParam { key: key.to_owned() });
		}
	}

	let base_string =
		format!("{}&{}&{}", method.as_str(), percent(url), percent(&params.normalized_query()));
	let signing_key = format!("{}&", secret.expose());
	let mut mac = HmacSha1::new_from_slice(signing_key.as_bytes())
		.map_err(|source| SigningError::Key { source })?;

	mac.update(base_string.as_bytes());

	Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

fn percent(value: &str) -> String {
	utf8_percent_encode(value, UNRESERVED).to_string()
}
