//! Validated credential triple for one gallery deployment.

// self
use crate::{_prelude::*, auth::ApiSecret};

/// Errors raised while validating credential fields.
#[derive(Debug, ThisError)]
pub enum CredentialError {
	/// A required credential field was empty.
	#[error("'{field}' cannot be empty.")]
	Empty {
		/// Name of the offending field.
		field: &'static str,
	},
	/// The API location does not parse as a URL.
	#[error("'api_location' is not a valid URL.")]
	InvalidLocation {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}

/// Immutable, validated credential triple for the gallery API.
///
/// All three fields are checked eagerly in [`Credentials::new`], so a value of
/// this type never produces a malformed signed request later. The location is
/// kept verbatim rather than URL-normalized: request URLs are built by plain
/// concatenation and the signature covers those exact bytes, so normalization
/// (such as appending a trailing slash) would change what the server verifies.
#[derive(Clone, Debug, Deserialize)]
#[serde(try_from = "CredentialParts")]
pub struct Credentials {
	api_location: String,
	api_key: String,
	api_secret: ApiSecret,
}
impl Credentials {
	/// Validates and stores the location, consumer key, and consumer secret.
	pub fn new(
		api_location: impl Into<String>,
		api_key: impl Into<String>,
		api_secret: impl Into<String>,
	) -> Result<Self, CredentialError> {
		let api_location = api_location.into();
		let api_key = api_key.into();
		let api_secret = api_secret.into();

		require_non_empty("api_location", &api_location)?;
		require_non_empty("api_key", &api_key)?;
		require_non_empty("api_secret", &api_secret)?;
		Url::parse(&api_location).map_err(|source| CredentialError::InvalidLocation { source })?;

		Ok(Self { api_location, api_key, api_secret: ApiSecret::new(api_secret) })
	}

	/// Base API location exactly as supplied, e.g. `https://gallery.example.com/gallery/api`.
	pub fn api_location(&self) -> &str {
		&self.api_location
	}

	/// OAuth consumer key sent as `oauth_consumer_key`.
	pub fn api_key(&self) -> &str {
		&self.api_key
	}

	/// OAuth consumer secret used as HMAC key material.
	pub fn api_secret(&self) -> &ApiSecret {
		&self.api_secret
	}
}

/// Unvalidated mirror of [`Credentials`] used during deserialization.
#[derive(Deserialize)]
struct CredentialParts {
	api_location: String,
	api_key: String,
	api_secret: String,
}
impl TryFrom<CredentialParts> for Credentials {
	type Error = CredentialError;

	fn try_from(parts: CredentialParts) -> Result<Self, Self::Error> {
		Self::new(parts.api_location, parts.api_key, parts.api_secret)
	}
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), CredentialError> {
	if value.is_empty() { Err(CredentialError::Empty { field }) } else { Ok(()) }
}
