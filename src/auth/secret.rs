//! Redacting wrapper for the consumer secret used as HMAC key material.

// self
use crate::_prelude::*;

/// Consumer secret wrapper keeping HMAC key material out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSecret(String);
impl ApiSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner secret value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for ApiSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for ApiSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ApiSecret").field(&"<redacted>").finish()
	}
}
impl Display for ApiSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn secret_formatters_redact() {
		let secret = ApiSecret::new("super-secret");

		assert_eq!(format!("{secret:?}"), "ApiSecret(\"<redacted>\")");
		assert_eq!(format!("{secret}"), "<redacted>");
	}

	#[test]
	fn expose_returns_the_raw_value() {
		let secret = ApiSecret::new("super-secret");

		assert_eq!(secret.expose(), "super-secret");
		assert_eq!(secret.as_ref(), "super-secret");
	}
}
