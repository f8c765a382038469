//! Per-request nonce generation for OAuth parameter sets.

// crates.io
use rand::{Rng, distr::Alphanumeric};

/// Default nonce length used when building fresh OAuth parameter sets.
pub const DEFAULT_NONCE_LEN: usize = 5;

/// Generates a pseudorandom alphanumeric nonce of the requested length.
///
/// Nonces only need to be practically unique per request within the signing
/// window, so a thread-local PRNG is sufficient; this is not key material.
pub fn generate_nonce(len: usize) -> String {
	rand::rng().sample_iter(Alphanumeric).take(len).map(char::from).collect()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn nonces_are_alphanumeric_with_exact_length() {
		for _ in 0..1_000 {
			let nonce = generate_nonce(DEFAULT_NONCE_LEN);

			assert_eq!(nonce.len(), DEFAULT_NONCE_LEN);
			assert!(nonce.bytes().all(|byte| byte.is_ascii_alphanumeric()));
		}
	}

	#[test]
	fn nonce_length_is_configurable() {
		assert!(generate_nonce(0).is_empty());
		assert_eq!(generate_nonce(32).len(), 32);
	}
}
