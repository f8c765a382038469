//! Thin OAuth 1.0a client for a workflow-automation gallery REST API—signed subscription, job,
//! and workflow-package calls behind a single transport seam.
//!
//! Every operation builds a fresh OAuth parameter set (nonce + timestamp), computes an
//! HMAC-SHA1 signature over the canonical base string, attaches the parameters as query
//! parameters, and dispatches exactly once. There is no token handshake: the gallery's
//! documented OAuth 1.0a variant signs each call with the consumer secret and an empty token
//! secret.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod error;
pub mod http;
pub mod obs;
pub mod sign;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::Value;
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
