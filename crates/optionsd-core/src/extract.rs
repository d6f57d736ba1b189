//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::prelude::*;

/// JSON request body that rejects with [`Error::BadRequest`]
///
/// Unlike `axum::Json` it ignores the content type and maps every decode
/// failure to a 400 carrying the usual response envelope.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
	T: DeserializeOwned,
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
		let bytes = Bytes::from_request(req, state).await.map_err(|err| {
			debug!("Failed to read request body: {}", err);
			Error::BadRequest("invalid parameters".into())
		})?;

		serde_json::from_slice(&bytes).map(JsonBody).map_err(|err| {
			debug!("Invalid JSON body: {}", err);
			Error::BadRequest("invalid parameters".into())
		})
	}
}

// vim: ts=4
