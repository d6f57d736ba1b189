//! Error type shared by every optionsd crate

use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::types::ApiResponse;

pub type ClResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// The request could not be decoded
	BadRequest(String),
	/// A domain rule refused the change. Reported as a business failure.
	Rejected(String),
	ValidationError(String),
	ConfigError(String),
	/// Storage failure, carrying the driver's own message
	DbError(String),
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::ValidationError(err.to_string())
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::BadRequest(msg)
			| Error::Rejected(msg)
			| Error::ValidationError(msg)
			| Error::DbError(msg) => write!(f, "{}", msg),
			Error::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io(err) => Some(err),
			_ => None,
		}
	}
}

/// Only an undecodable request is answered with 400. Every other failure,
/// storage errors included, is a 200 with `success: false` and the error text.
impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		let status = match &self {
			Error::BadRequest(_) => StatusCode::BAD_REQUEST,
			Error::Rejected(_) | Error::ValidationError(_) => StatusCode::OK,
			Error::DbError(_) | Error::ConfigError(_) | Error::Internal(_) | Error::Io(_) => {
				tracing::warn!("Request failed: {}", self);
				StatusCode::OK
			}
		};

		(status, Json(ApiResponse::<()>::failure(self.to_string()))).into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_keeps_message_verbatim() {
		assert_eq!(Error::DbError("disk I/O error".into()).to_string(), "disk I/O error");
		assert_eq!(Error::Rejected("missing token".into()).to_string(), "missing token");
	}

	#[test]
	fn test_status_mapping() {
		assert_eq!(Error::BadRequest("bad".into()).into_response().status(), StatusCode::BAD_REQUEST);
		assert_eq!(Error::Rejected("no".into()).into_response().status(), StatusCode::OK);
		assert_eq!(Error::ValidationError("no".into()).into_response().status(), StatusCode::OK);
		assert_eq!(Error::Internal("boom".into()).into_response().status(), StatusCode::OK);
	}

	#[tokio::test]
	async fn test_storage_error_is_reported_verbatim() {
		let response = Error::DbError("database is locked".into()).into_response();
		assert_eq!(response.status(), StatusCode::OK);

		let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
			.await
			.expect("Failed to read body");
		let body: serde_json::Value = serde_json::from_slice(&bytes).expect("Body is not JSON");
		assert_eq!(body["success"], false);
		assert_eq!(body["message"], "database is locked");
	}
}

// vim: ts=4
