//! Option management handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use optionsd_types::types::ApiResponse;

use crate::extract::JsonBody;
use crate::prelude::*;

use super::types::OptionEntry;

/// GET /api/option - List every non-sensitive option
pub async fn list_options(
	State(app): State<App>,
) -> (StatusCode, Json<ApiResponse<Vec<OptionEntry>>>) {
	let options = app.options.list_public();
	(StatusCode::OK, Json(ApiResponse::new(options)))
}

/// PUT /api/option - Update a single option
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOptionRequest {
	pub key: String,
	pub value: String,
}

/// Rule rejections and storage failures are answered with 200 and
/// `success: false`. Only an undecodable body becomes a 400.
pub async fn update_option(
	State(app): State<App>,
	JsonBody(req): JsonBody<UpdateOptionRequest>,
) -> (StatusCode, Json<ApiResponse<()>>) {
	match app.options.update(&req.key, &req.value).await {
		Ok(()) => (StatusCode::OK, Json(ApiResponse::ok())),
		Err(err) => (StatusCode::OK, Json(ApiResponse::failure(err.to_string()))),
	}
}

// vim: ts=4
