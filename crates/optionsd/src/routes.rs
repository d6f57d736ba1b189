//! HTTP routes

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use optionsd_core::options::handler;

use crate::prelude::*;

pub fn init(app: App) -> Router {
	Router::new()
		.route("/api/option", get(handler::list_options).put(handler::update_option))
		.route("/api/option/", get(handler::list_options).put(handler::update_option))
		.layer(TraceLayer::new_for_http())
		.with_state(app)
}

// vim: ts=4
