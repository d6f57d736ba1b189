//! Test app builder and request helpers

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use optionsd::error::{ClResult, Error};
use optionsd::option_adapter::OptionAdapter;
use optionsd::types::OptionRow;
use optionsd::{App, AppBuilder, routes};
use optionsd_option_adapter_sqlite::OptionAdapterSqlite;

/// SQLite adapter whose writes can be switched to fail
#[derive(Debug)]
pub struct FlakyOptionAdapter {
	inner: OptionAdapterSqlite,
	fail_writes: AtomicBool,
}

impl FlakyOptionAdapter {
	pub fn fail_writes(&self, fail: bool) {
		self.fail_writes.store(fail, Ordering::SeqCst);
	}
}

#[async_trait]
impl OptionAdapter for FlakyOptionAdapter {
	async fn list_options(&self) -> ClResult<Vec<OptionRow>> {
		self.inner.list_options().await
	}

	async fn read_option(&self, key: &str) -> ClResult<Option<Box<str>>> {
		self.inner.read_option(key).await
	}

	async fn update_option(&self, key: &str, value: &str) -> ClResult<()> {
		if self.fail_writes.load(Ordering::SeqCst) {
			return Err(Error::DbError("database is locked".into()));
		}
		self.inner.update_option(key, value).await
	}
}

async fn create_adapter(temp_dir: &TempDir) -> OptionAdapterSqlite {
	OptionAdapterSqlite::new(temp_dir.path().join("options.db"))
		.await
		.expect("Failed to create adapter")
}

async fn build_app(adapter: Arc<dyn OptionAdapter>) -> App {
	let mut builder = AppBuilder::new();
	builder.option_adapter(adapter);
	builder.build().await.expect("Failed to build app")
}

/// App backed by a fresh SQLite database. Keep the TempDir alive for the test.
pub async fn create_test_app() -> (App, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let adapter = create_adapter(&temp_dir).await;
	let app = build_app(Arc::new(adapter)).await;

	(app, temp_dir)
}

/// Like [`create_test_app`], but the returned adapter can be told to fail writes
pub async fn create_flaky_test_app() -> (App, Arc<FlakyOptionAdapter>, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let adapter = Arc::new(FlakyOptionAdapter {
		inner: create_adapter(&temp_dir).await,
		fail_writes: AtomicBool::new(false),
	});
	let app = build_app(adapter.clone()).await;

	(app, adapter, temp_dir)
}

pub async fn send(app: &App, request: Request<Body>) -> (StatusCode, Value) {
	let router: Router = routes::init(app.clone());
	let response = router.oneshot(request).await.expect("Request failed");
	let status = response.status();
	let bytes = response.into_body().collect().await.expect("Failed to read body").to_bytes();
	let json = serde_json::from_slice(&bytes).expect("Response is not JSON");
	(status, json)
}

pub async fn get_options(app: &App) -> (StatusCode, Value) {
	let request = Request::get("/api/option/").body(Body::empty()).expect("Invalid request");
	send(app, request).await
}

pub async fn put_raw(app: &App, body: impl Into<Body>) -> (StatusCode, Value) {
	let request = Request::put("/api/option/")
		.header("content-type", "application/json")
		.body(body.into())
		.expect("Invalid request");
	send(app, request).await
}

pub async fn put_option(app: &App, key: &str, value: &str) -> (StatusCode, Value) {
	put_raw(app, serde_json::json!({ "key": key, "value": value }).to_string()).await
}

/// Value of `key` in a list response, if listed
pub fn listed_value<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
	body["data"]
		.as_array()?
		.iter()
		.find(|entry| entry["key"] == key)
		.and_then(|entry| entry["value"].as_str())
}

// vim: ts=4
