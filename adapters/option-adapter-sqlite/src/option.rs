//! Option key-value store
//!
//! Values are stored in their canonical text form.

use sqlx::{Row, SqlitePool};

use optionsd::{prelude::*, types::OptionRow};

use crate::db_error;

pub(crate) async fn list(db: &SqlitePool) -> ClResult<Vec<OptionRow>> {
	let rows = sqlx::query("SELECT key, value FROM options")
		.fetch_all(db)
		.await
		.map_err(db_error)?;

	let mut options = Vec::with_capacity(rows.len());
	for row in rows {
		let key: String = row.try_get("key").map_err(db_error)?;
		let value: Option<String> = row.try_get("value").map_err(db_error)?;
		options.push(OptionRow::new(key, value.unwrap_or_default()));
	}

	Ok(options)
}

pub(crate) async fn read(db: &SqlitePool, key: &str) -> ClResult<Option<Box<str>>> {
	let row = sqlx::query("SELECT value FROM options WHERE key = ?")
		.bind(key)
		.fetch_optional(db)
		.await
		.map_err(db_error)?;

	match row {
		Some(row) => {
			let value: Option<String> = row.try_get("value").map_err(db_error)?;
			Ok(Some(value.unwrap_or_default().into()))
		}
		None => Ok(None),
	}
}

pub(crate) async fn update(db: &SqlitePool, key: &str, value: &str) -> ClResult<()> {
	sqlx::query("INSERT OR REPLACE INTO options (key, value) VALUES (?, ?)")
		.bind(key)
		.bind(value)
		.execute(db)
		.await
		.map_err(db_error)?;

	Ok(())
}

// vim: ts=4
