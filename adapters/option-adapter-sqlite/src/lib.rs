//! SQLite storage for optionsd runtime options

use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};

use optionsd::{option_adapter::OptionAdapter, prelude::*, types::OptionRow};

mod option;
mod schema;

fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

/// Keep the driver's message: it is reported to the client as is
pub(crate) fn db_error(err: sqlx::Error) -> Error {
	inspect(&err);
	Error::DbError(err.to_string())
}

#[derive(Debug)]
pub struct OptionAdapterSqlite {
	db: SqlitePool,
}

impl OptionAdapterSqlite {
	/// Open (or create) the database at `path` and make sure the schema exists
	pub async fn new(path: impl AsRef<Path>) -> ClResult<Self> {
		if let Some(dir) = path.as_ref().parent().filter(|d| !d.as_os_str().is_empty()) {
			tokio::fs::create_dir_all(dir).await?;
		}

		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.map_err(db_error)?;

		schema::init_db(&db).await.map_err(db_error)?;
		debug!("Option database ready at {}", path.as_ref().display());

		Ok(Self { db })
	}
}

#[async_trait]
impl OptionAdapter for OptionAdapterSqlite {
	async fn list_options(&self) -> ClResult<Vec<OptionRow>> {
		option::list(&self.db).await
	}

	async fn read_option(&self, key: &str) -> ClResult<Option<Box<str>>> {
		option::read(&self.db, key).await
	}

	async fn update_option(&self, key: &str, value: &str) -> ClResult<()> {
		option::update(&self.db, key, value).await
	}
}

// vim: ts=4
