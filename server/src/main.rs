use std::sync::Arc;

use optionsd::AppBuilder;
use optionsd::error::ClResult;
use optionsd_option_adapter_sqlite::OptionAdapterSqlite;

mod config;

#[tokio::main]
async fn main() -> ClResult<()> {
	let config = config::Config::from_env()?;

	let mut builder = AppBuilder::new();
	let option_adapter = OptionAdapterSqlite::new(config.db_path()).await?;
	builder
		.listen(config.listen.as_str())
		.sync_interval(config.sync_interval)
		.option_adapter(Arc::new(option_adapter));

	builder.run().await
}

// vim: ts=4
