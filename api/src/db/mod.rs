//! Database layer: connection management, idempotent schema creation, and
//! every query the service runs, grouped per entity.

mod complaint;
mod session;
mod user;

pub use self::{complaint::*, session::*, user::*};

use sqlx::{pool::PoolOptions, sqlite::SqliteConnectOptions, Pool};

use crate::{prelude::*, utils::config::DatabaseConfig};

/// Connects to the database based on a config. Not much to say here.
pub async fn connect(config: &DatabaseConfig) -> Pool<DatabaseType> {
	PoolOptions::<DatabaseType>::new()
		.max_connections(config.connection_limit)
		.connect_with(
			SqliteConnectOptions::new()
				.filename(config.file.as_str())
				.create_if_missing(true),
		)
		.await
		.expect("Failed to connect to database")
}

/// Creates every table this service uses, if absent. The schema is fixed;
/// there is no migrations framework.
pub async fn initialize(app: &AppState) -> Result<(), sqlx::Error> {
	info!("Initializing database");

	let mut transaction = app.database.begin().await?;

	initialize_users(&mut transaction).await?;
	initialize_complaints(&mut transaction).await?;
	initialize_sessions(&mut transaction).await?;

	transaction.commit().await?;

	info!("Database initialized");

	Ok(())
}
