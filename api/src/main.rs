//! Entry point for the complaint tracking API.
//!
//! Reads the configuration, sets up logging and the database connection
//! pool, creates the schema if it is missing, and starts the Axum server.

mod app;
mod db;
mod models;
mod routes;
mod service;
mod utils;

#[cfg(test)]
mod test;

use std::error::Error;

use app::AppState;
use tracing::debug;
use utils::logger;

pub type Result<TValue> = std::result::Result<TValue, Box<dyn Error>>;

/// The commonly used imports, so that handlers and the layers below them
/// can pull everything they need from one place.
pub mod prelude {
	pub use models::prelude::*;
	pub use tracing::{debug, error, info, instrument, trace, warn};

	pub use crate::{
		app::AppState,
		utils::{config::AppConfig, constants},
	};

	/// The database backend this service runs against.
	pub type DatabaseType = sqlx::Sqlite;
	/// A single connection to the database, as handed to the db layer.
	pub type DatabaseConnection = sqlx::SqliteConnection;
}

#[tokio::main]
async fn main() -> Result<()> {
	let config = utils::config::parse_config();
	println!(
		"[TRACE]: Configuration read. Running environment set to {}",
		config.environment
	);

	logger::initialize(&config);
	debug!("Logger initialized");

	let database = db::connect(&config.database).await;
	debug!("Database connection pool established");

	let app = AppState { config, database };
	db::initialize(&app).await?;
	debug!("Database initialized");

	app::start_server(app).await?;

	Ok(())
}
