use axum::Router;
use sqlx::Pool;
use tokio::net::TcpListener;

use crate::{prelude::*, routes};

/// The state shared with every handler: the parsed configuration and the
/// database connection pool. The pool is the single point of
/// serialization; there is no other shared mutable state.
#[derive(Clone)]
pub struct AppState {
	pub config: AppConfig,
	pub database: Pool<DatabaseType>,
}

/// Binds the listener and serves the application router until the process
/// is stopped.
pub async fn start_server(app: AppState) -> std::io::Result<()> {
	let bind_addr = app.config.bind_addr;

	let router = create_router(&app);

	info!("Listening for connections on {}", bind_addr);
	let listener = TcpListener::bind(bind_addr).await?;
	axum::serve(listener, router).await
}

/// Assembles the full application router with its state attached.
pub fn create_router(app: &AppState) -> Router {
	routes::create_sub_app().with_state(app.clone())
}
