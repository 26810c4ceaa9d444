//! The HTTP surface of the service, one module per functional area.

mod auth;
mod complaint;

use axum::Router;

use crate::prelude::*;

/// Creates a router with every endpoint this service exposes.
pub fn create_sub_app() -> Router<AppState> {
	Router::new()
		.merge(auth::create_sub_app())
		.merge(complaint::create_sub_app())
}
