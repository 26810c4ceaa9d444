//! Request-scoped data models.

use axum::{extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
	headers::{authorization::Bearer, Authorization},
	typed_header::TypedHeader,
};

use crate::{db, prelude::*};

/// The authenticated caller of a request, resolved from the bearer session
/// token and threaded explicitly into every protected handler. The role is
/// whatever was cached on the session at login time; it is deliberately
/// not re-read from the users table, so a role change only takes effect at
/// the next login.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
	pub user_id: i64,
	pub role: UserRole,
}

impl AuthenticatedUser {
	/// Whether this session was established by an admin account.
	pub fn is_admin(&self) -> bool {
		self.role == UserRole::Admin
	}
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
	type Rejection = ErrorType;

	async fn from_request_parts(
		parts: &mut Parts,
		state: &AppState,
	) -> Result<Self, Self::Rejection> {
		let TypedHeader(Authorization(bearer)) = parts
			.extract::<TypedHeader<Authorization<Bearer>>>()
			.await
			.map_err(|_| ErrorType::Unauthenticated)?;

		let mut connection = state.database.acquire().await?;

		let session = db::get_user_session(&mut connection, bearer.token())
			.await?
			.ok_or(ErrorType::Unauthenticated)?;

		Ok(Self {
			user_id: session.user_id,
			role: session.role,
		})
	}
}
