use time::OffsetDateTime;

use crate::prelude::*;

/// A row of the `user_session` table: one live login. The role is a copy
/// taken at login time and is deliberately not refreshed afterwards, so a
/// role change only becomes visible at the next login.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserSession {
	pub token: String,
	pub user_id: i64,
	pub role: UserRole,
	pub last_login: OffsetDateTime,
}

/// A row of the `password_reset_session` table: the reset slot. Binds one
/// token to one user for exactly one password reset completion.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PasswordResetSession {
	pub token: String,
	pub user_id: i64,
	pub created: OffsetDateTime,
}

pub async fn initialize_sessions(
	connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS user_session (
			token TEXT PRIMARY KEY,
			user_id INTEGER NOT NULL,
			role TEXT NOT NULL,
			last_login DATETIME NOT NULL,
			FOREIGN KEY(user_id) REFERENCES users(id)
		);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS password_reset_session (
			token TEXT PRIMARY KEY,
			user_id INTEGER NOT NULL,
			created DATETIME NOT NULL,
			FOREIGN KEY(user_id) REFERENCES users(id)
		);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

pub async fn add_user_session(
	connection: &mut DatabaseConnection,
	token: &str,
	user_id: i64,
	role: UserRole,
	last_login: &OffsetDateTime,
) -> Result<(), sqlx::Error> {
	sqlx::query(
		r#"
		INSERT INTO
			user_session (token, user_id, role, last_login)
		VALUES
			(?, ?, ?, ?);
		"#,
	)
	.bind(token)
	.bind(user_id)
	.bind(role)
	.bind(last_login)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

pub async fn get_user_session(
	connection: &mut DatabaseConnection,
	token: &str,
) -> Result<Option<UserSession>, sqlx::Error> {
	sqlx::query_as(
		r#"
		SELECT
			*
		FROM
			user_session
		WHERE
			token = ?;
		"#,
	)
	.bind(token)
	.fetch_optional(&mut *connection)
	.await
}

pub async fn delete_user_session(
	connection: &mut DatabaseConnection,
	token: &str,
) -> Result<(), sqlx::Error> {
	sqlx::query(
		r#"
		DELETE FROM
			user_session
		WHERE
			token = ?;
		"#,
	)
	.bind(token)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

/// Removes every login session the user holds. Run when a password reset
/// completes, so a stolen session does not outlive the credential change.
pub async fn delete_all_sessions_for_user(
	connection: &mut DatabaseConnection,
	user_id: i64,
) -> Result<(), sqlx::Error> {
	sqlx::query(
		r#"
		DELETE FROM
			user_session
		WHERE
			user_id = ?;
		"#,
	)
	.bind(user_id)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

pub async fn add_password_reset_session(
	connection: &mut DatabaseConnection,
	token: &str,
	user_id: i64,
	created: &OffsetDateTime,
) -> Result<(), sqlx::Error> {
	sqlx::query(
		r#"
		INSERT INTO
			password_reset_session (token, user_id, created)
		VALUES
			(?, ?, ?);
		"#,
	)
	.bind(token)
	.bind(user_id)
	.bind(created)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

pub async fn get_password_reset_session(
	connection: &mut DatabaseConnection,
	token: &str,
) -> Result<Option<PasswordResetSession>, sqlx::Error> {
	sqlx::query_as(
		r#"
		SELECT
			*
		FROM
			password_reset_session
		WHERE
			token = ?;
		"#,
	)
	.bind(token)
	.fetch_optional(&mut *connection)
	.await
}

pub async fn delete_password_reset_session(
	connection: &mut DatabaseConnection,
	token: &str,
) -> Result<(), sqlx::Error> {
	sqlx::query(
		r#"
		DELETE FROM
			password_reset_session
		WHERE
			token = ?;
		"#,
	)
	.bind(token)
	.execute(&mut *connection)
	.await?;

	Ok(())
}
