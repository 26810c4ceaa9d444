use models::api::user::UserSummary;
use time::OffsetDateTime;

use crate::prelude::*;

/// A row of the `users` table. The `password` column holds an argon2 PHC
/// string, never clear text. `otp` and `otp_expiry` are either both set
/// or both absent.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
	pub id: i64,
	pub email: String,
	pub password: String,
	pub role: UserRole,
	pub otp: Option<String>,
	pub otp_expiry: Option<OffsetDateTime>,
}

pub async fn initialize_users(
	connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS users (
			id INTEGER PRIMARY KEY AUTOINCREMENT,
			email TEXT UNIQUE NOT NULL,
			password TEXT NOT NULL,
			role TEXT NOT NULL DEFAULT 'user',
			otp TEXT,
			otp_expiry DATETIME
		);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

/// Inserts a new user with the default `user` role and returns its id.
/// Uniqueness of the email is the caller's concern (and the schema's).
pub async fn create_user(
	connection: &mut DatabaseConnection,
	email: &str,
	hashed_password: &str,
) -> Result<i64, sqlx::Error> {
	let result = sqlx::query(
		r#"
		INSERT INTO
			users (email, password)
		VALUES
			(?, ?);
		"#,
	)
	.bind(email)
	.bind(hashed_password)
	.execute(&mut *connection)
	.await?;

	Ok(result.last_insert_rowid())
}

pub async fn get_user_by_email(
	connection: &mut DatabaseConnection,
	email: &str,
) -> Result<Option<User>, sqlx::Error> {
	sqlx::query_as(
		r#"
		SELECT
			*
		FROM
			users
		WHERE
			email = ?;
		"#,
	)
	.bind(email)
	.fetch_optional(&mut *connection)
	.await
}

pub async fn get_user_by_id(
	connection: &mut DatabaseConnection,
	user_id: i64,
) -> Result<Option<User>, sqlx::Error> {
	sqlx::query_as(
		r#"
		SELECT
			*
		FROM
			users
		WHERE
			id = ?;
		"#,
	)
	.bind(user_id)
	.fetch_optional(&mut *connection)
	.await
}

/// Finds the user whose email AND pending code both match, by exact string
/// equality, case sensitive as stored.
pub async fn get_user_by_email_and_otp(
	connection: &mut DatabaseConnection,
	email: &str,
	otp: &str,
) -> Result<Option<User>, sqlx::Error> {
	sqlx::query_as(
		r#"
		SELECT
			*
		FROM
			users
		WHERE
			email = ? AND
			otp = ?;
		"#,
	)
	.bind(email)
	.bind(otp)
	.fetch_optional(&mut *connection)
	.await
}

/// Writes a pending code and its expiry to the user row, overwriting any
/// code that was still pending.
pub async fn set_password_reset_otp(
	connection: &mut DatabaseConnection,
	user_id: i64,
	otp: &str,
	otp_expiry: &OffsetDateTime,
) -> Result<(), sqlx::Error> {
	sqlx::query(
		r#"
		UPDATE
			users
		SET
			otp = ?,
			otp_expiry = ?
		WHERE
			id = ?;
		"#,
	)
	.bind(otp)
	.bind(otp_expiry)
	.bind(user_id)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

/// Clears the pending code and its expiry together, restoring the
/// both-absent invariant.
pub async fn clear_password_reset_otp(
	connection: &mut DatabaseConnection,
	user_id: i64,
) -> Result<(), sqlx::Error> {
	sqlx::query(
		r#"
		UPDATE
			users
		SET
			otp = NULL,
			otp_expiry = NULL
		WHERE
			id = ?;
		"#,
	)
	.bind(user_id)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

pub async fn update_user_password(
	connection: &mut DatabaseConnection,
	user_id: i64,
	hashed_password: &str,
) -> Result<(), sqlx::Error> {
	sqlx::query(
		r#"
		UPDATE
			users
		SET
			password = ?
		WHERE
			id = ?;
		"#,
	)
	.bind(hashed_password)
	.bind(user_id)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

/// Every account in the system, as shown on the admin dashboard.
pub async fn get_all_users(
	connection: &mut DatabaseConnection,
) -> Result<Vec<UserSummary>, sqlx::Error> {
	sqlx::query_as(
		r#"
		SELECT
			id,
			email,
			role
		FROM
			users;
		"#,
	)
	.fetch_all(&mut *connection)
	.await
}
