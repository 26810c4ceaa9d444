use models::api::complaint::Complaint;

use crate::prelude::*;

pub async fn initialize_complaints(
	connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS complaint (
			id INTEGER PRIMARY KEY AUTOINCREMENT,
			category TEXT NOT NULL,
			description TEXT NOT NULL,
			status TEXT NOT NULL DEFAULT 'Pending',
			user_id INTEGER NOT NULL,
			FOREIGN KEY(user_id) REFERENCES users(id)
		);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

/// Inserts a complaint for the given user, letting the schema default the
/// status to `Pending`, and returns the stored row.
pub async fn create_complaint(
	connection: &mut DatabaseConnection,
	user_id: i64,
	category: &str,
	description: &str,
) -> Result<Complaint, sqlx::Error> {
	let result = sqlx::query(
		r#"
		INSERT INTO
			complaint (category, description, user_id)
		VALUES
			(?, ?, ?);
		"#,
	)
	.bind(category)
	.bind(description)
	.bind(user_id)
	.execute(&mut *connection)
	.await?;

	get_complaint_by_id(connection, result.last_insert_rowid())
		.await?
		.ok_or(sqlx::Error::RowNotFound)
}

pub async fn get_complaint_by_id(
	connection: &mut DatabaseConnection,
	complaint_id: i64,
) -> Result<Option<Complaint>, sqlx::Error> {
	sqlx::query_as(
		r#"
		SELECT
			*
		FROM
			complaint
		WHERE
			id = ?;
		"#,
	)
	.bind(complaint_id)
	.fetch_optional(&mut *connection)
	.await
}

/// Every complaint in the store, in store order. Admin view.
pub async fn get_all_complaints(
	connection: &mut DatabaseConnection,
) -> Result<Vec<Complaint>, sqlx::Error> {
	sqlx::query_as(
		r#"
		SELECT
			*
		FROM
			complaint;
		"#,
	)
	.fetch_all(&mut *connection)
	.await
}

/// The complaints owned by the given user, in store order.
pub async fn get_complaints_for_user(
	connection: &mut DatabaseConnection,
	user_id: i64,
) -> Result<Vec<Complaint>, sqlx::Error> {
	sqlx::query_as(
		r#"
		SELECT
			*
		FROM
			complaint
		WHERE
			user_id = ?;
		"#,
	)
	.bind(user_id)
	.fetch_all(&mut *connection)
	.await
}

/// Overwrites the status with the caller-supplied string. No validation
/// against any vocabulary.
pub async fn update_complaint_status(
	connection: &mut DatabaseConnection,
	complaint_id: i64,
	status: &str,
) -> Result<(), sqlx::Error> {
	sqlx::query(
		r#"
		UPDATE
			complaint
		SET
			status = ?
		WHERE
			id = ?;
		"#,
	)
	.bind(status)
	.bind(complaint_id)
	.execute(&mut *connection)
	.await?;

	Ok(())
}
