use axum::{
	extract::State,
	http::StatusCode,
	routing::{get, post},
	Json,
	Router,
};
use models::api::complaint::*;

use crate::{db, models::AuthenticatedUser, prelude::*};

/// This function is used to create a router for every endpoint in this file
pub fn create_sub_app() -> Router<AppState> {
	Router::new()
		.route("/", post(submit_complaint))
		.route("/dashboard", get(list_complaints))
		.route("/status", post(update_complaint_status))
}

/// This function is used to submit a new complaint. The status always
/// starts out as `Pending`
async fn submit_complaint(
	State(app): State<AppState>,
	user: AuthenticatedUser,
	Json(SubmitComplaintRequest {
		category,
		description,
	}): Json<SubmitComplaintRequest>,
) -> Result<(StatusCode, Json<SubmitComplaintResponse>), ErrorType> {
	let mut connection = app.database.acquire().await?;

	let complaint =
		db::create_complaint(&mut connection, user.user_id, &category, &description).await?;

	info!("User `{}` submitted complaint `{}`", user.user_id, complaint.id);

	Ok((StatusCode::CREATED, Json(SubmitComplaintResponse { complaint })))
}

/// This function is used to list complaints, scoped by the caller's role:
/// admins get everything plus the account listing, everyone else gets
/// exactly their own complaints
async fn list_complaints(
	State(app): State<AppState>,
	user: AuthenticatedUser,
) -> Result<Json<ListComplaintsResponse>, ErrorType> {
	let mut connection = app.database.acquire().await?;

	let (complaints, users) = if user.is_admin() {
		(
			db::get_all_complaints(&mut connection).await?,
			Some(db::get_all_users(&mut connection).await?),
		)
	} else {
		(
			db::get_complaints_for_user(&mut connection, user.user_id).await?,
			None,
		)
	};

	Ok(Json(ListComplaintsResponse { complaints, users }))
}

/// This function is used by admins to overwrite a complaint's status. The
/// status vocabulary is deliberately unconstrained
async fn update_complaint_status(
	State(app): State<AppState>,
	user: AuthenticatedUser,
	Json(UpdateComplaintStatusRequest { id, status }): Json<UpdateComplaintStatusRequest>,
) -> Result<StatusCode, ErrorType> {
	if !user.is_admin() {
		return Err(ErrorType::Unauthorized);
	}

	let mut connection = app.database.acquire().await?;

	// An unknown complaint id is a silent no-op
	if db::get_complaint_by_id(&mut connection, id).await?.is_none() {
		debug!("Status update for unknown complaint `{id}` dropped");
		return Ok(StatusCode::OK);
	}

	db::update_complaint_status(&mut connection, id, &status).await?;

	info!("Complaint `{id}` status set to `{status}`");

	Ok(StatusCode::OK)
}
