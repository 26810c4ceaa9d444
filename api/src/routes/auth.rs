use axum::{
	extract::State,
	http::StatusCode,
	routing::{get, post},
	Json,
	Router,
};
use axum_extra::{
	headers::{authorization::Bearer, Authorization},
	typed_header::TypedHeader,
};
use models::api::auth::*;
use time::OffsetDateTime;

use crate::{db, prelude::*, service};

/// This function is used to create a router for every endpoint in this file
pub fn create_sub_app() -> Router<AppState> {
	Router::new()
		.route("/register", post(sign_up))
		.route("/login", post(sign_in))
		.route("/logout", get(sign_out))
		.route("/forgot-password", post(forgot_password))
		.route("/verify-otp", post(verify_otp))
		.route("/resend-otp", post(resend_otp))
		.route("/reset-password", post(reset_password))
}

/// This function is used to register a new user account
async fn sign_up(
	State(app): State<AppState>,
	Json(CreateAccountRequest {
		email,
		password,
		confirm_password,
	}): Json<CreateAccountRequest>,
) -> Result<StatusCode, ErrorType> {
	if password != confirm_password {
		return Err(ErrorType::PasswordsDoNotMatch);
	}

	let mut connection = app.database.acquire().await?;

	if db::get_user_by_email(&mut connection, &email)
		.await?
		.is_some()
	{
		return Err(ErrorType::EmailUnavailable);
	}

	let hashed_password = service::hash_password(&app.config, &password)?;
	let user_id = db::create_user(&mut connection, &email, &hashed_password).await?;

	info!("User `{user_id}` registered");

	Ok(StatusCode::CREATED)
}

/// This function will enable the user to sign in and establishes a fresh
/// session bound to the user's id and role
async fn sign_in(
	State(app): State<AppState>,
	Json(LoginRequest { email, password }): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ErrorType> {
	let mut connection = app.database.acquire().await?;

	// An unknown email and a wrong password are indistinguishable to the
	// caller
	let user = db::get_user_by_email(&mut connection, &email)
		.await?
		.ok_or(ErrorType::InvalidPassword)?;

	let success = service::validate_hash(&app.config, &password, &user.password)?;
	if !success {
		return Err(ErrorType::InvalidPassword);
	}

	let access_token = service::sign_in_user(&mut connection, &user).await?;

	info!("User `{}` logged in", user.id);

	Ok(Json(LoginResponse { access_token }))
}

/// This function is used to sign-out the user. Idempotent: it succeeds
/// whether or not a valid session was presented
async fn sign_out(
	State(app): State<AppState>,
	bearer: Option<TypedHeader<Authorization<Bearer>>>,
) -> Result<StatusCode, ErrorType> {
	if let Some(TypedHeader(Authorization(bearer))) = bearer {
		let mut connection = app.database.acquire().await?;
		db::delete_user_session(&mut connection, bearer.token()).await?;
	}

	Ok(StatusCode::OK)
}

/// This function is used to recover the user's account in case the user
/// forgets the password, by issuing an OTP to the account's delivery
/// channel
async fn forgot_password(
	State(app): State<AppState>,
	Json(ForgotPasswordRequest { email }): Json<ForgotPasswordRequest>,
) -> Result<StatusCode, ErrorType> {
	let mut connection = app.database.acquire().await?;

	let user = db::get_user_by_email(&mut connection, &email)
		.await?
		.ok_or(ErrorType::UserNotFound)?;

	service::issue_password_reset_otp(&mut connection, &user).await?;

	info!("Password reset OTP issued for user `{}`", user.id);

	Ok(StatusCode::ACCEPTED)
}

/// This function is used to verify a pending OTP. On success the reset
/// slot is bound to the account and its token returned
async fn verify_otp(
	State(app): State<AppState>,
	Json(VerifyOtpRequest { email, otp }): Json<VerifyOtpRequest>,
) -> Result<Json<VerifyOtpResponse>, ErrorType> {
	let mut connection = app.database.acquire().await?;

	let user = db::get_user_by_email_and_otp(&mut connection, &email, &otp)
		.await?
		.ok_or(ErrorType::InvalidOtp)?;

	// A code without a recorded expiry is treated as no code at all
	let Some(otp_expiry) = user.otp_expiry else {
		return Err(ErrorType::InvalidOtp);
	};

	if OffsetDateTime::now_utc() > otp_expiry {
		// The flow restarts at forgot-password
		return Err(ErrorType::OtpExpired);
	}

	let reset_token = service::create_password_reset_session(&mut connection, &user).await?;

	Ok(Json(VerifyOtpResponse { reset_token }))
}

/// This function is used to generate a new OTP and send it to the user,
/// overwriting whatever code was still pending. Reachable without a prior
/// forgot-password and behaves the same
async fn resend_otp(
	State(app): State<AppState>,
	Json(ResendOtpRequest { email }): Json<ResendOtpRequest>,
) -> Result<StatusCode, ErrorType> {
	let mut connection = app.database.acquire().await?;

	let user = db::get_user_by_email(&mut connection, &email)
		.await?
		.ok_or(ErrorType::UserNotFound)?;

	service::issue_password_reset_otp(&mut connection, &user).await?;

	info!("Password reset OTP re-issued for user `{}`", user.id);

	Ok(StatusCode::ACCEPTED)
}

/// This function is used to reset the password of the user holding the
/// reset slot
async fn reset_password(
	State(app): State<AppState>,
	Json(ResetPasswordRequest {
		reset_token,
		password,
	}): Json<ResetPasswordRequest>,
) -> Result<StatusCode, ErrorType> {
	let mut connection = app.database.acquire().await?;

	// An unbound reset slot is unauthorized, not an error state
	let reset_session = db::get_password_reset_session(&mut connection, &reset_token)
		.await?
		.ok_or(ErrorType::Unauthenticated)?;

	let user = db::get_user_by_id(&mut connection, reset_session.user_id)
		.await?
		.ok_or(ErrorType::Unauthenticated)?;

	let hashed_password = service::hash_password(&app.config, &password)?;

	db::update_user_password(&mut connection, user.id, &hashed_password).await?;
	db::clear_password_reset_otp(&mut connection, user.id).await?;

	// The slot authorizes exactly one reset
	db::delete_password_reset_session(&mut connection, &reset_session.token).await?;

	// No login session for this account survives a credential change
	db::delete_all_sessions_for_user(&mut connection, user.id).await?;

	info!("Password reset completed for user `{}`", user.id);

	Ok(StatusCode::OK)
}
