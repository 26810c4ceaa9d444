use argon2::{
	password_hash::SaltString,
	Algorithm,
	Argon2,
	PasswordHash,
	PasswordHasher,
	PasswordVerifier,
	Version,
};
use rand::Rng;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
	db::{self, User},
	prelude::*,
	service,
};

/// Hashes a password with the configured pepper and a fresh salt,
/// returning the PHC string that goes into the `password` column.
pub fn hash_password(config: &AppConfig, password: &str) -> Result<String, ErrorType> {
	Ok(Argon2::new_with_secret(
		config.password_pepper.as_bytes(),
		Algorithm::Argon2id,
		Version::V0x13,
		constants::HASHING_PARAMS,
	)
	.inspect_err(|err| {
		error!("Error creating Argon2: `{err}`");
	})
	.map_err(ErrorType::server_error)?
	.hash_password(
		password.as_bytes(),
		SaltString::generate(&mut rand::thread_rng()).as_salt(),
	)
	.inspect_err(|err| {
		error!("Error hashing password: `{err}`");
	})
	.map_err(ErrorType::server_error)?
	.to_string())
}

/// Verifies a password against a stored PHC string.
pub fn validate_hash(
	config: &AppConfig,
	password: &str,
	hashed: &str,
) -> Result<bool, ErrorType> {
	Ok(Argon2::new_with_secret(
		config.password_pepper.as_bytes(),
		Algorithm::Argon2id,
		Version::V0x13,
		constants::HASHING_PARAMS,
	)
	.inspect_err(|err| {
		error!("Error creating Argon2: `{err}`");
	})
	.map_err(ErrorType::server_error)?
	.verify_password(
		password.as_bytes(),
		&PasswordHash::new(hashed).map_err(ErrorType::server_error)?,
	)
	.is_ok())
}

/// Generates a new six digit one time password.
pub fn generate_new_otp() -> String {
	rand::thread_rng().gen_range(constants::OTP_RANGE).to_string()
}

/// Issues a fresh OTP for the user, overwriting any code that is still
/// pending, and hands it to the notifier. Returns the code.
pub async fn issue_password_reset_otp(
	connection: &mut DatabaseConnection,
	user: &User,
) -> Result<String, ErrorType> {
	let otp = generate_new_otp();
	let otp_expiry = OffsetDateTime::now_utc() + constants::OTP_VALIDITY;

	db::set_password_reset_otp(connection, user.id, &otp, &otp_expiry).await?;

	service::send_password_reset_otp(&user.email, &otp);

	Ok(otp)
}

/// Establishes a fresh login session bound to the user's id and its role
/// as of right now, and returns the session token.
pub async fn sign_in_user(
	connection: &mut DatabaseConnection,
	user: &User,
) -> Result<String, ErrorType> {
	let token = Uuid::new_v4().to_string();

	db::add_user_session(
		connection,
		&token,
		user.id,
		user.role,
		&OffsetDateTime::now_utc(),
	)
	.await?;

	Ok(token)
}

/// Binds the reset slot to the user and returns its token. The token
/// authorizes exactly one password reset completion.
pub async fn create_password_reset_session(
	connection: &mut DatabaseConnection,
	user: &User,
) -> Result<String, ErrorType> {
	let token = Uuid::new_v4().to_string();

	db::add_password_reset_session(
		connection,
		&token,
		user.id,
		&OffsetDateTime::now_utc(),
	)
	.await?;

	Ok(token)
}
