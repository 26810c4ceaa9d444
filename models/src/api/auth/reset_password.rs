use serde::{Deserialize, Serialize};

/// Route to complete a password reset. Requires the reset token minted by
/// a successful OTP verification; the token is consumed on success and
/// every live login session of the account is invalidated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
	/// The reset token returned by the verify-otp step
	pub reset_token: String,
	/// The new password
	pub password: String,
}
