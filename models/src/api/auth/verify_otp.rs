use serde::{Deserialize, Serialize};

/// Route to verify a pending one time password. A successful verification
/// binds the reset slot to the account and returns its token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
	/// The email the code was issued for
	pub email: String,
	/// The six digit code, exactly as delivered
	pub otp: String,
}

/// The reset slot minted by a successful verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpResponse {
	/// Authorizes exactly one password reset for this account
	pub reset_token: String,
}
