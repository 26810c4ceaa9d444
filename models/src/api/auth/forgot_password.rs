use serde::{Deserialize, Serialize};

/// Route to start the password reset flow. Issues a one time password for
/// the account and delivers it over the operator-visible channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
	/// The email of the account whose password should be reset
	pub email: String,
}
