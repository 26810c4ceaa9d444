use serde::{Deserialize, Serialize};

/// Route to issue a fresh one time password, overwriting whatever code is
/// still pending for the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendOtpRequest {
	/// The email of the account whose code should be re-issued
	pub email: String,
}
