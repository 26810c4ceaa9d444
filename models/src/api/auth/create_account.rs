use serde::{Deserialize, Serialize};

/// Route to create a new user account. The password has to be sent twice
/// and both copies must match. New accounts always start with the `user`
/// role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
	/// The email of the account. Must not be in use by another account
	pub email: String,
	/// The password of the account
	pub password: String,
	/// A confirmation of the password. Must match `password` exactly
	pub confirm_password: String,
}
