use serde::{Deserialize, Serialize};

/// Route to login and start a new user session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
	/// The email of the user
	pub email: String,
	/// The password of the user
	pub password: String,
}

/// The session established by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
	/// The opaque session token. Sent back as a bearer credential on every
	/// protected route, and valid until logout or a password reset
	pub access_token: String,
}
