//! Account data exposed through the API.

use serde::{Deserialize, Serialize};

use crate::utils::UserRole;

/// The public view of an account, as listed on the admin dashboard. The
/// credential fields never leave the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
	/// The id of the account
	pub id: i64,
	/// The email the account was registered with
	pub email: String,
	/// The role the account currently holds
	pub role: UserRole,
}
