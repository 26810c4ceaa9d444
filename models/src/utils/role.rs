use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ErrorType;

/// The role an account holds. Stored on the user record, and cached on the
/// session at login time, so a role change is only observed at the next
/// login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum UserRole {
	/// A regular account. Can submit complaints and see its own
	User,
	/// Can see every complaint and every account, and is the only role
	/// allowed to change a complaint's status
	Admin,
}

impl Display for UserRole {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			UserRole::User => write!(f, "user"),
			UserRole::Admin => write!(f, "admin"),
		}
	}
}

impl FromStr for UserRole {
	type Err = ErrorType;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"user" => Ok(Self::User),
			"admin" => Ok(Self::Admin),
			_ => Err(ErrorType::WrongParameters),
		}
	}
}
