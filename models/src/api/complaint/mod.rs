//! Submitting, listing and administering complaints.

mod list_complaints;
mod submit_complaint;
mod update_complaint_status;

pub use self::{list_complaints::*, submit_complaint::*, update_complaint_status::*};

use serde::{Deserialize, Serialize};

/// A complaint, exactly as stored. The status is a free-form string (the
/// vocabulary is deliberately unconstrained); complaints are never
/// deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
	/// The id of the complaint
	pub id: i64,
	/// A short label for what the complaint is about
	pub category: String,
	/// The complaint itself, free text
	pub description: String,
	/// Starts out as `Pending`; overwritten by admins with arbitrary text
	pub status: String,
	/// The id of the account that submitted the complaint
	pub user_id: i64,
}
