use serde::{Deserialize, Serialize};

/// Route for admins to overwrite a complaint's status. The new status is
/// stored verbatim; an unknown complaint id is silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComplaintStatusRequest {
	/// The id of the complaint to update
	pub id: i64,
	/// The new status, stored as given
	pub status: String,
}
