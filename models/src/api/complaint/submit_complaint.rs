use serde::{Deserialize, Serialize};

use super::Complaint;

/// Route to submit a new complaint. Requires a login session; the new
/// complaint always starts in the `Pending` status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitComplaintRequest {
	/// A short label for what the complaint is about
	pub category: String,
	/// The complaint itself, free text
	pub description: String,
}

/// The complaint as created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitComplaintResponse {
	/// The stored complaint, including its assigned id
	pub complaint: Complaint,
}
