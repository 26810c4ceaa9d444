use serde::{Deserialize, Serialize};

use super::Complaint;
use crate::api::user::UserSummary;

/// The dashboard listing, scoped by the caller's role: admins receive
/// every complaint plus the account listing, everyone else receives
/// exactly their own complaints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListComplaintsResponse {
	/// The complaints visible to the caller
	pub complaints: Vec<Complaint>,
	/// Every account in the system. Only present for admin callers
	#[serde(skip_serializing_if = "Option::is_none")]
	pub users: Option<Vec<UserSummary>>,
}
