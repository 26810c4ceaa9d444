#![forbid(unsafe_code)]

//! The wire-level contract of the complaint tracking API.
//!
//! Every endpoint's request and response types live here, one file per
//! endpoint, along with the shared DTOs and the [`ErrorType`] enum that
//! maps every service error to its HTTP status and user-facing message.

pub mod api;
pub mod utils;

mod error;

pub use self::error::*;

/// The commonly used imports for this crate.
pub mod prelude {
	pub use crate::{error::ErrorType, utils::UserRole};
}
