//! Business logic shared by the route handlers: credential hashing, OTP
//! issuance, session establishment, and OTP delivery.

mod auth;
mod notifier;

pub use self::{auth::*, notifier::*};
