//! Registration, login and the OTP-based password reset flow.

mod create_account;
mod forgot_password;
mod login;
mod resend_otp;
mod reset_password;
mod verify_otp;

pub use self::{
	create_account::*,
	forgot_password::*,
	login::*,
	resend_otp::*,
	reset_password::*,
	verify_otp::*,
};
