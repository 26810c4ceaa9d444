//! Delivery of one time passwords to the account owner.
//!
//! No mail or SMS transport is wired up; the code is written to the
//! operator-visible log instead, which is the delivery channel this
//! deployment uses.

use crate::prelude::*;

pub fn send_password_reset_otp(email: &str, otp: &str) {
	info!("Password reset OTP for {email}: {otp}");
}
