//! The constants that are used throughout the service.

use std::ops::Range;

/// The range an OTP is drawn from. The lower bound keeps the leading digit
/// non-zero, so a code is always exactly six digits.
pub const OTP_RANGE: Range<u32> = 100_000..1_000_000;

/// How long an issued OTP stays valid. Checked passively at verification
/// time; there is no background sweep.
pub const OTP_VALIDITY: time::Duration = time::Duration::minutes(5);

/// The parameters that will be used to hash, using argon2 as the hashing
/// algorithm.
pub const HASHING_PARAMS: argon2::Params =
	if let Ok(params) = argon2::Params::new(8192, 4, 4, None) {
		params
	} else {
		panic!("Failed to create hashing params");
	};
