use std::{
	error::Error as StdError,
	fmt::{Display, Formatter},
	mem,
};

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::{de::Error, Deserialize, Serialize};
use serde_json::json;

/// A list of all the possible errors that can be returned by the API
#[derive(Debug)]
pub enum ErrorType {
	/// The password and its confirmation did not match at registration
	PasswordsDoNotMatch,
	/// The email provided is not available. It is being used by another account
	EmailUnavailable,
	/// The email/password combination did not verify. The two cases are
	/// deliberately indistinguishable to the caller
	InvalidPassword,
	/// No account exists with the given email
	UserNotFound,
	/// The one time password provided does not match the pending code
	InvalidOtp,
	/// The one time password matched, but its validity window has passed.
	/// The reset flow restarts from the beginning
	OtpExpired,
	/// The request did not carry a valid session
	Unauthenticated,
	/// The session is valid but is not allowed to perform the requested
	/// action
	Unauthorized,
	/// The resource that the user is trying to access does not exist
	ResourceDoesNotExist,
	/// The parameters sent with the request is invalid. This would ideally not
	/// happen unless there is a bug in the client
	WrongParameters,
	/// An internal server error occurred. This should not happen unless there
	/// is a bug in the server
	InternalServerError(anyhow::Error),
}

impl ErrorType {
	/// Returns the status code that should be used for this error. Note that
	/// this is only the default status code and specific endpoints can override
	/// this if needed
	pub fn default_status_code(&self) -> StatusCode {
		match self {
			Self::PasswordsDoNotMatch => StatusCode::BAD_REQUEST,
			Self::EmailUnavailable => StatusCode::CONFLICT,
			Self::InvalidPassword => StatusCode::UNAUTHORIZED,
			Self::UserNotFound => StatusCode::BAD_REQUEST,
			Self::InvalidOtp => StatusCode::BAD_REQUEST,
			Self::OtpExpired => StatusCode::GONE,
			Self::Unauthenticated => StatusCode::UNAUTHORIZED,
			Self::Unauthorized => StatusCode::UNAUTHORIZED,
			Self::ResourceDoesNotExist => StatusCode::NOT_FOUND,
			Self::WrongParameters => StatusCode::BAD_REQUEST,
			Self::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// Returns the message that should be used for this error. This is the
	/// message that is user-friendly and can be shown to the user
	pub fn message(&self) -> impl Into<String> {
		match self {
			Self::PasswordsDoNotMatch => "Passwords do not match",
			Self::EmailUnavailable => "An account already exists with that email",
			Self::InvalidPassword => "Invalid email or password",
			Self::UserNotFound => "No account exists with that email",
			Self::InvalidOtp => "Invalid OTP",
			Self::OtpExpired => "The OTP has expired. Please request a new one",
			Self::Unauthenticated => "Please login to continue",
			Self::Unauthorized => "You are not authorized to perform that action",
			Self::ResourceDoesNotExist => "The resource you are trying to access does not exist",
			Self::WrongParameters => "The parameters sent with that request is invalid",
			Self::InternalServerError(_) => "An internal server error has occured",
		}
	}

	/// Creates an [`ErrorType::InternalServerError`] with the given message
	pub fn server_error(message: impl Display) -> Self {
		Self::InternalServerError(anyhow::anyhow!(message.to_string()))
	}
}

impl PartialEq for ErrorType {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::InternalServerError(_), Self::InternalServerError(_)) => true,
			_ => mem::discriminant(self) == mem::discriminant(other),
		}
	}
}

impl Eq for ErrorType {}

impl<Error> From<Error> for ErrorType
where
	Error: StdError + Send + Sync + 'static,
{
	fn from(error: Error) -> Self {
		Self::InternalServerError(error.into())
	}
}

impl Clone for ErrorType {
	fn clone(&self) -> Self {
		match self {
			Self::PasswordsDoNotMatch => Self::PasswordsDoNotMatch,
			Self::EmailUnavailable => Self::EmailUnavailable,
			Self::InvalidPassword => Self::InvalidPassword,
			Self::UserNotFound => Self::UserNotFound,
			Self::InvalidOtp => Self::InvalidOtp,
			Self::OtpExpired => Self::OtpExpired,
			Self::Unauthenticated => Self::Unauthenticated,
			Self::Unauthorized => Self::Unauthorized,
			Self::ResourceDoesNotExist => Self::ResourceDoesNotExist,
			Self::WrongParameters => Self::WrongParameters,
			Self::InternalServerError(arg0) => {
				Self::InternalServerError(anyhow::anyhow!(arg0.to_string()))
			}
		}
	}
}

impl Display for ErrorType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.message().into())
	}
}

impl IntoResponse for ErrorType {
	fn into_response(self) -> Response {
		let status_code = self.default_status_code();
		let message: String = self.message().into();

		(
			status_code,
			Json(json!({
				"success": false,
				"error": self,
				"message": message,
			})),
		)
			.into_response()
	}
}

impl Serialize for ErrorType {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		match self {
			Self::PasswordsDoNotMatch => serializer.serialize_str("passwordsDoNotMatch"),
			Self::EmailUnavailable => serializer.serialize_str("emailUnavailable"),
			Self::InvalidPassword => serializer.serialize_str("invalidPassword"),
			Self::UserNotFound => serializer.serialize_str("userNotFound"),
			Self::InvalidOtp => serializer.serialize_str("invalidOtp"),
			Self::OtpExpired => serializer.serialize_str("otpExpired"),
			Self::Unauthenticated => serializer.serialize_str("unauthenticated"),
			Self::Unauthorized => serializer.serialize_str("unauthorized"),
			Self::ResourceDoesNotExist => serializer.serialize_str("resourceDoesNotExist"),
			Self::WrongParameters => serializer.serialize_str("wrongParameters"),
			Self::InternalServerError(_) => serializer.serialize_str("internalServerError"),
		}
	}
}

impl<'de> Deserialize<'de> for ErrorType {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let string = String::deserialize(deserializer)?;
		Ok(match string.as_str() {
			"passwordsDoNotMatch" => Self::PasswordsDoNotMatch,
			"emailUnavailable" => Self::EmailUnavailable,
			"invalidPassword" => Self::InvalidPassword,
			"userNotFound" => Self::UserNotFound,
			"invalidOtp" => Self::InvalidOtp,
			"otpExpired" => Self::OtpExpired,
			"unauthenticated" => Self::Unauthenticated,
			"unauthorized" => Self::Unauthorized,
			"resourceDoesNotExist" => Self::ResourceDoesNotExist,
			"wrongParameters" => Self::WrongParameters,
			"internalServerError" => {
				Self::InternalServerError(anyhow::anyhow!("Internal Server Error"))
			}
			unknown => return Err(Error::custom(format!("unknown variant: {unknown}"))),
		})
	}
}
