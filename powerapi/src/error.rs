use reqwest::StatusCode;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchErrorKind {
	/// The request never produced a response.
	Network,
	/// The endpoint answered with a non-success status.
	Status(u16),
	/// The body was not a power-status snapshot.
	Body,
}

/// Failure to fetch or parse a power-status snapshot.
///
/// Every failure is treated as transient; the message is what the
/// dashboard displays.
#[derive(Clone, Debug)]
pub struct FetchError {
	kind: FetchErrorKind,
	message: String,
}

impl FetchError {
	pub fn new(kind: FetchErrorKind, message: impl Into<String>) -> Self {
		Self {
			kind,
			message: message.into(),
		}
	}

	pub(crate) fn network(error: reqwest::Error) -> Self {
		let message = if error.is_timeout() {
			String::from("request timed out")
		} else {
			error.to_string()
		};
		Self::new(FetchErrorKind::Network, message)
	}

	pub(crate) fn status(status: StatusCode) -> Self {
		Self::new(
			FetchErrorKind::Status(status.as_u16()),
			format!(
				"HTTP {}: {}",
				status.as_u16(),
				status.canonical_reason().unwrap_or_default()
			),
		)
	}

	pub(crate) fn body(error: serde_json::Error) -> Self {
		Self::new(
			FetchErrorKind::Body,
			format!("malformed status payload: {error}"),
		)
	}

	pub fn kind(&self) -> FetchErrorKind {
		self.kind
	}

	pub fn message(&self) -> &str {
		&self.message
	}
}

impl fmt::Display for FetchError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.message)
	}
}

impl std::error::Error for FetchError {}
