use notedesk_domain::access::Denial;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Forbidden: {message}")]
	Forbidden { message: String },
	#[error("Invalid data: {message}")]
	InvalidData { message: String, fields: Vec<String> },
	#[error("No content: {message}")]
	NoContent { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl Error {
	pub fn message(&self) -> &str {
		match self {
			Self::NotFound { message }
			| Self::Forbidden { message }
			| Self::InvalidData { message, .. }
			| Self::NoContent { message }
			| Self::Storage { message } => message,
		}
	}

	pub(crate) fn invalid(message: impl Into<String>) -> Self {
		Self::InvalidData { message: message.into(), fields: Vec::new() }
	}

	pub(crate) fn not_found(message: impl Into<String>) -> Self {
		Self::NotFound { message: message.into() }
	}
}
impl From<Denial> for Error {
	fn from(denial: Denial) -> Self {
		Self::Forbidden { message: denial.message().to_string() }
	}
}
impl From<notedesk_storage::Error> for Error {
	fn from(err: notedesk_storage::Error) -> Self {
		match err {
			notedesk_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			notedesk_storage::Error::NotFound(message) => Self::NotFound { message },
		}
	}
}
