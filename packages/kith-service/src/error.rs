pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Store unavailable: {message}")]
	StoreUnavailable { message: String },
	#[error("Data corruption: {message}")]
	DataCorruption { message: String },
}
impl From<color_eyre::Report> for Error {
	fn from(err: color_eyre::Report) -> Self {
		Self::StoreUnavailable { message: err.to_string() }
	}
}
