//! Error types for the automation seam.

use thiserror::Error;

/// Result type alias for seam operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by implementations of the seam traits.
#[derive(Debug, Error)]
pub enum Error {
	/// Failed to establish a connection to a remote debugging endpoint.
	#[error("failed to connect to remote browser at '{endpoint}': {message}")]
	Connect { endpoint: String, message: String },

	/// In-page JavaScript evaluation failed.
	#[error("evaluation failed: {0}")]
	Evaluate(String),

	/// Installing a context init script failed.
	#[error("init script installation failed: {0}")]
	InitScript(String),

	/// Registering a host-exposed function failed.
	#[error("host function registration failed: {0}")]
	ExposeFunction(String),

	/// Operation attempted on a closed browser, context, or page.
	#[error("target closed: cannot perform operation on closed {0}")]
	TargetClosed(&'static str),

	/// Event channel closed unexpectedly.
	#[error("channel closed unexpectedly")]
	ChannelClosed,

	/// JSON serialization/deserialization error.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

impl Error {
	/// Returns true if this error indicates the target went away mid-operation.
	pub fn is_target_closed(&self) -> bool {
		matches!(self, Error::TargetClosed(_) | Error::ChannelClosed)
	}
}
