/* src/provider/error.rs */

use crate::map::MapError;
use crate::retrieved::RetrievedError;

/// Core error type for the provider module.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
	/// Parsing error from a format implementation.
	#[error("parse error: {0}")]
	Parse(String),

	/// The configuration resource does not exist.
	#[error("not found: {0}")]
	NotFound(String),

	/// No registered format matches the resource.
	#[error("unsupported format: {0}")]
	UnsupportedFormat(String),

	/// IO error from the underlying resource.
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),

	/// The parsed document is not a usable config map.
	#[error("map error: {0}")]
	Map(#[from] MapError),

	/// The retrieval context was cancelled before the resource was read.
	#[error("retrieval cancelled")]
	Cancelled,

	#[error(transparent)]
	Retrieved(#[from] RetrievedError),
}
