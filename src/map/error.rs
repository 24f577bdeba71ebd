/* src/map/error.rs */

/// Errors raised while reading or reshaping a [`ConfigMap`](super::ConfigMap).
#[derive(Debug, thiserror::Error)]
pub enum MapError {
	/// The key is empty or contains an empty segment.
	#[error("invalid key: {key:?}")]
	InvalidKey { key: String },

	/// The value under `key` exists but is not a mapping.
	#[error("value at '{key}' is {found}, not a map")]
	NotAMap { key: String, found: &'static str },

	/// A parsed document whose top level is not a mapping.
	#[error("config root is {found}, not a map")]
	RootNotAMap { found: &'static str },

	/// Conversion to a typed value failed.
	#[error("decode error: {0}")]
	Decode(#[from] serde_json::Error),
}
