/* src/retrieved/error.rs */

/// Errors raised by [`Retrieved`](super::Retrieved) itself.
///
/// Failures of the getter or the closer are never wrapped in this type; they
/// reach the caller exactly as the delegate returned them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RetrievedError {
	/// Construction was attempted without a getter.
	#[error("nil getter")]
	NilGetter,
}
