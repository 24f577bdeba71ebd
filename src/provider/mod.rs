/* src/provider/mod.rs */

//!
//! Named producers of [`Retrieved`] handles.
//!
//! A [`Provider`] owns the knowledge of where configuration lives; each call to
//! [`Provider::retrieve`] produces a fresh handle whose snapshot was read and
//! parsed inside the handle's getter.

mod error;
pub mod format;
mod source;

pub use error::ProviderError;
pub use format::AnyFormat;
pub use source::MemoryProvider;

#[cfg(feature = "fs")]
pub use source::FileProvider;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::map::ConfigMap;
use crate::retrieved::Retrieved;

/// A handle produced by a [`Provider`].
pub type ProvidedMap = Retrieved<ConfigMap, ProviderError>;

/// Abstract configuration source that yields resolved snapshots.
#[async_trait]
pub trait Provider: Send + Sync {
	/// Reads the configuration. `ctx` is threaded into the handle's getter.
	async fn retrieve(&self, ctx: CancellationToken) -> Result<ProvidedMap, ProviderError>;

	/// Releases provider-wide resources. Handles must be closed separately.
	async fn shutdown(&self, _ctx: CancellationToken) -> Result<(), ProviderError> {
		Ok(())
	}
}
