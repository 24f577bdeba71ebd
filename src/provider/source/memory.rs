/* src/provider/source/memory.rs */

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::super::{AnyFormat, ProvidedMap, Provider, ProviderError};
use crate::retrieved::Retrieved;

/// A provider serving a fixed in-memory document, useful for tests and embedded defaults.
#[derive(Debug, Clone)]
pub struct MemoryProvider {
	bytes: Arc<[u8]>,
	format: AnyFormat,
}

impl MemoryProvider {
	/// Creates a provider for `bytes` encoded as `format`.
	pub fn new(bytes: impl Into<Vec<u8>>, format: AnyFormat) -> Self {
		let bytes: Vec<u8> = bytes.into();
		Self {
			bytes: bytes.into(),
			format,
		}
	}

	/// Shorthand for a JSON document.
	pub fn json(bytes: impl Into<Vec<u8>>) -> Self {
		Self::new(bytes, AnyFormat::Json)
	}
}

#[async_trait]
impl Provider for MemoryProvider {
	async fn retrieve(&self, ctx: CancellationToken) -> Result<ProvidedMap, ProviderError> {
		let bytes = Arc::clone(&self.bytes);
		let format = self.format;

		Retrieved::builder()
			.getter(move |_ctx| async move {
				let parsed = format.parse_map(&bytes);
				#[cfg(feature = "logging")]
				if let Err(ref e) = parsed {
					log::warn!("Failed to parse in-memory {:?} config: {}", format, e);
				}
				parsed
			})
			.context(ctx)
			.build()
			.await
	}
}
