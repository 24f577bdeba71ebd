/* src/provider/source/file.rs */

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio_util::sync::CancellationToken;

use super::super::{AnyFormat, ProvidedMap, Provider, ProviderError};
use crate::retrieved::Retrieved;

/// A provider reading a single configuration file with `tokio::fs`.
///
/// The file is read on every [`retrieve`](Provider::retrieve), never cached.
#[derive(Debug, Clone)]
pub struct FileProvider {
	path: PathBuf,
	format: Option<AnyFormat>,
}

impl FileProvider {
	/// Creates a provider for `path`, picking the format from its extension.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			format: None,
		}
	}

	/// Forces a format regardless of the file extension.
	pub fn with_format(mut self, format: AnyFormat) -> Self {
		self.format = Some(format);
		self
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	fn resolve_format(&self) -> Result<AnyFormat, ProviderError> {
		if let Some(format) = self.format {
			return Ok(format);
		}

		let ext = self
			.path
			.extension()
			.and_then(|ext| ext.to_str())
			.ok_or_else(|| ProviderError::UnsupportedFormat("missing extension".to_string()))?;

		AnyFormat::from_extension(ext).ok_or_else(|| ProviderError::UnsupportedFormat(ext.to_string()))
	}
}

#[async_trait]
impl Provider for FileProvider {
	async fn retrieve(&self, ctx: CancellationToken) -> Result<ProvidedMap, ProviderError> {
		let format = self.resolve_format()?;
		let path = self.path.clone();

		Retrieved::builder()
			.getter(move |ctx: CancellationToken| async move {
				#[cfg(feature = "logging")]
				log::debug!("Reading config file {:?} as {:?}", path, format);

				let bytes = tokio::select! {
					biased;
					_ = ctx.cancelled() => return Err(ProviderError::Cancelled),
					res = fs::read(&path) => match res {
						Ok(bytes) => bytes,
						Err(e) if e.kind() == ErrorKind::NotFound => {
							return Err(ProviderError::NotFound(path.display().to_string()));
						}
						Err(e) => return Err(ProviderError::Io(e)),
					},
				};

				let parsed = format.parse_map(&bytes);
				#[cfg(feature = "logging")]
				if let Err(ref e) = parsed {
					log::warn!("Failed to parse config file {:?}: {}", path, e);
				}
				parsed
			})
			.context(ctx)
			.build()
			.await
	}
}
