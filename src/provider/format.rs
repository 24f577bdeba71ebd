/* src/provider/format.rs */

use serde::de::DeserializeOwned;

use super::ProviderError;
use crate::map::ConfigMap;

/// Document encodings a provider can decode. JSON is always available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyFormat {
	Json,
	#[cfg(feature = "toml")]
	Toml,
	#[cfg(feature = "yaml")]
	Yaml,
}

impl AnyFormat {
	/// Finds the enabled format that claims `ext`. Matching ignores ASCII case.
	pub fn from_extension(ext: &str) -> Option<Self> {
		match ext.to_ascii_lowercase().as_str() {
			"json" => Some(Self::Json),
			#[cfg(feature = "toml")]
			"toml" => Some(Self::Toml),
			#[cfg(feature = "yaml")]
			"yaml" | "yml" => Some(Self::Yaml),
			_ => None,
		}
	}

	/// File extensions claimed by this format.
	pub fn extensions(&self) -> &'static [&'static str] {
		match self {
			Self::Json => &["json"],
			#[cfg(feature = "toml")]
			Self::Toml => &["toml"],
			#[cfg(feature = "yaml")]
			Self::Yaml => &["yaml", "yml"],
		}
	}

	/// Decodes `input` into any deserializable type.
	pub fn parse<T: DeserializeOwned>(&self, input: &[u8]) -> Result<T, ProviderError> {
		match self {
			Self::Json => serde_json::from_slice(input).map_err(parse_error),
			#[cfg(feature = "toml")]
			Self::Toml => {
				let s = std::str::from_utf8(input).map_err(parse_error)?;
				toml::from_str(s).map_err(parse_error)
			}
			#[cfg(feature = "yaml")]
			Self::Yaml => serde_yaml::from_slice(input).map_err(parse_error),
		}
	}

	/// Decodes a whole document into a config map.
	///
	/// A blank document is an empty map in every format, so an empty file is
	/// a valid, empty configuration rather than a parse error.
	pub fn parse_map(&self, input: &[u8]) -> Result<ConfigMap, ProviderError> {
		if input.iter().all(u8::is_ascii_whitespace) {
			return Ok(ConfigMap::new());
		}
		let value: serde_json::Value = self.parse(input)?;
		Ok(ConfigMap::from_value(value)?)
	}
}

fn parse_error(e: impl std::fmt::Display) -> ProviderError {
	ProviderError::Parse(e.to_string())
}
