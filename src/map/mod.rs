/* src/map/mod.rs */

//!
//! The structured snapshot a getter usually produces.
//!
//! Nested entries are addressed with [`KEY_DELIMITER`], so `"exporters::otlp"`
//! names the `otlp` entry inside the `exporters` map.

mod error;

pub use error::MapError;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Separator between the segments of a nested key.
pub const KEY_DELIMITER: &str = "::";

/// An ordered, nested key/value configuration mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigMap {
	root: Map<String, Value>,
}

impl ConfigMap {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a map from flat entries. Keys containing [`KEY_DELIMITER`] nest.
	pub fn from_string_map<K, I>(entries: I) -> Result<Self, MapError>
	where
		K: AsRef<str>,
		I: IntoIterator<Item = (K, Value)>,
	{
		let mut map = Self::new();
		for (key, value) in entries {
			map.set(key.as_ref(), value)?;
		}
		Ok(map)
	}

	/// Wraps a parsed document. `null` (an empty document) becomes an empty map.
	pub fn from_value(value: Value) -> Result<Self, MapError> {
		match value {
			Value::Object(root) => Ok(Self { root }),
			Value::Null => Ok(Self::new()),
			other => Err(MapError::RootNotAMap {
				found: json_type_name(&other),
			}),
		}
	}

	/// Looks up a nested value.
	pub fn get(&self, key: &str) -> Option<&Value> {
		let mut segments = key.split(KEY_DELIMITER);
		let mut current = self.root.get(segments.next()?)?;
		for part in segments {
			current = current.as_object()?.get(part)?;
		}
		Some(current)
	}

	/// Returns true if `key` resolves to a value, including `null`.
	pub fn is_set(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	/// Sets a nested value, creating intermediate maps.
	///
	/// An intermediate that is not a map is replaced by one.
	pub fn set(&mut self, key: &str, value: Value) -> Result<(), MapError> {
		if key.split(KEY_DELIMITER).any(str::is_empty) {
			return Err(MapError::InvalidKey {
				key: key.to_string(),
			});
		}

		let segments: Vec<&str> = key.split(KEY_DELIMITER).collect();
		insert_path(&mut self.root, &segments, value);
		Ok(())
	}

	/// Returns every leaf key, sorted.
	///
	/// Scalars, arrays, `null` and empty maps are leaves.
	pub fn all_keys(&self) -> Vec<String> {
		let mut keys = Vec::new();
		collect_keys("", &self.root, &mut keys);
		keys.sort();
		keys
	}

	/// Extracts the map stored under `key`.
	///
	/// A missing key yields an empty map.
	pub fn sub(&self, key: &str) -> Result<ConfigMap, MapError> {
		match self.get(key) {
			None | Some(Value::Null) => Ok(Self::new()),
			Some(Value::Object(obj)) => Ok(Self { root: obj.clone() }),
			Some(other) => Err(MapError::NotAMap {
				key: key.to_string(),
				found: json_type_name(other),
			}),
		}
	}

	/// Returns a copy of the underlying mapping.
	pub fn to_string_map(&self) -> Map<String, Value> {
		self.root.clone()
	}

	pub fn into_value(self) -> Value {
		Value::Object(self.root)
	}

	/// Decodes the whole map into a typed configuration.
	pub fn unmarshal<T: DeserializeOwned>(&self) -> Result<T, MapError> {
		Ok(serde_json::from_value(Value::Object(self.root.clone()))?)
	}

	pub fn len(&self) -> usize {
		self.root.len()
	}

	pub fn is_empty(&self) -> bool {
		self.root.is_empty()
	}
}

impl From<Map<String, Value>> for ConfigMap {
	fn from(root: Map<String, Value>) -> Self {
		Self { root }
	}
}

impl TryFrom<Value> for ConfigMap {
	type Error = MapError;

	fn try_from(value: Value) -> Result<Self, Self::Error> {
		Self::from_value(value)
	}
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

fn collect_keys(prefix: &str, obj: &Map<String, Value>, keys: &mut Vec<String>) {
	for (key, value) in obj {
		let full_key = if prefix.is_empty() {
			key.clone()
		} else {
			format!("{prefix}{KEY_DELIMITER}{key}")
		};
		match value {
			Value::Object(inner) if !inner.is_empty() => collect_keys(&full_key, inner, keys),
			_ => keys.push(full_key),
		}
	}
}

fn insert_path(obj: &mut Map<String, Value>, segments: &[&str], value: Value) {
	let Some((head, rest)) = segments.split_first() else {
		return;
	};
	if rest.is_empty() {
		obj.insert(head.to_string(), value);
		return;
	}

	match obj.entry(head.to_string()).or_insert(Value::Null) {
		Value::Object(inner) => insert_path(inner, rest, value),
		slot => {
			let mut inner = Map::new();
			insert_path(&mut inner, rest, value);
			*slot = Value::Object(inner);
		}
	}
}
