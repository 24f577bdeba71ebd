/* tests/map_tests.rs */

use confmap::{ConfigMap, MapError};
use serde::Deserialize;
use serde_json::{Value, json};

fn sample() -> ConfigMap {
	ConfigMap::from_value(json!({
		"receivers": {
			"otlp": { "endpoint": "0.0.0.0:4317" },
			"empty": {}
		},
		"service": { "pipelines": ["traces", "metrics"] },
		"debug": null
	}))
	.unwrap()
}

#[test]
fn test_from_string_map_nests_keys() {
	let map = ConfigMap::from_string_map([
		("a::b", json!(1)),
		("a::c", json!("x")),
		("top", Value::Null),
	])
	.unwrap();

	assert_eq!(map.get("a::b"), Some(&json!(1)));
	assert_eq!(map.get("a"), Some(&json!({"b": 1, "c": "x"})));
	assert!(map.is_set("top"));
	assert!(!map.is_set("a::missing"));
}

#[test]
fn test_from_value_shapes() {
	assert!(ConfigMap::from_value(Value::Null).unwrap().is_empty());

	match ConfigMap::from_value(json!([1, 2])) {
		Err(MapError::RootNotAMap { found }) => assert_eq!(found, "array"),
		other => panic!("Expected RootNotAMap, got {:?}", other),
	}
}

#[test]
fn test_get_through_scalar_is_none() {
	let map = sample();
	assert_eq!(map.get("service::pipelines::0"), None);
	assert_eq!(map.get("receivers::otlp::endpoint"), Some(&json!("0.0.0.0:4317")));
}

#[test]
fn test_set_replaces_scalar_intermediate() {
	let mut map = sample();
	map.set("debug::verbosity", json!("detailed")).unwrap();
	assert_eq!(map.get("debug"), Some(&json!({"verbosity": "detailed"})));
}

#[test]
fn test_set_keeps_siblings_and_replaces_deep_scalars() {
	let mut map = sample();
	map.set("receivers::otlp::tls::insecure", json!(true)).unwrap();
	map.set("service::pipelines::traces", json!(["otlp"])).unwrap();

	assert_eq!(map.get("receivers::otlp::endpoint"), Some(&json!("0.0.0.0:4317")));
	assert_eq!(map.get("receivers::otlp::tls"), Some(&json!({"insecure": true})));
	assert_eq!(map.get("service::pipelines"), Some(&json!({"traces": ["otlp"]})));
	assert!(map.is_set("receivers::empty"));
}

#[test]
fn test_set_rejects_empty_segments() {
	let mut map = ConfigMap::new();
	for key in ["", "a::", "::a", "a::::b"] {
		match map.set(key, json!(1)) {
			Err(MapError::InvalidKey { .. }) => (),
			other => panic!("Expected InvalidKey for {:?}, got {:?}", key, other),
		}
	}
	assert!(map.is_empty());
}

#[test]
fn test_all_keys_sorted_leaves() {
	assert_eq!(
		sample().all_keys(),
		vec![
			"debug",
			"receivers::empty",
			"receivers::otlp::endpoint",
			"service::pipelines",
		]
	);
}

#[test]
fn test_sub() {
	let map = sample();

	let otlp = map.sub("receivers::otlp").unwrap();
	assert_eq!(otlp.get("endpoint"), Some(&json!("0.0.0.0:4317")));

	assert!(map.sub("missing").unwrap().is_empty());
	assert!(map.sub("debug").unwrap().is_empty());

	match map.sub("service::pipelines") {
		Err(MapError::NotAMap { key, found }) => {
			assert_eq!(key, "service::pipelines");
			assert_eq!(found, "array");
		}
		other => panic!("Expected NotAMap, got {:?}", other),
	}
}

#[test]
fn test_unmarshal() {
	#[derive(Debug, Deserialize, PartialEq)]
	struct Otlp {
		endpoint: String,
	}

	let otlp: Otlp = sample().sub("receivers::otlp").unwrap().unmarshal().unwrap();
	assert_eq!(otlp.endpoint, "0.0.0.0:4317");

	match sample().unmarshal::<Otlp>() {
		Err(MapError::Decode(_)) => (),
		other => panic!("Expected Decode error, got {:?}", other),
	}
}

#[test]
fn test_to_string_map_and_serde_transparent() {
	let map = sample();
	let raw = map.to_string_map();
	assert_eq!(raw.len(), map.len());

	let encoded = serde_json::to_value(&map).unwrap();
	assert_eq!(encoded, map.clone().into_value());
	let decoded: ConfigMap = serde_json::from_value(encoded).unwrap();
	assert_eq!(decoded, map);
}
