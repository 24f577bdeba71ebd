/* tests/file_provider_tests.rs */

#![cfg(feature = "fs")]

use confmap::CancellationToken;
use confmap::provider::{AnyFormat, FileProvider, Provider, ProviderError};
use serde_json::json;

#[tokio::test]
async fn test_file_provider_json() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("config.json");
	tokio::fs::write(&path, br#"{"receivers": {"otlp": {"port": 4317}}}"#).await?;

	let provider = FileProvider::new(&path);
	let ret = provider.retrieve(CancellationToken::new()).await?;
	assert_eq!(ret.get().get("receivers::otlp::port"), Some(&json!(4317)));

	// The handle keeps its snapshot after the file changes.
	tokio::fs::write(&path, br#"{"receivers": {}}"#).await?;
	assert_eq!(ret.get().get("receivers::otlp::port"), Some(&json!(4317)));

	let fresh = provider.retrieve(CancellationToken::new()).await?;
	assert!(!fresh.get().is_set("receivers::otlp"));

	ret.close(CancellationToken::new()).await?;
	fresh.close(CancellationToken::new()).await?;
	Ok(())
}

#[tokio::test]
async fn test_file_provider_not_found() {
	let dir = tempfile::tempdir().unwrap();
	let provider = FileProvider::new(dir.path().join("missing.json"));

	match provider.retrieve(CancellationToken::new()).await {
		Err(ProviderError::NotFound(path)) => assert!(path.ends_with("missing.json")),
		other => panic!("Expected NotFound, got {:?}", other),
	}
}

#[tokio::test]
async fn test_file_provider_unsupported_extension() {
	for name in ["config.ini", "config"] {
		let provider = FileProvider::new(name);
		match provider.retrieve(CancellationToken::new()).await {
			Err(ProviderError::UnsupportedFormat(_)) => (),
			other => panic!("Expected UnsupportedFormat for {}, got {:?}", name, other),
		}
	}
}

#[tokio::test]
async fn test_file_provider_explicit_format() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("config.conf");
	tokio::fs::write(&path, br#"{"a": true}"#).await?;

	let provider = FileProvider::new(&path).with_format(AnyFormat::Json);
	assert_eq!(provider.path(), path.as_path());
	let ret = provider.retrieve(CancellationToken::new()).await?;
	assert_eq!(ret.get().get("a"), Some(&json!(true)));
	Ok(())
}

#[tokio::test]
async fn test_file_provider_cancelled() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("config.json");
	tokio::fs::write(&path, b"{}").await?;

	let ctx = CancellationToken::new();
	ctx.cancel();

	match FileProvider::new(&path).retrieve(ctx).await {
		Err(ProviderError::Cancelled) => (),
		other => panic!("Expected Cancelled, got {:?}", other),
	}
	Ok(())
}

#[cfg(feature = "toml")]
#[tokio::test]
async fn test_file_provider_toml_by_extension() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("config.toml");
	tokio::fs::write(&path, b"[service]\nname = \"collector\"\n").await?;

	let ret = FileProvider::new(&path).retrieve(CancellationToken::new()).await?;
	assert_eq!(ret.get().get("service::name"), Some(&json!("collector")));
	Ok(())
}
