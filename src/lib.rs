/* src/lib.rs */

//!
//! Deferred configuration retrieval.
//!
//! This crate integrates three components:
//!
//! - **retrieved**: [`Retrieved`], a configuration snapshot fetched once by a
//!   getter, bundled with the closer that releases what the fetch held open.
//! - **map**: [`ConfigMap`], the nested key/value snapshot most getters produce.
//! - **provider**: the [`Provider`](provider::Provider) trait with in-memory and
//!   file implementations that hand out `Retrieved` handles.
//!
//! ## Feature Flags
//!
//! - `full`: Enables all features.
//! - `provider` (default): Enables the `provider` module with JSON support.
//! - `fs`: File provider backed by `tokio::fs`.
//! - `toml`, `yaml`: Additional provider formats.
//! - `logging`: Emits diagnostics through the `log` facade.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use confmap::{CancellationToken, ConfigMap, Retrieved, with_close};
//!
//! # async fn run() -> Result<(), confmap::BoxError> {
//! let ret: Retrieved = Retrieved::new(
//! 	|_ctx| async { Ok(ConfigMap::new()) },
//! 	[with_close(|_ctx| async { Ok(()) })],
//! )
//! .await?;
//!
//! let cfg = ret.get();
//! assert!(cfg.is_empty());
//! ret.close(CancellationToken::new()).await?;
//! # Ok(())
//! # }
//! ```

pub mod map;
#[cfg(feature = "provider")]
pub mod provider;
pub mod retrieved;

pub use map::{ConfigMap, KEY_DELIMITER, MapError};
pub use retrieved::{BoxError, Retrieved, RetrievedBuilder, RetrievedError, RetrievedOption, with_close};
pub use tokio_util::sync::CancellationToken;
