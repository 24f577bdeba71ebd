/* src/retrieved/mod.rs */

//!
//! A configuration snapshot fetched once, plus the action that releases it.
//!
//! The getter runs eagerly during construction. [`Retrieved::get`] then hands
//! out the stored snapshot without touching the getter again, and
//! [`Retrieved::close`] runs the closer supplied through [`with_close`].

mod builder;
mod error;
mod option;

pub use builder::RetrievedBuilder;
pub use error::RetrievedError;
pub use option::{RetrievedOption, with_close};

use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio_util::sync::CancellationToken;

use crate::map::ConfigMap;
use option::{CloseFn, GetFn, Settings};

#[cfg(feature = "logging")]
use log::{debug, warn};

/// Boxed error used when the caller does not pick a concrete error type.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A resolved configuration snapshot and its deferred release action.
pub struct Retrieved<T = ConfigMap, E = BoxError> {
	snapshot: Arc<T>,
	closer: Mutex<Option<CloseFn<E>>>,
	closed: AtomicBool,
}

impl<T, E> Retrieved<T, E>
where
	T: Send + Sync + 'static,
	E: 'static,
{
	/// Invokes `getter` once with a background context and stores its snapshot.
	///
	/// A getter failure is returned as-is and no handle is produced.
	pub async fn new<G, Fut, I>(getter: G, options: I) -> Result<Self, E>
	where
		G: FnOnce(CancellationToken) -> Fut + Send + 'static,
		Fut: Future<Output = Result<T, E>> + Send + 'static,
		I: IntoIterator<Item = RetrievedOption<E>>,
	{
		Self::resolve(option::boxed_getter(getter), CancellationToken::new(), options).await
	}

	/// Creates a builder for a handle.
	pub fn builder() -> RetrievedBuilder<T, E> {
		RetrievedBuilder::new()
	}

	pub(crate) async fn resolve<I>(getter: GetFn<T, E>, ctx: CancellationToken, options: I) -> Result<Self, E>
	where
		I: IntoIterator<Item = RetrievedOption<E>>,
	{
		let snapshot = match getter(ctx).await {
			Ok(snapshot) => snapshot,
			Err(e) => {
				#[cfg(feature = "logging")]
				debug!("Getter failed, no handle produced");
				return Err(e);
			}
		};

		let mut settings = Settings::default();
		for opt in options {
			opt.apply(&mut settings);
		}

		Ok(Self {
			snapshot: Arc::new(snapshot),
			closer: Mutex::new(settings.closer),
			closed: AtomicBool::new(false),
		})
	}
}

impl<T, E> Retrieved<T, E> {
	/// Returns the snapshot produced at construction. Never re-runs the getter.
	///
	/// Takes no context and cannot fail: the snapshot was resolved when the
	/// handle was built, so there is no I/O left to cancel or report.
	pub fn get(&self) -> Arc<T> {
		Arc::clone(&self.snapshot)
	}

	/// Borrows the snapshot.
	pub fn snapshot(&self) -> &T {
		&self.snapshot
	}

	/// Runs the closer with `ctx` and returns its result unmodified.
	///
	/// Without a closer this always succeeds. The closer runs at most once:
	/// repeated or concurrent calls after the first return `Ok(())`. The
	/// snapshot stays readable whatever the outcome.
	pub async fn close(&self, ctx: CancellationToken) -> Result<(), E> {
		if self.closed.swap(true, Ordering::AcqRel) {
			#[cfg(feature = "logging")]
			debug!("Retrieved already closed, skipping closer");
			return Ok(());
		}

		// Take the closer out so the lock is not held across the await.
		let closer = self
			.closer
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.take();

		match closer {
			Some(closer) => {
				#[cfg(feature = "logging")]
				debug!("Invoking closer for retrieved config");
				closer(ctx).await
			}
			None => Ok(()),
		}
	}

	/// Returns true once [`close`](Retrieved::close) has been called.
	pub fn is_closed(&self) -> bool {
		self.closed.load(Ordering::Acquire)
	}
}

impl<T, E> Drop for Retrieved<T, E> {
	fn drop(&mut self) {
		#[cfg(feature = "logging")]
		{
			let pending = self
				.closer
				.get_mut()
				.map(|closer| closer.is_some())
				.unwrap_or(false);
			if pending {
				warn!("Retrieved config dropped without close, its resources may leak");
			}
		}
	}
}

impl<T: fmt::Debug, E> fmt::Debug for Retrieved<T, E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Retrieved")
			.field("snapshot", &self.snapshot)
			.field("closed", &self.is_closed())
			.finish_non_exhaustive()
	}
}
