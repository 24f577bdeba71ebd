/* src/retrieved/builder.rs */

use std::future::Future;

use tokio_util::sync::CancellationToken;

use super::option::{self, GetFn};
use super::{Retrieved, RetrievedError, RetrievedOption, with_close};

/// Builder for [`Retrieved`].
pub struct RetrievedBuilder<T, E> {
	getter: Option<GetFn<T, E>>,
	options: Vec<RetrievedOption<E>>,
	context: Option<CancellationToken>,
}

impl<T, E> RetrievedBuilder<T, E>
where
	T: Send + Sync + 'static,
	E: 'static,
{
	pub fn new() -> Self {
		Self {
			getter: None,
			options: Vec::new(),
			context: None,
		}
	}

	pub fn getter<G, Fut>(mut self, getter: G) -> Self
	where
		G: FnOnce(CancellationToken) -> Fut + Send + 'static,
		Fut: Future<Output = Result<T, E>> + Send + 'static,
	{
		self.getter = Some(option::boxed_getter(getter));
		self
	}

	pub fn option(mut self, option: RetrievedOption<E>) -> Self {
		self.options.push(option);
		self
	}

	/// Shorthand for `.option(with_close(closer))`.
	pub fn close<C, Fut>(self, closer: C) -> Self
	where
		C: FnOnce(CancellationToken) -> Fut + Send + 'static,
		Fut: Future<Output = Result<(), E>> + Send + 'static,
	{
		self.option(with_close(closer))
	}

	/// Context handed to the getter. Defaults to a fresh token nobody cancels.
	pub fn context(mut self, ctx: CancellationToken) -> Self {
		self.context = Some(ctx);
		self
	}

	/// Runs the getter and freezes the handle.
	pub async fn build(self) -> Result<Retrieved<T, E>, E>
	where
		E: From<RetrievedError>,
	{
		let getter = self.getter.ok_or(RetrievedError::NilGetter)?;
		let ctx = self.context.unwrap_or_else(CancellationToken::new);
		Retrieved::resolve(getter, ctx, self.options).await
	}
}

impl<T, E> Default for RetrievedBuilder<T, E>
where
	T: Send + Sync + 'static,
	E: 'static,
{
	fn default() -> Self {
		Self::new()
	}
}
