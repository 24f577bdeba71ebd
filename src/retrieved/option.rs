/* src/retrieved/option.rs */

use std::future::Future;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use tokio_util::sync::CancellationToken;

pub(crate) type GetFn<T, E> =
	Box<dyn FnOnce(CancellationToken) -> BoxFuture<'static, Result<T, E>> + Send>;

pub(crate) type CloseFn<E> =
	Box<dyn FnOnce(CancellationToken) -> BoxFuture<'static, Result<(), E>> + Send>;

pub(crate) fn boxed_getter<G, Fut, T, E>(getter: G) -> GetFn<T, E>
where
	G: FnOnce(CancellationToken) -> Fut + Send + 'static,
	Fut: Future<Output = Result<T, E>> + Send + 'static,
{
	Box::new(move |ctx| getter(ctx).boxed())
}

pub(crate) fn boxed_closer<C, Fut, E>(closer: C) -> CloseFn<E>
where
	C: FnOnce(CancellationToken) -> Fut + Send + 'static,
	Fut: Future<Output = Result<(), E>> + Send + 'static,
{
	Box::new(move |ctx| closer(ctx).boxed())
}

/// Mutable state the options are applied to before the handle is frozen.
pub(crate) struct Settings<E> {
	pub(crate) closer: Option<CloseFn<E>>,
}

impl<E> Default for Settings<E> {
	fn default() -> Self {
		Self { closer: None }
	}
}

/// A construction modifier for [`Retrieved`](super::Retrieved).
pub struct RetrievedOption<E>(Box<dyn FnOnce(&mut Settings<E>) + Send>);

impl<E> RetrievedOption<E> {
	pub(crate) fn apply(self, settings: &mut Settings<E>) {
		(self.0)(settings)
	}
}

/// Replaces the default no-op closer. When given more than once, the last one wins.
///
/// The closer receives the context passed to [`Retrieved::close`](super::Retrieved::close)
/// and its error is returned from there unchanged.
pub fn with_close<C, Fut, E>(closer: C) -> RetrievedOption<E>
where
	C: FnOnce(CancellationToken) -> Fut + Send + 'static,
	Fut: Future<Output = Result<(), E>> + Send + 'static,
	E: 'static,
{
	let closer = boxed_closer(closer);
	RetrievedOption(Box::new(move |settings: &mut Settings<E>| {
		settings.closer = Some(closer);
	}))
}
