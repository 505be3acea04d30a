use std::fmt;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use crate::LookupError;

/// Remote lookup collaborator driven by a
/// [`TypeaheadController`](crate::TypeaheadController).
///
/// Implementations return at most `limit` items in their own ranking order.
/// The controller neither re-sorts nor inspects them.
#[async_trait]
pub trait Lookup: Send + Sync + 'static {
	/// Opaque result record.
	type Item: Clone + Send + Sync + 'static;
	/// Structured constraints compared by value between changes.
	type Filters: Clone + PartialEq + Default + Send + Sync + 'static;

	async fn lookup(&self, query: &str, filters: &Self::Filters, limit: usize) -> Result<Vec<Self::Item>, LookupError>;
}

#[async_trait]
impl<L: Lookup> Lookup for Arc<L> {
	type Item = L::Item;
	type Filters = L::Filters;

	async fn lookup(&self, query: &str, filters: &Self::Filters, limit: usize) -> Result<Vec<Self::Item>, LookupError> {
		(**self).lookup(query, filters, limit).await
	}
}

/// [`Lookup`] backed by an async closure. Built with [`lookup_fn`].
pub struct FnLookup<F, T, P> {
	f: F,
	_marker: PhantomData<fn() -> (T, P)>,
}

impl<F, T, P> fmt::Debug for FnLookup<F, T, P> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FnLookup").finish_non_exhaustive()
	}
}

/// Wraps `f(query, filters, limit)` as a [`Lookup`].
pub fn lookup_fn<F, Fut, T, P>(f: F) -> FnLookup<F, T, P>
where
	F: Fn(String, P, usize) -> Fut + Send + Sync + 'static,
	Fut: Future<Output = Result<Vec<T>, LookupError>> + Send + 'static,
	T: Clone + Send + Sync + 'static,
	P: Clone + PartialEq + Default + Send + Sync + 'static,
{
	FnLookup { f, _marker: PhantomData }
}

#[async_trait]
impl<F, Fut, T, P> Lookup for FnLookup<F, T, P>
where
	F: Fn(String, P, usize) -> Fut + Send + Sync + 'static,
	Fut: Future<Output = Result<Vec<T>, LookupError>> + Send + 'static,
	T: Clone + Send + Sync + 'static,
	P: Clone + PartialEq + Default + Send + Sync + 'static,
{
	type Item = T;
	type Filters = P;

	async fn lookup(&self, query: &str, filters: &P, limit: usize) -> Result<Vec<T>, LookupError> {
		(self.f)(query.to_owned(), filters.clone(), limit).await
	}
}
