use std::{any::Any, future::Future};

use crate::{Error, Outcome};

/// Lifts every [`Outcome`] combinator onto a pending asynchronous outcome:
/// each method awaits `self`, then delegates. Short-circuit and type-test
/// behavior is exactly that of the resolved combinators; only the point of
/// suspension differs.
#[allow(async_fn_in_trait)]
pub trait PendingOutcome<V>: Future<Output = Outcome<V>> + Sized {
    async fn then<W, F>(self, step: F) -> Outcome<W>
    where
        F: FnOnce(V) -> Outcome<W>,
    {
        self.await.then(step)
    }

    async fn then_async<W, F, Fut>(self, step: F) -> Outcome<W>
    where
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = Outcome<W>>,
    {
        self.await.then_async(step).await
    }

    async fn act<T, F>(self, observer: F) -> Outcome<V>
    where
        T: Any + Clone,
        V: Any,
        F: FnOnce(T),
    {
        self.await.act(observer)
    }

    async fn act_async<T, F, Fut>(self, observer: F) -> Outcome<V>
    where
        T: Any + Clone,
        V: Any,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.await.act_async(observer).await
    }

    async fn act_on_error<F>(self, observer: F) -> Outcome<V>
    where
        V: Any,
        F: FnOnce(Error),
    {
        self.await.act_on_error(observer)
    }

    async fn log_on_error(self) -> Outcome<V>
    where
        V: Any,
    {
        self.await.log_on_error()
    }

    async fn swap<T, F>(self, replace: F) -> Outcome<V>
    where
        T: Any + Clone,
        V: Any,
        F: FnOnce(T) -> Outcome<V>,
    {
        self.await.swap(replace)
    }

    async fn swap_async<T, F, Fut>(self, replace: F) -> Outcome<V>
    where
        T: Any + Clone,
        V: Any,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<V>>,
    {
        self.await.swap_async(replace).await
    }
}

impl<V, F> PendingOutcome<V> for F where F: Future<Output = Outcome<V>> {}
