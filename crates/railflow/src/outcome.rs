use std::{any::Any, future::Future};

use crate::{Error, Fault};

/// Either a successful value or a failure.
///
/// Every combinator consumes `self` and produces a new outcome; a failure
/// flows through `then` untouched until a caller-inserted `act` or `swap`
/// picks it up.
#[derive(Debug)]
pub enum Outcome<V> {
    Success(V),
    Failure(Box<dyn Fault>),
}

impl<V> Outcome<V> {
    pub fn success(value: V) -> Self {
        Self::Success(value)
    }

    pub fn failure(fault: impl Fault) -> Self {
        Self::Failure(Box::new(fault))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(..))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(..))
    }

    pub fn as_value(&self) -> Option<&V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(..) => None,
        }
    }

    pub fn as_error(&self) -> Option<&Error> {
        match self {
            Self::Success(..) => None,
            Self::Failure(fault) => Some(fault.as_error()),
        }
    }

    /// Feeds the success value to `step`, returning its outcome unchanged.
    /// A failure short-circuits: `step` is never invoked.
    pub fn then<W, F>(self, step: F) -> Outcome<W>
    where
        F: FnOnce(V) -> Outcome<W>,
    {
        match self {
            Self::Success(value) => step(value),
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// `then` against an asynchronous step. A failure resolves immediately,
    /// without suspending on `step`.
    pub async fn then_async<W, F, Fut>(self, step: F) -> Outcome<W>
    where
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = Outcome<W>>,
    {
        match self {
            Self::Success(value) => step(value).await,
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Hands the carried payload to `observer` iff it is a `T`, then returns
    /// the outcome unchanged either way.
    pub fn act<T, F>(self, observer: F) -> Self
    where
        T: Any + Clone,
        V: Any,
        F: FnOnce(T),
    {
        if let Some(payload) = self.payload::<T>() {
            observer(payload);
        }

        self
    }

    pub async fn act_async<T, F, Fut>(self, observer: F) -> Self
    where
        T: Any + Clone,
        V: Any,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Some(payload) = self.payload::<T>() {
            observer(payload).await;
        }

        self
    }

    /// Observes the carried error of any failure; a success passes through
    /// untouched.
    pub fn act_on_error<F>(self, observer: F) -> Self
    where
        V: Any,
        F: FnOnce(Error),
    {
        self.act::<Error, F>(observer)
    }

    /// Reports any failure through the `log` facade, then passes the outcome
    /// through. Logging only ever happens where a caller inserts this stage.
    pub fn log_on_error(self) -> Self
    where
        V: Any,
    {
        self.act_on_error(|error| log::error!("{error}"))
    }

    /// Replaces the whole outcome with `replace(payload)` iff the carried
    /// payload is a `T`; otherwise returns the outcome unchanged. Works on
    /// both sides: a success value can be invalidated into a failure, a
    /// specific fault kind can be recovered into a success.
    pub fn swap<T, F>(self, replace: F) -> Self
    where
        T: Any + Clone,
        V: Any,
        F: FnOnce(T) -> Outcome<V>,
    {
        match self.payload::<T>() {
            Some(payload) => replace(payload),
            None => self,
        }
    }

    pub async fn swap_async<T, F, Fut>(self, replace: F) -> Self
    where
        T: Any + Clone,
        V: Any,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<V>>,
    {
        match self.payload::<T>() {
            Some(payload) => replace(payload).await,
            None => self,
        }
    }

    // Type test shared by `act` and `swap`. A success matches its value type
    // exactly; a failure matches its concrete fault type, or `Error` itself
    // through the fault's error view.
    fn payload<T>(&self) -> Option<T>
    where
        T: Any + Clone,
        V: Any,
    {
        match self {
            Self::Success(value) => (value as &dyn Any).downcast_ref::<T>().cloned(),
            Self::Failure(fault) => fault
                .as_any()
                .downcast_ref::<T>()
                .or_else(|| (fault.as_error() as &dyn Any).downcast_ref::<T>())
                .cloned(),
        }
    }
}

impl<V> From<Error> for Outcome<V> {
    fn from(error: Error) -> Self {
        Self::Failure(Box::new(error))
    }
}

impl<V: PartialEq> PartialEq for Outcome<V> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Success(left), Self::Success(right)) => left == right,
            (Self::Failure(left), Self::Failure(right)) => left.as_error() == right.as_error(),
            _ => false,
        }
    }
}

impl<V> PartialEq<Error> for Outcome<V> {
    fn eq(&self, other: &Error) -> bool {
        matches!(self, Self::Failure(fault) if fault.as_error() == other)
    }
}

impl<V> PartialEq<Outcome<V>> for Error {
    fn eq(&self, other: &Outcome<V>) -> bool {
        other == self
    }
}
