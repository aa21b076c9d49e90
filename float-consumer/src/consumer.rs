//! The `FloatConsumer` capability and its combinators
//!
//! A `FloatConsumer` takes an `f32`, performs some side effect and either
//! succeeds or fails with an error of its own choosing. Two consumers with the
//! same error type can be sequenced with [`FloatConsumer::and_then`]; the
//! second one only runs when the first succeeds.

use crate::types::{ConsumerError, Result};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Type-erased consumer, usable across threads
pub type BoxedFloatConsumer<'a, E> = Box<dyn FloatConsumer<Error = E> + Send + Sync + 'a>;

/// An operation that accepts a single `f32` and returns no result
pub trait FloatConsumer {
    /// Failure raised by `accept`. Composition passes it through unchanged.
    type Error;

    /// Perform this operation on the given value
    fn accept(&self, value: f32) -> std::result::Result<(), Self::Error>;

    /// Returns a consumer that runs `self`, then `after`
    ///
    /// If `self` fails, its error is returned and `after` is never invoked.
    /// Otherwise the outcome of `after` becomes the outcome of the whole call.
    ///
    /// # Example
    /// ```
    /// use float_consumer::{infallible_fn, FloatConsumer};
    /// use std::cell::Cell;
    ///
    /// let total = Cell::new(0.0f32);
    /// let count = Cell::new(0u32);
    ///
    /// let both = infallible_fn::<_, ()>(|v| total.set(total.get() + v))
    ///     .and_then(infallible_fn(|_| count.set(count.get() + 1)));
    ///
    /// both.accept(2.5).unwrap();
    /// assert_eq!(total.get(), 2.5);
    /// assert_eq!(count.get(), 1);
    /// ```
    fn and_then<C>(self, after: C) -> AndThen<Self, C>
    where
        Self: Sized,
        C: FloatConsumer<Error = Self::Error>,
    {
        AndThen::new(self, after)
    }

    /// Like [`and_then`](FloatConsumer::and_then), but checks that `after` is present
    ///
    /// Fails eagerly with [`ConsumerError::InvalidArgument`] when `after` is `None`.
    fn try_and_then<C>(self, after: Option<C>) -> Result<AndThen<Self, C>>
    where
        Self: Sized,
        C: FloatConsumer<Error = Self::Error>,
    {
        compose(self, after)
    }

    /// Erase the concrete type of this consumer
    fn boxed<'a>(self) -> BoxedFloatConsumer<'a, Self::Error>
    where
        Self: Sized + Send + Sync + 'a,
    {
        Box::new(self)
    }
}

/// Compose `first` with an optional `after` consumer
///
/// Free-function form of [`FloatConsumer::try_and_then`].
pub fn compose<A, B>(first: A, after: Option<B>) -> Result<AndThen<A, B>>
where
    A: FloatConsumer,
    B: FloatConsumer<Error = A::Error>,
{
    let after = after.ok_or_else(|| ConsumerError::missing("after"))?;
    Ok(AndThen::new(first, after))
}

/// Two consumers run in sequence. Built by [`FloatConsumer::and_then`].
#[derive(Debug, Clone, Copy)]
pub struct AndThen<A, B> {
    first: A,
    after: B,
}

impl<A, B> AndThen<A, B> {
    /// Pair two consumers so that `first` runs before `after`
    pub fn new(first: A, after: B) -> Self {
        Self { first, after }
    }

    /// The consumer that runs first
    pub fn first(&self) -> &A {
        &self.first
    }

    /// The consumer that runs once `first` has succeeded
    pub fn after(&self) -> &B {
        &self.after
    }

    /// Split the composition back into its two consumers
    pub fn into_inner(self) -> (A, B) {
        (self.first, self.after)
    }
}

impl<A, B> FloatConsumer for AndThen<A, B>
where
    A: FloatConsumer,
    B: FloatConsumer<Error = A::Error>,
{
    type Error = A::Error;

    fn accept(&self, value: f32) -> std::result::Result<(), Self::Error> {
        self.first.accept(value)?;
        self.after.accept(value)
    }
}

/// Adapt a fallible closure into a consumer
pub fn from_fn<F, E>(f: F) -> FromFn<F>
where
    F: Fn(f32) -> std::result::Result<(), E>,
{
    FromFn { f }
}

/// Consumer backed by a closure. Built by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F> {
    f: F,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn")
            .field("f", &std::any::type_name::<F>())
            .finish()
    }
}

impl<F, E> FloatConsumer for FromFn<F>
where
    F: Fn(f32) -> std::result::Result<(), E>,
{
    type Error = E;

    fn accept(&self, value: f32) -> std::result::Result<(), E> {
        (self.f)(value)
    }
}

/// Adapt a closure that cannot fail into a consumer
///
/// The error type `E` is free, so the result composes with consumers of any
/// error type.
pub fn infallible_fn<F, E>(f: F) -> InfallibleFn<F, E>
where
    F: Fn(f32),
{
    InfallibleFn {
        f,
        _error: PhantomData,
    }
}

/// Consumer backed by a closure that never fails. Built by [`infallible_fn`].
pub struct InfallibleFn<F, E> {
    f: F,
    _error: PhantomData<fn() -> E>,
}

impl<F: Clone, E> Clone for InfallibleFn<F, E> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _error: PhantomData,
        }
    }
}

impl<F, E> fmt::Debug for InfallibleFn<F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfallibleFn")
            .field("f", &std::any::type_name::<F>())
            .finish()
    }
}

impl<F, E> FloatConsumer for InfallibleFn<F, E>
where
    F: Fn(f32),
{
    type Error = E;

    fn accept(&self, value: f32) -> std::result::Result<(), E> {
        (self.f)(value);
        Ok(())
    }
}

impl<T: FloatConsumer + ?Sized> FloatConsumer for &T {
    type Error = T::Error;

    fn accept(&self, value: f32) -> std::result::Result<(), T::Error> {
        (**self).accept(value)
    }
}

impl<T: FloatConsumer + ?Sized> FloatConsumer for Box<T> {
    type Error = T::Error;

    fn accept(&self, value: f32) -> std::result::Result<(), T::Error> {
        (**self).accept(value)
    }
}

impl<T: FloatConsumer + ?Sized> FloatConsumer for Arc<T> {
    type Error = T::Error;

    fn accept(&self, value: f32) -> std::result::Result<(), T::Error> {
        (**self).accept(value)
    }
}
