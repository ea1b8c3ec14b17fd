//! Handler trait and type erasure.
//!
//! # How stateful handlers are stored
//!
//! The router holds handlers of *different* types in a single
//! `HashMap<Method, Tree>`, so each one is hidden behind a trait object
//! (`dyn ErasedHandler<S>`). Every handler receives the request plus a
//! shared handle to the application state `S` the router was built with.
//!
//! ```text
//! async fn get_car(req: Request, store: Arc<CarStore>) -> Response { … }
//!        ↓ router.get("/cars/{id}", get_car)
//! get_car.into_boxed_handler()                     ← Handler blanket impl
//!        ↓
//! Arc::new(FnHandler(get_car))                     ← stored as BoxedHandler<S>
//!        ↓
//! handler.call(req, Arc::clone(&state))            ← one vtable dispatch
//!        ↓
//! Box::pin(async { get_car(req, state).await.into_response() })
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

// ── Internal types ────────────────────────────────────────────────────────────

/// A heap-allocated, type-erased future that resolves to a [`Response`].
pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// Internal dispatch interface.
///
/// `#[doc(hidden)] pub` rather than `pub(crate)` because it appears in the
/// return type of the public `Handler` trait's `into_boxed_handler` method.
#[doc(hidden)]
pub trait ErasedHandler<S> {
    fn call(&self, req: Request, state: Arc<S>) -> BoxFuture;
}

/// A type-erased handler shared across concurrent requests.
#[doc(hidden)]
pub type BoxedHandler<S> = Arc<dyn ErasedHandler<S> + Send + Sync + 'static>;

// ── Public Handler trait ──────────────────────────────────────────────────────

/// Implemented for every valid route handler over state `S`.
///
/// Satisfied automatically by any `async fn` shaped like:
///
/// ```text
/// async fn name(req: Request, state: Arc<S>) -> impl IntoResponse
/// ```
///
/// Sealed: only the blanket impl below can satisfy it.
pub trait Handler<S>: private::Sealed<S> + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler<S>;
}

mod private {
    pub trait Sealed<S> {}
}

// ── Blanket implementations ───────────────────────────────────────────────────

impl<F, Fut, R, S> private::Sealed<S> for F
where
    F: Fn(Request, Arc<S>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
    S: Send + Sync + 'static,
{
}

impl<F, Fut, R, S> Handler<S> for F
where
    F: Fn(Request, Arc<S>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
    S: Send + Sync + 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler<S> {
        Arc::new(FnHandler(self))
    }
}

// ── Concrete wrapper ──────────────────────────────────────────────────────────

/// Holds a concrete handler `F` and bridges it to [`ErasedHandler`].
struct FnHandler<F>(F);

impl<F, Fut, R, S> ErasedHandler<S> for FnHandler<F>
where
    F: Fn(Request, Arc<S>) -> Fut + Send + Sync,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, req: Request, state: Arc<S>) -> BoxFuture {
        let fut = (self.0)(req, state);
        Box::pin(async move { fut.await.into_response() })
    }
}
