//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. Path parameters can be
//! constrained with a pattern; a capture that fails its pattern is no match.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use http::{Method, StatusCode};
use matchit::Router as MatchitRouter;
use tracing::{debug, info};

use crate::handler::{BoxedHandler, Handler};
use crate::request::Request;
use crate::response::Response;

/// Header whose value is echoed into the per-request log line.
pub const TRACE_HEADER: &str = "trace_id";

/// A predicate a captured path segment must satisfy.
pub type ParamPattern = fn(&str) -> bool;

/// The application router over shared state `S`.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve).
/// Every builder method returns `self` so registrations chain naturally.
pub struct Router<S> {
    routes: HashMap<Method, MatchitRouter<BoxedHandler<S>>>,
    patterns: HashMap<String, ParamPattern>,
    fallback: BoxedHandler<S>,
    state: Arc<S>,
}

impl<S: Send + Sync + 'static> Router<S> {
    /// A router whose handlers all receive `Arc<S>`.
    pub fn with_state(state: S) -> Self {
        Self {
            routes: HashMap::new(),
            patterns: HashMap::new(),
            fallback: default_fallback::<S>.into_boxed_handler(),
            state: Arc::new(state),
        }
    }

    /// Register a handler for a method + path pair.
    ///
    /// Path parameters use `{name}` syntax and are read with `req.param("name")`.
    ///
    /// # Panics
    ///
    /// Panics if `path` conflicts with a route already registered for
    /// `method`. Routes are fixed at startup, so this is a programming error.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler<S>) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub fn get(self, path: &str, handler: impl Handler<S>) -> Self {
        self.on(Method::GET, path, handler)
    }

    pub fn post(self, path: &str, handler: impl Handler<S>) -> Self {
        self.on(Method::POST, path, handler)
    }

    pub fn put(self, path: &str, handler: impl Handler<S>) -> Self {
        self.on(Method::PUT, path, handler)
    }

    /// Constrain every parameter called `name`, on every route.
    pub fn param_pattern(mut self, name: &str, pattern: ParamPattern) -> Self {
        self.patterns.insert(name.to_owned(), pattern);
        self
    }

    /// Handler for requests no route matches. Defaults to a bare `404`.
    pub fn fallback(mut self, handler: impl Handler<S>) -> Self {
        self.fallback = handler.into_boxed_handler();
        self
    }

    /// Routes one request and produces one response.
    ///
    /// Matched requests are timed and logged with their trace id once the
    /// handler returns. Fallback requests are not.
    pub async fn call(&self, req: http::Request<Bytes>) -> Response {
        let start = Instant::now();
        let (parts, body) = req.into_parts();

        let Some((handler, params)) = self.lookup(&parts.method, parts.uri.path()) else {
            debug!(method = %parts.method, path = parts.uri.path(), "no route");
            let req = Request::new(parts, body, HashMap::new());
            return self.fallback.call(req, Arc::clone(&self.state)).await;
        };

        let req = Request::new(parts, body, params);
        let trace_id = req.header(TRACE_HEADER).unwrap_or_default().to_owned();
        let method = req.method().clone();
        let path = req.path().to_owned();
        debug!(trace_id = %trace_id, "handling request");

        let response = handler.call(req, Arc::clone(&self.state)).await;

        info!(
            trace_id = %trace_id,
            %method,
            path = %path,
            status = response.status_code().as_u16(),
            elapsed = ?start.elapsed(),
            "served request",
        );
        response
    }

    pub(crate) fn lookup(
        &self,
        method: &Method,
        path: &str,
    ) -> Option<(BoxedHandler<S>, HashMap<String, String>)> {
        let tree = self.routes.get(method)?;
        let matched = tree.at(path).ok()?;

        let mut params = HashMap::new();
        for (key, value) in matched.params.iter() {
            if let Some(pattern) = self.patterns.get(key) {
                if !pattern(value) {
                    return None;
                }
            }
            params.insert(key.to_owned(), value.to_owned());
        }
        Some((Arc::clone(matched.value), params))
    }
}

async fn default_fallback<S>(_req: Request, _state: Arc<S>) -> Response {
    Response::status(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn ok(_req: Request, _state: Arc<()>) -> Response {
        Response::status(StatusCode::OK)
    }

    async fn echo_id(req: Request, _state: Arc<()>) -> Response {
        Response::builder().json(req.param("id").unwrap_or("none").to_owned())
    }

    fn digits(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
    }

    fn request(method: Method, path: &str) -> http::Request<Bytes> {
        http::Request::builder()
            .method(method)
            .uri(path)
            .body(Bytes::new())
            .unwrap()
    }

    #[test]
    fn lookup_is_per_method() {
        let router = Router::with_state(()).get("/cars", ok);
        assert!(router.lookup(&Method::GET, "/cars").is_some());
        assert!(router.lookup(&Method::POST, "/cars").is_none());
        assert!(router.lookup(&Method::GET, "/trucks").is_none());
    }

    #[test]
    fn param_pattern_rejects_non_matching_segments() {
        let router = Router::with_state(())
            .get("/cars/{id}", echo_id)
            .param_pattern("id", digits);

        let (_, params) = router.lookup(&Method::GET, "/cars/42").unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("42"));
        assert!(router.lookup(&Method::GET, "/cars/4x2").is_none());
        assert!(router.lookup(&Method::GET, "/cars/42/").is_none());
    }

    #[test]
    fn static_slash_route_coexists_with_param_route() {
        let router = Router::with_state(())
            .get("/cars/", ok)
            .get("/cars/{id}", echo_id);
        let (_, params) = router.lookup(&Method::GET, "/cars/").unwrap();
        assert!(params.is_empty());
        assert!(router.lookup(&Method::GET, "/cars/1").is_some());
    }

    #[tokio::test]
    async fn call_passes_params_to_handler() {
        let router = Router::with_state(()).get("/cars/{id}", echo_id);
        let res = router.call(request(Method::GET, "/cars/9")).await;
        assert_eq!(res.status_code(), StatusCode::OK);
        assert_eq!(res.body(), b"9");
    }

    #[tokio::test]
    async fn unmatched_requests_use_fallback() {
        let bare = Router::with_state(()).get("/cars", ok);
        let res = bare.call(request(Method::DELETE, "/cars")).await;
        assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
        assert!(res.body().is_empty());

        let custom = Router::with_state(())
            .get("/cars", ok)
            .fallback(|_req: Request, _state: Arc<()>| async { Response::builder().json("nope") });
        let res = custom.call(request(Method::GET, "/nowhere")).await;
        assert_eq!(res.body(), b"nope");
    }

    #[tokio::test]
    async fn handlers_share_router_state() {
        let router = Router::with_state(String::from("shared"))
            .get("/", |_req: Request, state: Arc<String>| async move {
                Response::builder().json(state.as_str().to_owned())
            });
        let res = router.call(request(Method::GET, "/")).await;
        assert_eq!(res.body(), b"shared");
    }
}
