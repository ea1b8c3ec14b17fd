//! # carlot
//!
//! A small in-memory car inventory served over HTTP with JSON bodies.
//!
//! Two moving parts:
//!
//! - a router that dispatches on method plus path shape: the collection
//!   (`/cars`, `/cars/`) and a single car (`/cars/{digits}`);
//! - a [`CarStore`] mapping string ids to [`Car`] records behind one lock.
//!
//! Nothing is persisted. Cars cannot be deleted.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use carlot::{CarStore, Server, api};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), carlot::Error> {
//!     let app = api::routes(CarStore::new());
//!     Server::bind("127.0.0.1:8080".parse().unwrap()).serve(app).await
//! }
//! ```
//!
//! The router is usable without a socket, which is how the tests drive it:
//!
//! ```rust
//! use carlot::{CarStore, api};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let app = api::routes(CarStore::new());
//! let req = http::Request::get("/cars").body(bytes::Bytes::new()).unwrap();
//! let res = app.call(req).await;
//! assert_eq!(res.body(), b"[]");
//! # }
//! ```

mod car;
mod error;
mod handler;
mod request;
mod response;
mod router;
mod server;
mod store;

pub mod api;
pub mod config;
pub mod telemetry;

pub use car::Car;
pub use error::Error;
pub use handler::Handler;
pub use request::Request;
pub use response::{IntoResponse, Response, ResponseBuilder};
pub use router::{ParamPattern, Router, TRACE_HEADER};
pub use server::Server;
pub use store::CarStore;
