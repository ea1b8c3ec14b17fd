//! The `/cars` HTTP surface.
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/cars`, `/cars/` | 200, array of cars |
//! | GET | `/cars/{id}` | 200, one car |
//! | POST | `/cars`, `/cars/` | 201, stored car + `Location` |
//! | PUT | `/cars/{id}` | 200, replaced car |
//!
//! `id` must be all ASCII digits. Everything else, DELETE included, is
//! `404 not found`. Error bodies are bare text, yet every response here is
//! labelled `application/json`.

use std::sync::Arc;

use http::header::LOCATION;
use http::{HeaderValue, StatusCode};
use serde::Serialize;
use tracing::{error, warn};

use crate::car::Car;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;
use crate::store::CarStore;

/// Builds the car service router over `store`.
pub fn routes(store: CarStore) -> Router<CarStore> {
    Router::with_state(store)
        .get("/cars", list_cars)
        .get("/cars/", list_cars)
        .get("/cars/{id}", get_car)
        .post("/cars", create_car)
        .post("/cars/", create_car)
        .put("/cars/{id}", update_car)
        .param_pattern("id", is_numeric)
        .fallback(unmatched)
}

fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

// GET /cars
async fn list_cars(_req: Request, store: Arc<CarStore>) -> Response {
    json(StatusCode::OK, &store.all().await)
}

// GET /cars/{id}
async fn get_car(req: Request, store: Arc<CarStore>) -> Response {
    let Some(id) = req.param("id") else {
        return not_found();
    };
    match store.get(id).await {
        Some(car) => json(StatusCode::OK, &car),
        None => not_found(),
    }
}

// POST /cars
async fn create_car(req: Request, store: Arc<CarStore>) -> Response {
    let car = match Car::from_body(req.body()) {
        Ok(car) => car,
        Err(e) => {
            warn!(error = %e, "request body is not a car");
            return internal_error();
        }
    };

    let car = store.insert(car).await;

    // Appended to the path and query exactly as received, so a POST to
    // `/cars/` yields `/cars//{id}`.
    let target = req.uri().path_and_query().map_or(req.path(), |pq| pq.as_str());
    let location = format!("{target}/{}", car.id);
    let Ok(location) = HeaderValue::try_from(location) else {
        return internal_error();
    };

    match serde_json::to_vec(&car) {
        Ok(body) => Response::builder()
            .status(StatusCode::CREATED)
            .header(LOCATION, location)
            .json(body),
        Err(e) => {
            error!(error = %e, "failed to encode car");
            internal_error()
        }
    }
}

// PUT /cars/{id}
async fn update_car(req: Request, store: Arc<CarStore>) -> Response {
    let car = match Car::from_body(req.body()) {
        Ok(car) => car,
        Err(e) => {
            warn!(error = %e, "request body is not a car");
            return internal_error();
        }
    };

    let Some(id) = req.param("id") else {
        return not_found();
    };
    match store.replace(id, car).await {
        Some(updated) => json(StatusCode::OK, &updated),
        None => not_found(),
    }
}

async fn unmatched(_req: Request, _store: Arc<CarStore>) -> Response {
    not_found()
}

// ── Responses ─────────────────────────────────────────────────────────────────

fn json<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(body) => Response::builder().status(status).json(body),
        Err(e) => {
            error!(error = %e, "failed to encode response");
            internal_error()
        }
    }
}

fn not_found() -> Response {
    Response::builder().status(StatusCode::NOT_FOUND).json("not found")
}

fn internal_error() -> Response {
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .json("internal server error")
}
