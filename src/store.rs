//! In-memory car store.
//!
//! A single map from id to [`Car`] behind one `RwLock`. Reads share the
//! lock; inserts and replacements hold the write lock for their whole
//! read-modify-write, so ids are never handed out twice.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::car::Car;

#[derive(Debug, Default)]
pub struct CarStore {
    inner: RwLock<Inventory>,
}

#[derive(Debug, Default)]
struct Inventory {
    cars: HashMap<String, Car>,
    last_id: u64,
}

impl CarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `car` under the next id and returns the stored record.
    ///
    /// Whatever `car.id` held is overwritten. Ids are decimal strings
    /// counting up from `"1"`.
    pub async fn insert(&self, mut car: Car) -> Car {
        let mut inventory = self.inner.write().await;
        inventory.last_id += 1;
        car.id = inventory.last_id.to_string();
        inventory.cars.insert(car.id.clone(), car.clone());
        car
    }

    pub async fn get(&self, id: &str) -> Option<Car> {
        self.inner.read().await.cars.get(id).cloned()
    }

    /// Every stored car, in no particular order.
    pub async fn all(&self) -> Vec<Car> {
        self.inner.read().await.cars.values().cloned().collect()
    }

    /// Replaces the car stored under `id` wholesale, keeping its id.
    ///
    /// Returns `None`, leaving the store untouched, when `id` is unknown.
    pub async fn replace(&self, id: &str, mut car: Car) -> Option<Car> {
        let mut inventory = self.inner.write().await;
        let slot = inventory.cars.get_mut(id)?;
        car.id = slot.id.clone();
        *slot = car.clone();
        Some(car)
    }
}
