//! In-memory store for dog records.
//!
//! One map behind a `tokio::sync::RwLock`; every mutation takes the
//! write lock, so concurrent handlers see per-key last-write-wins and
//! never a torn record. Input hitting these methods is already
//! validated (see [`crate::schema::NewDog::validated`]).

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::{DogError, DogResult};
use crate::schema::{Dog, NewDog};

/// The in-memory keyed collection of dogs.
///
/// Invariant: every key in the map equals the `id` of its value.
#[derive(Default)]
pub struct DogStore {
    dogs: RwLock<HashMap<String, Dog>>,
}

impl DogStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn not_found(id: &str) -> anyhow::Error {
        DogError::not_found(format!("Dog not found: {id}")).into_anyhow()
    }

    /// All current records, in no particular order.
    pub async fn find(&self) -> DogResult<Vec<Dog>> {
        let dogs = self.dogs.read().await;
        Ok(dogs.values().cloned().collect())
    }

    /// Fetch one record by id.
    pub async fn get(&self, id: &str) -> DogResult<Dog> {
        let dogs = self.dogs.read().await;
        dogs.get(id).cloned().ok_or_else(|| Self::not_found(id))
    }

    /// Store a new record under a fresh server-assigned id.
    pub async fn create(&self, input: NewDog) -> DogResult<Dog> {
        let id = Uuid::new_v4().to_string();
        let dog = Dog {
            id: id.clone(),
            breed: input.breed,
            name: input.name,
        };

        let mut dogs = self.dogs.write().await;
        dogs.insert(id, dog.clone());
        Ok(dog)
    }

    /// Replace breed/name of an existing record; the id is immutable.
    ///
    /// Never creates: an unknown id is NotFound.
    pub async fn update(&self, id: &str, input: NewDog) -> DogResult<Dog> {
        let mut dogs = self.dogs.write().await;
        let dog = dogs.get_mut(id).ok_or_else(|| Self::not_found(id))?;

        dog.breed = input.breed;
        dog.name = input.name;
        Ok(dog.clone())
    }

    /// Remove a record by id.
    pub async fn remove(&self, id: &str) -> DogResult<()> {
        let mut dogs = self.dogs.write().await;
        dogs.remove(id).map(|_| ()).ok_or_else(|| Self::not_found(id))
    }
}
