//! dog-store: transport-agnostic core for the dog resource server.
//!
//! Holds the `Dog` data model, input validation, the structured error
//! vocabulary, and the in-memory store the HTTP layer calls into.

pub mod errors;
pub mod schema;
pub mod store;

pub use errors::{DogError, DogResult, ErrorKind};
pub use schema::{Dog, NewDog};
pub use store::DogStore;
