//! The dog data model and its input schema.
//!
//! `Dog` is what the store holds and the API returns; `NewDog` is the
//! client-writable subset used by both create and update. `id` never
//! appears in `NewDog`, so a client-supplied id is dropped on
//! deserialization and can never influence the stored record.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::errors::{DogError, DogResult};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Dog {
    pub id: String,
    pub breed: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct NewDog {
    #[validate(length(min = 1, message = "breed must not be empty"))]
    pub breed: String,

    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

impl NewDog {
    /// Trim both fields, then validate.
    ///
    /// Returns an Unprocessable error carrying a field -> messages map,
    /// so whitespace-only input fails the same way empty input does and
    /// stored records never carry surrounding whitespace.
    pub fn validated(mut self) -> DogResult<Self> {
        self.breed = self.breed.trim().to_string();
        self.name = self.name.trim().to_string();

        self.validate().map_err(|e| {
            DogError::unprocessable("Dog schema validation failed")
                .with_errors(validation_errors_to_map(&e))
                .into_anyhow()
        })?;

        Ok(self)
    }
}

fn validation_errors_to_map(errs: &validator::ValidationErrors) -> Value {
    let mut out = serde_json::Map::new();

    // NewDog is flat, so only field-level errors can occur.
    for (field, kind) in errs.errors() {
        if let validator::ValidationErrorsKind::Field(field_errors) = kind {
            let msgs: Vec<Value> = field_errors
                .iter()
                .map(|e| {
                    let msg = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    Value::String(msg)
                })
                .collect();
            out.insert(field.to_string(), Value::Array(msgs));
        }
    }

    Value::Object(out)
}
