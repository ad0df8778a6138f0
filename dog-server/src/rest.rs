use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    routing, Json, Router,
};
use dog_store::errors::DogError;
use dog_store::schema::{Dog, NewDog};
use dog_store::DogStore;
use serde_json::json;

use crate::error::ApiError;

fn map_json_rejection(rejection: JsonRejection) -> ApiError {
    // The contract knows exactly two error kinds; an unparseable body is
    // a validation failure, same as a schema violation.
    DogError::unprocessable("Failed to parse the request body as JSON")
        .with_errors(json!({"_schema": [rejection.to_string()]}))
        .into_anyhow()
        .into()
}

/// Routes for the dog resource, meant to be nested under `/dog`.
pub fn dog_router(store: Arc<DogStore>) -> Router<()> {
    Router::new()
        .route("/", routing::get(find_dogs).post(create_dog))
        .route(
            "/{id}",
            routing::get(get_dog).put(update_dog).delete(remove_dog),
        )
        .with_state(store)
}

async fn find_dogs(State(store): State<Arc<DogStore>>) -> Result<Json<Vec<Dog>>, ApiError> {
    let dogs = store.find().await?;
    Ok(Json(dogs))
}

async fn get_dog(
    State(store): State<Arc<DogStore>>,
    Path(id): Path<String>,
) -> Result<Json<Dog>, ApiError> {
    let dog = store.get(&id).await?;
    Ok(Json(dog))
}

async fn create_dog(
    State(store): State<Arc<DogStore>>,
    data: Result<Json<NewDog>, JsonRejection>,
) -> Result<(StatusCode, Json<Dog>), ApiError> {
    let Json(data) = data.map_err(map_json_rejection)?;
    let data = data.validated()?;

    let dog = store.create(data).await?;
    tracing::debug!(id = %dog.id, "created dog");
    Ok((StatusCode::CREATED, Json(dog)))
}

async fn update_dog(
    State(store): State<Arc<DogStore>>,
    Path(id): Path<String>,
    data: Result<Json<NewDog>, JsonRejection>,
) -> Result<Json<Dog>, ApiError> {
    let Json(data) = data.map_err(map_json_rejection)?;
    let data = data.validated()?;

    let dog = store.update(&id, data).await?;
    Ok(Json(dog))
}

async fn remove_dog(
    State(store): State<Arc<DogStore>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    store.remove(&id).await?;
    tracing::debug!(%id, "removed dog");
    Ok(StatusCode::NO_CONTENT)
}
