use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dog_store::errors::DogError;

#[derive(Debug)]
pub struct ApiError(pub anyhow::Error);

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // If it's a DogError (even if wrapped by anyhow contexts), preserve its fields
        if let Some(dog) = self.0.chain().find_map(|e| e.downcast_ref::<DogError>()) {
            let status = StatusCode::from_u16(dog.code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            return (status, Json(dog.to_json())).into_response();
        }

        // Fallback: wrap any non-DogError as a GeneralError
        let dog = DogError::general_error(self.0.to_string());
        let status = StatusCode::from_u16(dog.code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(dog.to_json())).into_response()
    }
}
