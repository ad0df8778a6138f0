//! # Errors (Feathers-style)
//!
//! Structured errors with consistent status codes + class names that can
//! be carried through `anyhow::Error` and downcast again at the transport
//! boundary. The kinds are trimmed to what this server can actually
//! produce: validation failures, unknown ids, and a 500 fallback.

use std::fmt;

use anyhow::Error as AnyError;

/// A convenience result type for dog-store APIs.
pub type DogResult<T> = std::result::Result<T, AnyError>;

/// Error class names + status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,      // 404
    Unprocessable, // 422
    GeneralError,  // 500
}

impl ErrorKind {
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::Unprocessable => 422,
            ErrorKind::GeneralError => 500,
        }
    }

    /// Error `name` (e.g. "NotFound")
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "NotFound",
            ErrorKind::Unprocessable => "Unprocessable",
            ErrorKind::GeneralError => "GeneralError",
        }
    }

    /// Error `className` (kebab-cased)
    pub fn class_name(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not-found",
            ErrorKind::Unprocessable => "unprocessable",
            ErrorKind::GeneralError => "general-error",
        }
    }
}

/// A structured error that can live inside `anyhow::Error`.
///
/// Fields:
/// - name
/// - message
/// - code (HTTP status)
/// - class_name
/// - errors (optional, e.g. field -> messages for validation)
#[derive(Debug)]
pub struct DogError {
    pub kind: ErrorKind,
    pub message: String,
    pub errors: Option<serde_json::Value>,
}

impl DogError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            errors: None,
        }
    }

    pub fn with_errors(mut self, errors: serde_json::Value) -> Self {
        self.errors = Some(errors);
        self
    }

    pub fn code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn class_name(&self) -> &'static str {
        self.kind.class_name()
    }

    /// Convert into `anyhow::Error` so it flows through `DogResult`.
    pub fn into_anyhow(self) -> AnyError {
        AnyError::new(self)
    }

    /// Downcast an `anyhow::Error` to a `DogError` if possible.
    pub fn from_anyhow(err: &AnyError) -> Option<&DogError> {
        err.downcast_ref::<DogError>()
    }

    // ---- Constructors ----

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, msg)
    }
    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unprocessable, msg)
    }
    pub fn general_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::GeneralError, msg)
    }

    /// JSON payload in the shape clients expect.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::json;

        let mut base = json!({
            "name": self.name(),
            "message": self.message,
            "code": self.code(),
            "className": self.class_name(),
        });

        if let Some(e) = &self.errors {
            base["errors"] = e.clone();
        }
        base
    }
}

impl fmt::Display for DogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name(), self.code(), self.message)
    }
}

impl std::error::Error for DogError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_expected_codes() {
        assert_eq!(ErrorKind::NotFound.status_code(), 404);
        assert_eq!(ErrorKind::Unprocessable.status_code(), 422);
        assert_eq!(ErrorKind::GeneralError.status_code(), 500);
    }

    #[test]
    fn roundtrips_through_anyhow() {
        let err = DogError::not_found("Dog not found: abc").into_anyhow();
        let dog = DogError::from_anyhow(&err).expect("must be DogError");
        assert_eq!(dog.code(), 404);
        assert_eq!(dog.name(), "NotFound");
        assert_eq!(dog.class_name(), "not-found");
    }

    #[test]
    fn to_json_includes_errors_when_present() {
        let err = DogError::unprocessable("Dog schema validation failed")
            .with_errors(serde_json::json!({"name": ["name must not be empty"]}));
        let payload = err.to_json();
        assert_eq!(payload["code"], 422);
        assert_eq!(payload["className"], "unprocessable");
        assert_eq!(payload["errors"]["name"][0], "name must not be empty");
    }
}
