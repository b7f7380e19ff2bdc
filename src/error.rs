use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    #[error("Invalid product id: {0}")]
    InvalidId(String),

    #[error("Product not found: {0}")]
    UnknownProduct(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Database not configured")]
    StoreUnavailable,

    #[error("Database error")]
    Store(#[from] mongodb::error::Error),

    #[error("Document encoding error")]
    Bson(#[from] mongodb::bson::ser::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) | AppError::MalformedBody(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::InvalidId(_) | AppError::UnknownProduct(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::StoreUnavailable | AppError::Store(_) | AppError::Bson(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Validation failures additionally carry the per-field errors so
        // clients can highlight the offending inputs.
        let details = match &self {
            AppError::Validation(errors) => serde_json::to_value(errors).ok(),
            _ => None,
        };

        let body = ErrorBody {
            error: self.to_string(),
            details,
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(range(min = 0.0))]
        price: f64,
    }

    #[test]
    fn statuses_match_taxonomy() {
        let errors = Probe { price: -1.0 }.validate().unwrap_err();
        assert_eq!(
            AppError::Validation(errors).into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::MalformedBody("bad json".into())
                .into_response()
                .status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::InvalidId("zzz".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UnknownProduct("65f".into())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("Product").into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::StoreUnavailable.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn messages_name_the_offending_id() {
        assert_eq!(
            AppError::InvalidId("zzz".into()).to_string(),
            "Invalid product id: zzz"
        );
        assert_eq!(
            AppError::UnknownProduct("65f".into()).to_string(),
            "Product not found: 65f"
        );
    }
}
