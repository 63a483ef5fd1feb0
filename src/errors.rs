use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::DomainError;
use crate::handlers::envelope::ApiResponse;

pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred while processing the request.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    /// An order referenced a customer or product that does not exist.
    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Status recorded inside the response envelope. Rejected orders report
    /// 404 there while the transport status stays 400.
    pub fn envelope_status(&self) -> StatusCode {
        match self {
            AppError::Rejected(_) => StatusCode::NOT_FOUND,
            _ => self.transport_status(),
        }
    }

    fn transport_status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Rejected(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn client_message(&self) -> String {
        match self {
            AppError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(_) => AppError::NotFound(e.to_string()),
            DomainError::CustomerNotFound(_) | DomainError::ProductNotFound(_) => {
                AppError::Rejected(e.to_string())
            }
            DomainError::Conflict(msg) => AppError::Conflict(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.transport_status()
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Internal(cause) = self {
            log::error!("Request failed: {}", cause);
        }
        HttpResponse::build(self.transport_status()).json(ApiResponse::<()>::new(
            None,
            self.envelope_status(),
            Some(self.client_message()),
        ))
    }
}
