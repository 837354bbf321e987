use actix_web::{http::StatusCode, HttpResponse, ResponseError};

#[derive(Debug, serde::Serialize)]
struct Res {
    message: String,
}

/// Everything a request handler can fail with. The HTTP mapping lives in the
/// `ResponseError` impl below so individual handlers never build error
/// responses themselves.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    InvalidDuration(String),
    #[error("room is already booked for this time slot")]
    BookingConflict,
    #[error("room is not available")]
    RoomUnavailable,
    #[error("{0}")]
    InvalidState(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    AlreadyExists(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("blocking task was canceled")]
    Canceled(#[from] actix_web::error::BlockingError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BookingConflict | ApiError::AlreadyExists(_) => StatusCode::CONFLICT,
            ApiError::InvalidDuration(_)
            | ApiError::RoomUnavailable
            | ApiError::InvalidState(_)
            | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Database(_) | ApiError::Pool(_) | ApiError::Canceled(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("request failed: {:?}", self);
        }
        HttpResponse::build(self.status_code()).json(Res {
            message: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_maps_to_expected_status_codes() {
        assert_eq!(
            ApiError::NotFound("booking").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::BookingConflict.status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::InvalidDuration("too short".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::RoomUnavailable.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidState("not pending".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Forbidden("admin only".into()).status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn not_found_message_names_the_entity() {
        assert_eq!(ApiError::NotFound("room").to_string(), "room not found");
    }
}
