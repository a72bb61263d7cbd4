use crate::ingestion::IngestionError;
use crate::model::response::ErrorResponse;
use crate::repository::database::RepositoryError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use log::error;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Validation(String),
    #[error("Ingestion failed: {0}")]
    Ingestion(#[from] IngestionError),
    #[error("Internal server error")]
    Repository(RepositoryError),
    #[error("Internal server error")]
    PasswordHash(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        ServiceError::NotFound(format!("{entity} not found"))
    }
}

/// Unique-key races that slip past the service checks still surface as conflicts.
impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Database(DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                info,
            )) => ServiceError::Conflict(
                info.details()
                    .unwrap_or("Record already exists")
                    .to_string(),
            ),
            other => ServiceError::Repository(other),
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        ServiceError::Validation(errors.to_string())
    }
}

impl From<argon2::password_hash::Error> for ServiceError {
    fn from(err: argon2::password_hash::Error) -> Self {
        ServiceError::PasswordHash(err.to_string())
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Conflict(_) => StatusCode::BAD_REQUEST,
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Ingestion(_)
            | ServiceError::Repository(_)
            | ServiceError::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::Repository(err) => {
                error!("An error occurred while talking to the database. The error: {:?}", err)
            }
            ServiceError::PasswordHash(err) => {
                error!("An error occurred while hashing a password. The error: {}", err)
            }
            _ => {}
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            detail: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn detail_of(err: ServiceError) -> (StatusCode, ErrorResponse) {
        let response = err.error_response();
        let status = response.status();
        let body = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[actix_web::test]
    async fn maps_to_status_and_detail() {
        let (status, body) = detail_of(ServiceError::not_found("Team")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.detail, "Team not found");

        let (status, body) =
            detail_of(ServiceError::Conflict("Email already registered".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.detail, "Email already registered");

        let (status, _) = detail_of(ServiceError::Validation("name: too short".into())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn store_errors_hide_details() {
        let err = ServiceError::from(RepositoryError::Database(diesel::result::Error::NotFound));
        let (status, body) = detail_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.detail, "Internal server error");
    }

    #[actix_web::test]
    async fn unique_violations_become_conflicts() {
        let info = "duplicate key value violates unique constraint \"users_email_key\"".to_string();
        let err = ServiceError::from(RepositoryError::Database(DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new(info),
        )));
        let (status, body) = detail_of(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.detail, "Record already exists");

        let err = ServiceError::from(RepositoryError::Database(DieselError::DatabaseError(
            DatabaseErrorKind::ForeignKeyViolation,
            Box::new("insert or update violates foreign key constraint".to_string()),
        )));
        let (status, _) = detail_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn ingestion_failures_carry_the_cause() {
        let err = ServiceError::from(IngestionError::MissingBaseUrl("WORLD_RUGBY".into()));
        let (status, body) = detail_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.detail.contains("WORLD_RUGBY"));
    }
}
