use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::student::StudentError;
use tracing::{error, warn};

/// HTTP face of a failed student request. Every variant renders the same
/// `{"error", "kind", "code"}` body.
#[derive(Debug)]
pub enum ApiError {
    Student(StudentError),
    InvalidBody(JsonRejection),
    InvalidPath(PathRejection),
}

impl From<StudentError> for ApiError {
    fn from(e: StudentError) -> Self { Self::Student(e) }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self { Self::InvalidBody(e) }
}

impl From<PathRejection> for ApiError {
    fn from(e: PathRejection) -> Self { Self::InvalidPath(e) }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Student(e) if e.is_validation() => StatusCode::BAD_REQUEST,
            ApiError::Student(StudentError::DuplicateEmail) => StatusCode::CONFLICT,
            ApiError::Student(StudentError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Student(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidBody(r) => r.status(),
            ApiError::InvalidPath(r) => r.status(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Student(e) => e.kind(),
            ApiError::InvalidBody(_) => "InvalidBody",
            ApiError::InvalidPath(_) => "InvalidPath",
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            ApiError::Student(e) => e.code(),
            ApiError::InvalidBody(_) => 1301,
            ApiError::InvalidPath(_) => 1302,
        }
    }

    /// Text safe to show the caller; storage details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Student(StudentError::Repository(_)) => "Internal server error.".to_string(),
            ApiError::Student(e) => e.to_string(),
            ApiError::InvalidBody(r) => r.body_text(),
            ApiError::InvalidPath(r) => r.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            let detail = match &self {
                ApiError::Student(e) => e.to_string(),
                other => other.public_message(),
            };
            error!(error = %detail, code = self.code(), "student operation failed");
        } else {
            warn!(kind = self.kind(), code = self.code(), "student request rejected");
        }
        let body = serde_json::json!({
            "error": self.public_message(),
            "kind": self.kind(),
            "code": self.code(),
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(ApiError::from(StudentError::MissingField).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::from(StudentError::InvalidPhoneFormat).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::from(StudentError::DuplicateEmail).status(), StatusCode::CONFLICT);
        assert_eq!(ApiError::from(StudentError::NotFound).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(StudentError::Repository("locked".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn repository_detail_is_not_sent_to_client() {
        let resp = ApiError::from(StudentError::Repository("database is locked: students.db".into())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Internal server error.");
        assert_eq!(body["kind"], "Repository");
        assert_eq!(body["code"], 1200);
        assert!(!String::from_utf8_lossy(&bytes).contains("locked"));
    }
}
