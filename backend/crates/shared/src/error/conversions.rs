//! Error conversions at the HTTP boundary

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for super::app_error::AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(all(test, feature = "axum"))]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use crate::error::app_error::AppError;

    #[test]
    fn test_problem_details_status() {
        let response = AppError::unauthorized("Unauthorized").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
