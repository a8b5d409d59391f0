//! HTTP response helpers

use std::error::Error;

use serde::Serialize;

use crate::presentation::protocols::{HttpResponse, ResponseBody, ServerError};
use crate::presentation::validation::ValidationError;

pub fn bad_request(error: ValidationError) -> HttpResponse {
    HttpResponse {
        status_code: 400,
        body: ResponseBody::BadRequest(error),
    }
}

pub fn unauthorized() -> HttpResponse {
    HttpResponse {
        status_code: 401,
        body: ResponseBody::Empty,
    }
}

pub fn server_error(error: &(dyn Error + 'static)) -> HttpResponse {
    HttpResponse {
        status_code: 500,
        body: ResponseBody::ServerError(ServerError::new(error)),
    }
}

/// 200 with `body` as JSON; a body that cannot be serialized is a 500
pub fn ok<T: Serialize>(body: &T) -> HttpResponse {
    match serde_json::to_value(body) {
        Ok(value) => HttpResponse {
            status_code: 200,
            body: ResponseBody::Json(value),
        },
        Err(err) => {
            tracing::error!(error = %err, "Failed to serialize response body");
            server_error(&err)
        }
    }
}
