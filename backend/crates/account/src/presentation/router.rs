//! Account Router
//!
//! Adapts framework-free controllers to axum handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use kernel::error::app_error::AppError;
use serde_json::Value;

use crate::presentation::protocols::{Controller, HttpRequest, HttpResponse, ResponseBody};

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match self.body {
            ResponseBody::Json(body) => (status, Json(body)).into_response(),
            ResponseBody::BadRequest(err) => AppError::bad_request(err.to_string())
                .with_action("Check the request body and try again")
                .into_response(),
            // The stack stays server-side.
            ResponseBody::ServerError(_) => {
                AppError::internal("Internal server error").into_response()
            }
            ResponseBody::Empty if status == StatusCode::UNAUTHORIZED => {
                AppError::unauthorized("Invalid email or password").into_response()
            }
            ResponseBody::Empty => status.into_response(),
        }
    }
}

/// Run `controller` for a JSON request body
pub async fn adapt_route<C>(
    State(controller): State<Arc<C>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response
where
    C: Controller + Sync + 'static,
{
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected request body");
            return AppError::bad_request("Request body must be a JSON object")
                .with_source(rejection)
                .into_response();
        }
    };

    controller.handle(HttpRequest::new(body)).await.into_response()
}

/// Create the account router
///
/// - `POST /signup`
/// - `POST /login`
pub fn account_router<S, L>(sign_up: Arc<S>, login: Arc<L>) -> Router
where
    S: Controller + Sync + 'static,
    L: Controller + Sync + 'static,
{
    let sign_up_routes = Router::new()
        .route("/signup", post(adapt_route::<S>))
        .with_state(sign_up);

    let login_routes = Router::new()
        .route("/login", post(adapt_route::<L>))
        .with_state(login);

    sign_up_routes.merge(login_routes)
}
