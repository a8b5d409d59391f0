//! Login Controller

use std::sync::Arc;

use super::{decode_body, failure, parse_email};
use crate::domain::usecase::{Authentication, AuthenticationParams};
use crate::presentation::dto::{LoginRequest, LoginResponse};
use crate::presentation::helpers::{bad_request, ok, unauthorized};
use crate::presentation::protocols::{Controller, HttpRequest, HttpResponse};
use crate::presentation::validation::Validation;

/// 401 when authentication yields no token, 500 when it fails
pub struct LoginController<Au, V>
where
    Au: Authentication,
    V: Validation,
{
    authentication: Arc<Au>,
    validation: Arc<V>,
}

impl<Au, V> LoginController<Au, V>
where
    Au: Authentication,
    V: Validation,
{
    pub fn new(authentication: Arc<Au>, validation: Arc<V>) -> Self {
        Self {
            authentication,
            validation,
        }
    }
}

impl<Au, V> Controller for LoginController<Au, V>
where
    Au: Authentication + Sync,
    V: Validation,
{
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        if let Some(error) = self.validation.validate(&request.body) {
            return bad_request(error);
        }

        let input: LoginRequest = match decode_body(request.body) {
            Ok(input) => input,
            Err(error) => return bad_request(error),
        };

        let email = match parse_email(&input.email) {
            Ok(email) => email,
            Err(error) => return bad_request(error),
        };

        let credentials = AuthenticationParams {
            email,
            password: input.password,
        };

        match self.authentication.auth(credentials).await {
            Ok(Some(access_token)) => ok(&LoginResponse {
                access_token: access_token.into_string(),
            }),
            Ok(None) => unauthorized(),
            Err(err) => failure(&err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::protocols::ResponseBody;
    use crate::presentation::validation::ValidationError;
    use crate::test_support::*;
    use serde_json::json;

    fn sut(
        auth: Outcome,
        validation: ValidationSpy,
    ) -> (
        LoginController<AuthenticationStub, ValidationSpy>,
        Arc<AuthenticationStub>,
        Arc<ValidationSpy>,
    ) {
        let authentication = Arc::new(AuthenticationStub::new(auth));
        let validation = Arc::new(validation);
        (
            LoginController::new(authentication.clone(), validation.clone()),
            authentication,
            validation,
        )
    }

    fn request() -> HttpRequest {
        HttpRequest::new(json!({
            "email": "any_email@email.com",
            "password": "valid_password",
        }))
    }

    #[tokio::test]
    async fn test_calls_validation_with_body() {
        let (sut, _, validation) = sut(Outcome::Success, ValidationSpy::default());

        sut.handle(request()).await;

        assert_eq!(*validation.inputs.lock().unwrap(), vec![request().body]);
    }

    #[tokio::test]
    async fn test_validation_error_is_400() {
        let (sut, authentication, _) = sut(
            Outcome::Success,
            ValidationSpy::rejecting(ValidationError::missing_param("any_field")),
        );

        let response = sut.handle(request()).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(
            response.body,
            ResponseBody::BadRequest(ValidationError::missing_param("any_field"))
        );
        assert!(authentication.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_calls_authentication_with_credentials() {
        let (sut, authentication, _) = sut(Outcome::Success, ValidationSpy::default());

        sut.handle(request()).await;

        assert_eq!(
            *authentication.calls.lock().unwrap(),
            vec![(any_email(), "valid_password".to_string())]
        );
    }

    #[tokio::test]
    async fn test_no_token_is_401() {
        let (sut, _, _) = sut(Outcome::Empty, ValidationSpy::default());

        let response = sut.handle(request()).await;

        assert_eq!(response, unauthorized());
    }

    #[tokio::test]
    async fn test_authentication_failure_is_500() {
        let (sut, _, _) = sut(Outcome::Failure, ValidationSpy::default());

        let response = sut.handle(request()).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(
            response.server_error_stack(),
            Some("Error: Internal error: authentication failed")
        );
    }

    #[tokio::test]
    async fn test_token_is_200() {
        let (sut, _, _) = sut(Outcome::Success, ValidationSpy::default());

        let response = sut.handle(request()).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.body,
            ResponseBody::Json(json!({ "accessToken": "any_token" }))
        );
    }
}
