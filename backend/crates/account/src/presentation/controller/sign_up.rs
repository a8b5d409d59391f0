//! Sign Up Controller
//!
//! Validates, creates the account, then logs it in with the same credentials.

use std::sync::Arc;

use super::{decode_body, failure, parse_email};
use crate::domain::usecase::{AddAccount, AddAccountParams, Authentication, AuthenticationParams};
use crate::error::{AccountError, AccountResult};
use crate::presentation::dto::{SignUpRequest, SignUpResponse};
use crate::presentation::helpers::{bad_request, ok};
use crate::presentation::protocols::{Controller, HttpRequest, HttpResponse};
use crate::presentation::validation::Validation;

pub struct SignUpController<A, Au, V>
where
    A: AddAccount,
    Au: Authentication,
    V: Validation,
{
    add_account: Arc<A>,
    authentication: Arc<Au>,
    validation: Arc<V>,
}

impl<A, Au, V> SignUpController<A, Au, V>
where
    A: AddAccount,
    Au: Authentication,
    V: Validation,
{
    pub fn new(add_account: Arc<A>, authentication: Arc<Au>, validation: Arc<V>) -> Self {
        Self {
            add_account,
            authentication,
            validation,
        }
    }
}

impl<A, Au, V> SignUpController<A, Au, V>
where
    A: AddAccount + Sync,
    Au: Authentication + Sync,
    V: Validation,
{
    async fn create_and_authenticate(
        &self,
        params: AddAccountParams,
    ) -> AccountResult<SignUpResponse> {
        let credentials = AuthenticationParams {
            email: params.email.clone(),
            password: params.password.clone(),
        };

        let account = self.add_account.add(params).await?;

        // The account was persisted above, so `None` means storage lost it.
        let access_token = self
            .authentication
            .auth(credentials)
            .await?
            .ok_or_else(|| {
                AccountError::Internal(format!(
                    "Account {} could not be authenticated right after creation",
                    account.id
                ))
            })?;

        Ok(SignUpResponse {
            id: account.id,
            name: account.name,
            email: account.email,
            access_token: access_token.into_string(),
        })
    }
}

impl<A, Au, V> Controller for SignUpController<A, Au, V>
where
    A: AddAccount + Sync,
    Au: Authentication + Sync,
    V: Validation,
{
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        if let Some(error) = self.validation.validate(&request.body) {
            return bad_request(error);
        }

        let input: SignUpRequest = match decode_body(request.body) {
            Ok(input) => input,
            Err(error) => return bad_request(error),
        };

        let email = match parse_email(&input.email) {
            Ok(email) => email,
            Err(error) => return bad_request(error),
        };

        let params = AddAccountParams {
            name: input.name,
            email,
            password: input.password,
        };

        match self.create_and_authenticate(params).await {
            Ok(response) => ok(&response),
            Err(err) => failure(&err),
        }
    }
}
