//! Composition Root
//!
//! Wires adapters, use cases, validation and controllers together. Every
//! controller leaves here wrapped in the error logging decorator.

use std::sync::Arc;

use account::application::{AccountConfig, AddAccountUseCase, AuthenticationUseCase};
use account::infra::{Argon2Adapter, HmacEncrypter, PgAccountRepository, PgLogErrorRepository};
use account::presentation::validation::{
    CompareFieldsValidation, EmailFormatValidator, EmailValidation, RequiredFieldValidation,
    ValidationComposite,
};
use account::presentation::{
    Controller, LogControllerDecorator, LoginController, SignUpController, account_router,
};
use axum::Router;
use sqlx::PgPool;

pub fn make_sign_up_validation() -> ValidationComposite {
    ValidationComposite::new(vec![
        Box::new(RequiredFieldValidation::new("name")),
        Box::new(RequiredFieldValidation::new("email")),
        Box::new(RequiredFieldValidation::new("password")),
        Box::new(RequiredFieldValidation::new("passwordConfirmation")),
        Box::new(CompareFieldsValidation::new(
            "password",
            "passwordConfirmation",
        )),
        Box::new(EmailValidation::new("email", Arc::new(EmailFormatValidator))),
    ])
}

pub fn make_login_validation() -> ValidationComposite {
    ValidationComposite::new(vec![
        Box::new(RequiredFieldValidation::new("email")),
        Box::new(RequiredFieldValidation::new("password")),
        Box::new(EmailValidation::new("email", Arc::new(EmailFormatValidator))),
    ])
}

fn make_authentication(
    pool: &PgPool,
    config: &AccountConfig,
) -> AuthenticationUseCase<PgAccountRepository, Argon2Adapter, HmacEncrypter, PgAccountRepository>
{
    let account_repo = Arc::new(PgAccountRepository::new(pool.clone()));
    AuthenticationUseCase::new(
        account_repo.clone(),
        Arc::new(Argon2Adapter::from_config(config)),
        Arc::new(HmacEncrypter::from_config(config)),
        account_repo,
    )
}

pub fn make_sign_up_controller(
    pool: &PgPool,
    config: &AccountConfig,
) -> impl Controller + Sync + 'static {
    let add_account = AddAccountUseCase::new(
        Arc::new(Argon2Adapter::from_config(config)),
        Arc::new(PgAccountRepository::new(pool.clone())),
    );
    let controller = SignUpController::new(
        Arc::new(add_account),
        Arc::new(make_authentication(pool, config)),
        Arc::new(make_sign_up_validation()),
    );
    LogControllerDecorator::new(
        Arc::new(controller),
        Arc::new(PgLogErrorRepository::new(pool.clone())),
    )
}

pub fn make_login_controller(
    pool: &PgPool,
    config: &AccountConfig,
) -> impl Controller + Sync + 'static {
    let controller = LoginController::new(
        Arc::new(make_authentication(pool, config)),
        Arc::new(make_login_validation()),
    );
    LogControllerDecorator::new(
        Arc::new(controller),
        Arc::new(PgLogErrorRepository::new(pool.clone())),
    )
}

/// Account routes backed by `pool`
pub fn make_account_router(pool: &PgPool, config: &AccountConfig) -> Router {
    account_router(
        Arc::new(make_sign_up_controller(pool, config)),
        Arc::new(make_login_controller(pool, config)),
    )
}
