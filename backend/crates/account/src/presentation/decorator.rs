//! Error Logging Decorator
//!
//! Wraps any controller. Every 500 it produces is persisted through the
//! error log before the response goes back out, unchanged.

use std::sync::Arc;

use crate::domain::repository::LogErrorRepository;
use crate::presentation::protocols::{Controller, HttpRequest, HttpResponse};

pub struct LogControllerDecorator<C, L>
where
    C: Controller,
    L: LogErrorRepository,
{
    controller: Arc<C>,
    log_error_repo: Arc<L>,
}

impl<C, L> LogControllerDecorator<C, L>
where
    C: Controller,
    L: LogErrorRepository,
{
    pub fn new(controller: Arc<C>, log_error_repo: Arc<L>) -> Self {
        Self {
            controller,
            log_error_repo,
        }
    }
}

impl<C, L> Controller for LogControllerDecorator<C, L>
where
    C: Controller + Sync,
    L: LogErrorRepository + Sync,
{
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let response = self.controller.handle(request).await;

        if response.status_code == 500 {
            let stack = response.server_error_stack().unwrap_or_default();
            // The caller still gets its 500 if the log write fails.
            if let Err(err) = self.log_error_repo.log_error(stack).await {
                tracing::error!(error = %err, "Failed to persist error log");
            }
        }

        response
    }
}
