//! Presentation Layer
//!
//! Controllers, validation, the error logging decorator and the axum router.

pub mod controller;
pub mod decorator;
pub mod dto;
pub mod helpers;
pub mod protocols;
pub mod router;
pub mod validation;

pub use controller::{LoginController, SignUpController};
pub use decorator::LogControllerDecorator;
pub use protocols::{Controller, HttpRequest, HttpResponse, ResponseBody, ServerError};
pub use router::{account_router, adapt_route};
