//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::value_object::{AccountId, email::Email};

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request (after validation; `passwordConfirmation` is not needed here)
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Sign up response; the password hash is never exposed
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub id: AccountId,
    pub name: String,
    pub email: Email,
    pub access_token: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}
