//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`; these wrappers mirror their JSON
//! shape and register under the domain type's name.

#![expect(
    dead_code,
    reason = "fields exist only for OpenAPI schema generation via utoipa"
)]

use utoipa::ToSchema;

/// Stable machine-readable error codes.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    #[schema(rename = "unauthorized")]
    Unauthorized,
    #[schema(rename = "forbidden")]
    Forbidden,
    #[schema(rename = "not_found")]
    NotFound,
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Error response payload.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
pub struct ErrorSchema {
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    #[schema(example = "acronym 3f0c1d52-8a1b-4c43-9d6e-0f1e2d3c4b5a not found")]
    message: String,
    #[schema(format = "uuid")]
    trace_id: Option<String>,
    details: Option<serde_json::Value>,
}

/// A stored acronym.
#[derive(ToSchema)]
#[schema(as = crate::domain::Acronym)]
#[schema(rename_all = "camelCase")]
pub struct AcronymSchema {
    #[schema(format = "uuid")]
    id: String,
    #[schema(example = "OMG")]
    short: String,
    #[schema(example = "Oh My God")]
    long: String,
    #[schema(format = "uuid")]
    user_id: String,
}

/// A category acronyms can be filed under.
#[derive(ToSchema)]
#[schema(as = crate::domain::Category)]
pub struct CategorySchema {
    #[schema(format = "uuid")]
    id: String,
    #[schema(example = "Teenager")]
    name: String,
}

/// Public user projection; never includes credentials.
#[derive(ToSchema)]
#[schema(as = crate::domain::PublicUser)]
pub struct PublicUserSchema {
    #[schema(format = "uuid")]
    id: String,
    #[schema(example = "Ada Lovelace")]
    name: String,
    #[schema(example = "ada")]
    username: String,
}
