//! Acronym catalogue backend.
//!
//! Hexagonal layout: `domain` holds entities, ports, and the acronym service;
//! `inbound::http` exposes them over actix-web; `outbound::persistence`
//! implements the driven ports with Diesel.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
