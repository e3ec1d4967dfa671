//! HTTP inbound adapter exposing the acronym REST endpoints.

pub mod acronyms;
pub mod auth;
pub mod error;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::ApiResult;
