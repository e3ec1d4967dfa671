//! Domain primitives, ports, and services.
//!
//! Purpose: define the acronym catalogue's entities and the use-case
//! boundary the HTTP and persistence adapters plug into.
//!
//! Public surface:
//! - Acronym, Category, User: catalogue entities and their identifiers.
//! - PublicUser / public_user: credential-free user projection.
//! - AccessToken: validated bearer token with a storage fingerprint.
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - AcronymService / AccessPolicy: implementation of the acronym ports.

pub mod acronym;
pub mod acronym_service;
pub mod auth;
pub mod category;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::acronym::{Acronym, AcronymContent, AcronymId, NewAcronym};
pub use self::acronym_service::{AccessPolicy, AcronymService};
pub use self::auth::{AccessToken, AccessTokenValidationError};
pub use self::category::{Category, CategoryId};
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{PublicUser, User, UserId, public_user};

