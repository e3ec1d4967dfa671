//! PostgreSQL persistence adapters using Diesel.
//!
//! Adapters translate between Diesel rows and domain types and hold no
//! business logic. Row structs and the schema stay private to this module.
//! Queries run through `diesel-async` on a shared `bb8` pool.
//!
//! ```ignore
//! use acronyms_backend::outbound::persistence::{DbPool, DieselAcronymRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/acronyms")).await?;
//! let repo = DieselAcronymRepository::new(pool);
//! ```

mod diesel_acronym_repository;
mod diesel_category_repository;
mod diesel_token_authenticator;
mod diesel_user_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_acronym_repository::DieselAcronymRepository;
pub use diesel_category_repository::DieselCategoryRepository;
pub use diesel_token_authenticator::DieselTokenAuthenticator;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
