//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod acronym_repository;
mod acronyms_command;
mod acronyms_query;
mod category_repository;
mod token_authenticator;
mod user_repository;

#[cfg(test)]
pub use acronym_repository::MockAcronymRepository;
pub use acronym_repository::{AcronymRepository, AcronymRepositoryError};
pub use acronyms_command::{
    AcronymsCommand, AttachCategoryRequest, CreateAcronymRequest, DeleteAcronymRequest,
    FixtureAcronymsCommand, UpdateAcronymRequest,
};
pub use acronyms_query::{AcronymsQuery, FixtureAcronymsQuery};
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
pub use category_repository::{CategoryRepository, CategoryRepositoryError};
pub use token_authenticator::{FIXTURE_USER_ID, FixtureTokenAuthenticator, TokenAuthenticator};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
