//! Driven port for acronym persistence, including the category link table.

use async_trait::async_trait;

use crate::domain::{Acronym, AcronymId, Category, CategoryId, NewAcronym};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by acronym repository adapters.
    pub enum AcronymRepositoryError {
        /// Repository connection could not be established.
        Connection => "acronym repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query => "acronym repository query failed: {message}",
    }
}

/// Storage operations over acronyms and their category links.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AcronymRepository: Send + Sync {
    /// Every stored acronym.
    async fn list_all(&self) -> Result<Vec<Acronym>, AcronymRepositoryError>;

    /// Fetch an acronym by identifier.
    async fn find_by_id(&self, id: &AcronymId) -> Result<Option<Acronym>, AcronymRepositoryError>;

    /// Acronyms whose short form or expansion equals `term` exactly.
    async fn search(&self, term: &str) -> Result<Vec<Acronym>, AcronymRepositoryError>;

    /// Insert a new acronym and return it with its assigned identifier.
    async fn insert(&self, acronym: &NewAcronym) -> Result<Acronym, AcronymRepositoryError>;

    /// Persist changed fields of an existing acronym.
    ///
    /// Returns `false` when no row with that identifier exists.
    async fn update(&self, acronym: &Acronym) -> Result<bool, AcronymRepositoryError>;

    /// Delete an acronym. Returns `false` when nothing was deleted.
    async fn delete(&self, id: &AcronymId) -> Result<bool, AcronymRepositoryError>;

    /// Categories linked to the acronym, in no particular order.
    async fn categories_for(&self, id: &AcronymId)
    -> Result<Vec<Category>, AcronymRepositoryError>;

    /// Link an acronym to a category. Linking an existing pair is a no-op.
    async fn attach_category(
        &self,
        acronym_id: &AcronymId,
        category_id: &CategoryId,
    ) -> Result<(), AcronymRepositoryError>;
}
