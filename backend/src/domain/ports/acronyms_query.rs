//! Driving port for read-only acronym use-cases.

use async_trait::async_trait;

use crate::domain::{Acronym, AcronymId, Category, Error, PublicUser};

#[async_trait]
pub trait AcronymsQuery: Send + Sync {
    /// Every stored acronym.
    async fn list_acronyms(&self) -> Result<Vec<Acronym>, Error>;

    /// One acronym, or `not_found`.
    async fn get_acronym(&self, id: &AcronymId) -> Result<Acronym, Error>;

    /// Public projection of the acronym's owner.
    async fn get_owner(&self, id: &AcronymId) -> Result<PublicUser, Error>;

    /// Categories linked to the acronym.
    async fn get_categories(&self, id: &AcronymId) -> Result<Vec<Category>, Error>;

    /// Acronyms whose short form or expansion equals `term`.
    async fn search(&self, term: &str) -> Result<Vec<Acronym>, Error>;
}

/// Read side used when no database is configured: an empty catalogue.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAcronymsQuery;

fn fixture_not_found(id: &AcronymId) -> Error {
    Error::not_found(format!("acronym {id} not found"))
}

#[async_trait]
impl AcronymsQuery for FixtureAcronymsQuery {
    async fn list_acronyms(&self) -> Result<Vec<Acronym>, Error> {
        Ok(Vec::new())
    }

    async fn get_acronym(&self, id: &AcronymId) -> Result<Acronym, Error> {
        Err(fixture_not_found(id))
    }

    async fn get_owner(&self, id: &AcronymId) -> Result<PublicUser, Error> {
        Err(fixture_not_found(id))
    }

    async fn get_categories(&self, id: &AcronymId) -> Result<Vec<Category>, Error> {
        Err(fixture_not_found(id))
    }

    async fn search(&self, _term: &str) -> Result<Vec<Acronym>, Error> {
        Ok(Vec::new())
    }
}
