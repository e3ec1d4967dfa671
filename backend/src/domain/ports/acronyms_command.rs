//! Driving port for acronym mutations.
//!
//! Every request carries the authenticated caller so the domain can apply its
//! access policy without knowing how the caller was identified.

use async_trait::async_trait;

use crate::domain::{Acronym, AcronymContent, AcronymId, CategoryId, Error, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAcronymRequest {
    pub caller: UserId,
    pub content: AcronymContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateAcronymRequest {
    pub acronym_id: AcronymId,
    pub caller: UserId,
    pub content: AcronymContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteAcronymRequest {
    pub acronym_id: AcronymId,
    pub caller: UserId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachCategoryRequest {
    pub acronym_id: AcronymId,
    pub category_id: CategoryId,
    pub caller: UserId,
}

#[async_trait]
pub trait AcronymsCommand: Send + Sync {
    /// Store a new acronym owned by the caller.
    async fn create_acronym(&self, request: CreateAcronymRequest) -> Result<Acronym, Error>;

    /// Overwrite both text fields and reassign ownership to the caller.
    async fn update_acronym(&self, request: UpdateAcronymRequest) -> Result<Acronym, Error>;

    /// Remove an acronym and its category links.
    async fn delete_acronym(&self, request: DeleteAcronymRequest) -> Result<(), Error>;

    /// Link an existing acronym to an existing category.
    async fn attach_category(&self, request: AttachCategoryRequest) -> Result<(), Error>;
}

/// Write side used when no database is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAcronymsCommand;

fn read_only() -> Error {
    Error::service_unavailable("acronym storage is not configured")
}

#[async_trait]
impl AcronymsCommand for FixtureAcronymsCommand {
    async fn create_acronym(&self, _request: CreateAcronymRequest) -> Result<Acronym, Error> {
        Err(read_only())
    }

    async fn update_acronym(&self, _request: UpdateAcronymRequest) -> Result<Acronym, Error> {
        Err(read_only())
    }

    async fn delete_acronym(&self, _request: DeleteAcronymRequest) -> Result<(), Error> {
        Err(read_only())
    }

    async fn attach_category(&self, _request: AttachCategoryRequest) -> Result<(), Error> {
        Err(read_only())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;

    #[tokio::test]
    async fn fixture_command_rejects_writes() {
        let err = FixtureAcronymsCommand
            .create_acronym(CreateAcronymRequest {
                caller: UserId::random(),
                content: AcronymContent {
                    short: "OMG".into(),
                    long: "Oh My God".into(),
                },
            })
            .await
            .expect_err("fixture mode is read-only");
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }
}
