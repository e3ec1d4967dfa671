//! Acronym domain service.
//!
//! Implements both acronym driving ports over the acronym, category, and user
//! repositories. Mutations are gated by an [`AccessPolicy`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    AcronymRepository, AcronymRepositoryError, AcronymsCommand, AcronymsQuery,
    AttachCategoryRequest, CategoryRepository, CategoryRepositoryError, CreateAcronymRequest,
    DeleteAcronymRequest, UpdateAcronymRequest, UserRepository, UserRepositoryError,
};
use crate::domain::{
    Acronym, AcronymId, Category, CategoryId, Error, NewAcronym, PublicUser, UserId, public_user,
};

/// Who may mutate an existing acronym.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Any authenticated caller may update, delete, or attach.
    #[default]
    OpenAccess,
    /// Only the current owner may mutate the acronym.
    OwnerOnly,
}

impl AccessPolicy {
    fn check(self, acronym: &Acronym, caller: UserId) -> Result<(), Error> {
        match self {
            Self::OpenAccess => Ok(()),
            Self::OwnerOnly if acronym.user_id() == caller => Ok(()),
            Self::OwnerOnly => Err(Error::forbidden(format!(
                "acronym {} is owned by another user",
                acronym.id()
            ))),
        }
    }
}

fn map_acronym_error(error: AcronymRepositoryError) -> Error {
    match error {
        AcronymRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("acronym repository unavailable: {message}"))
        }
        AcronymRepositoryError::Query { message } => {
            Error::internal(format!("acronym repository error: {message}"))
        }
    }
}

fn map_category_error(error: CategoryRepositoryError) -> Error {
    match error {
        CategoryRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("category repository unavailable: {message}"))
        }
        CategoryRepositoryError::Query { message } => {
            Error::internal(format!("category repository error: {message}"))
        }
    }
}

fn map_user_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

fn acronym_not_found(id: &AcronymId) -> Error {
    Error::not_found(format!("acronym {id} not found"))
}

fn category_not_found(id: &CategoryId) -> Error {
    Error::not_found(format!("category {id} not found"))
}

/// Acronym service implementing [`AcronymsQuery`] and [`AcronymsCommand`].
pub struct AcronymService<A, C, U> {
    acronyms: Arc<A>,
    categories: Arc<C>,
    users: Arc<U>,
    policy: AccessPolicy,
}

impl<A, C, U> Clone for AcronymService<A, C, U> {
    fn clone(&self) -> Self {
        Self {
            acronyms: Arc::clone(&self.acronyms),
            categories: Arc::clone(&self.categories),
            users: Arc::clone(&self.users),
            policy: self.policy,
        }
    }
}

impl<A, C, U> AcronymService<A, C, U> {
    /// Create a service with the default open-access policy.
    pub fn new(acronyms: Arc<A>, categories: Arc<C>, users: Arc<U>) -> Self {
        Self {
            acronyms,
            categories,
            users,
            policy: AccessPolicy::default(),
        }
    }

    /// Replace the mutation access policy.
    #[must_use]
    pub fn with_policy(mut self, policy: AccessPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl<A, C, U> AcronymService<A, C, U>
where
    A: AcronymRepository,
{
    async fn require_acronym(&self, id: &AcronymId) -> Result<Acronym, Error> {
        self.acronyms
            .find_by_id(id)
            .await
            .map_err(map_acronym_error)?
            .ok_or_else(|| acronym_not_found(id))
    }
}

#[async_trait]
impl<A, C, U> AcronymsQuery for AcronymService<A, C, U>
where
    A: AcronymRepository,
    C: CategoryRepository,
    U: UserRepository,
{
    async fn list_acronyms(&self) -> Result<Vec<Acronym>, Error> {
        self.acronyms.list_all().await.map_err(map_acronym_error)
    }

    async fn get_acronym(&self, id: &AcronymId) -> Result<Acronym, Error> {
        self.require_acronym(id).await
    }

    async fn get_owner(&self, id: &AcronymId) -> Result<PublicUser, Error> {
        let acronym = self.require_acronym(id).await?;
        let owner = acronym.user_id();
        let user = self
            .users
            .find_by_id(&owner)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::not_found(format!("owner {owner} of acronym {id} not found")))?;
        Ok(public_user(user))
    }

    async fn get_categories(&self, id: &AcronymId) -> Result<Vec<Category>, Error> {
        self.require_acronym(id).await?;
        self.acronyms
            .categories_for(id)
            .await
            .map_err(map_acronym_error)
    }

    async fn search(&self, term: &str) -> Result<Vec<Acronym>, Error> {
        self.acronyms.search(term).await.map_err(map_acronym_error)
    }
}

#[async_trait]
impl<A, C, U> AcronymsCommand for AcronymService<A, C, U>
where
    A: AcronymRepository,
    C: CategoryRepository,
    U: UserRepository,
{
    async fn create_acronym(&self, request: CreateAcronymRequest) -> Result<Acronym, Error> {
        let new = NewAcronym {
            content: request.content,
            user_id: request.caller,
        };
        self.acronyms.insert(&new).await.map_err(map_acronym_error)
    }

    async fn update_acronym(&self, request: UpdateAcronymRequest) -> Result<Acronym, Error> {
        let UpdateAcronymRequest {
            acronym_id,
            caller,
            content,
        } = request;
        let mut acronym = self.require_acronym(&acronym_id).await?;
        self.policy.check(&acronym, caller)?;

        if acronym.user_id() != caller {
            debug!(
                acronym_id = %acronym_id,
                previous_owner = %acronym.user_id(),
                new_owner = %caller,
                "update reassigns acronym owner"
            );
        }
        acronym.revise(content, caller);

        let updated = self
            .acronyms
            .update(&acronym)
            .await
            .map_err(map_acronym_error)?;
        if !updated {
            return Err(acronym_not_found(&acronym_id));
        }
        Ok(acronym)
    }

    async fn delete_acronym(&self, request: DeleteAcronymRequest) -> Result<(), Error> {
        let acronym = self.require_acronym(&request.acronym_id).await?;
        self.policy.check(&acronym, request.caller)?;

        let deleted = self
            .acronyms
            .delete(&request.acronym_id)
            .await
            .map_err(map_acronym_error)?;
        if deleted {
            Ok(())
        } else {
            Err(acronym_not_found(&request.acronym_id))
        }
    }

    async fn attach_category(&self, request: AttachCategoryRequest) -> Result<(), Error> {
        let AttachCategoryRequest {
            acronym_id,
            category_id,
            caller,
        } = request;

        let (acronym, category) = tokio::try_join!(self.require_acronym(&acronym_id), async {
            self.categories
                .find_by_id(&category_id)
                .await
                .map_err(map_category_error)?
                .ok_or_else(|| category_not_found(&category_id))
        })?;
        self.policy.check(&acronym, caller)?;

        self.acronyms
            .attach_category(&acronym.id(), &category.id)
            .await
            .map_err(map_acronym_error)
    }
}

#[cfg(test)]
#[path = "acronym_service_tests.rs"]
mod tests;
