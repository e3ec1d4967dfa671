//! In-memory adapters for tests.
//!
//! [`InMemoryStore`] implements every driven port plus the token
//! authenticator over one shared map, so handler and integration tests can
//! exercise the real [`AcronymService`] without PostgreSQL. Compiled for unit
//! tests and behind the `test-support` feature for `tests/`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{
    AcronymRepository, AcronymRepositoryError, CategoryRepository, CategoryRepositoryError,
    TokenAuthenticator, UserRepository, UserRepositoryError,
};
use crate::domain::{
    AccessPolicy, AccessToken, Acronym, AcronymId, AcronymService, Category, CategoryId, Error,
    NewAcronym, User, UserId,
};
use crate::inbound::http::state::HttpState;

#[derive(Default)]
struct StoreState {
    users: HashMap<UserId, User>,
    tokens: HashMap<String, UserId>,
    acronyms: Vec<Acronym>,
    categories: HashMap<CategoryId, Category>,
    links: Vec<(AcronymId, CategoryId)>,
}

/// Shared in-memory catalogue. Clones observe the same data.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_user(&self, name: &str, username: &str) -> User {
        let user = User::new(UserId::random(), name, username, "$2b$12$not-a-real-hash");
        self.lock().users.insert(user.id(), user.clone());
        user
    }

    /// Register `raw` as a bearer token for `user`.
    pub fn issue_token(&self, user: &User, raw: &str) -> AccessToken {
        let token = AccessToken::new(raw).unwrap_or_else(|err| panic!("test token {raw:?}: {err}"));
        self.lock().tokens.insert(token.fingerprint(), user.id());
        token
    }

    pub fn add_category(&self, name: &str) -> Category {
        let category = Category::new(CategoryId::random(), name);
        self.lock().categories.insert(category.id, category.clone());
        category
    }

    pub fn add_acronym(&self, short: &str, long: &str, owner: &User) -> Acronym {
        let acronym = Acronym::new(AcronymId::random(), short, long, owner.id());
        self.lock().acronyms.push(acronym.clone());
        acronym
    }

    pub fn acronym_count(&self) -> usize {
        self.lock().acronyms.len()
    }

    pub fn stored_acronym(&self, id: &AcronymId) -> Option<Acronym> {
        self.lock().acronyms.iter().find(|a| a.id() == *id).cloned()
    }

    /// Ports wired to this store behind the real acronym service.
    pub fn http_state(&self, policy: AccessPolicy) -> HttpState {
        let store = Arc::new(self.clone());
        let service = Arc::new(
            AcronymService::new(Arc::clone(&store), Arc::clone(&store), Arc::clone(&store))
                .with_policy(policy),
        );
        HttpState::new(service.clone(), service, store)
    }
}

#[async_trait]
impl AcronymRepository for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Acronym>, AcronymRepositoryError> {
        Ok(self.lock().acronyms.clone())
    }

    async fn find_by_id(&self, id: &AcronymId) -> Result<Option<Acronym>, AcronymRepositoryError> {
        Ok(self.stored_acronym(id))
    }

    async fn search(&self, term: &str) -> Result<Vec<Acronym>, AcronymRepositoryError> {
        Ok(self
            .lock()
            .acronyms
            .iter()
            .filter(|acronym| acronym.matches_term(term))
            .cloned()
            .collect())
    }

    async fn insert(&self, acronym: &NewAcronym) -> Result<Acronym, AcronymRepositoryError> {
        let stored = Acronym::from_new(AcronymId::random(), acronym.clone());
        self.lock().acronyms.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, acronym: &Acronym) -> Result<bool, AcronymRepositoryError> {
        let mut state = self.lock();
        match state.acronyms.iter_mut().find(|a| a.id() == acronym.id()) {
            Some(slot) => {
                *slot = acronym.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &AcronymId) -> Result<bool, AcronymRepositoryError> {
        let mut state = self.lock();
        let before = state.acronyms.len();
        state.acronyms.retain(|a| a.id() != *id);
        state.links.retain(|(acronym_id, _)| acronym_id != id);
        Ok(state.acronyms.len() < before)
    }

    async fn categories_for(
        &self,
        id: &AcronymId,
    ) -> Result<Vec<Category>, AcronymRepositoryError> {
        let state = self.lock();
        Ok(state
            .links
            .iter()
            .filter(|(acronym_id, _)| acronym_id == id)
            .filter_map(|(_, category_id)| state.categories.get(category_id).cloned())
            .collect())
    }

    async fn attach_category(
        &self,
        acronym_id: &AcronymId,
        category_id: &CategoryId,
    ) -> Result<(), AcronymRepositoryError> {
        let mut state = self.lock();
        let link = (*acronym_id, *category_id);
        if !state.links.contains(&link) {
            state.links.push(link);
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn find_by_id(
        &self,
        id: &CategoryId,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        Ok(self.lock().categories.get(id).cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.lock().users.get(id).cloned())
    }
}

#[async_trait]
impl TokenAuthenticator for InMemoryStore {
    async fn authenticate(&self, token: &AccessToken) -> Result<User, Error> {
        let state = self.lock();
        state
            .tokens
            .get(&token.fingerprint())
            .and_then(|user_id| state.users.get(user_id))
            .cloned()
            .ok_or_else(|| Error::unauthorized("invalid bearer token"))
    }
}
