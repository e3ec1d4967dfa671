//! Token authenticator backed by the `tokens` table.
//!
//! Tokens are matched by SHA-256 fingerprint; raw values are never stored or
//! logged.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::TokenAuthenticator;
use crate::domain::{AccessToken, Error, User};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::UserRow;
use super::pool::{DbPool, PoolError};
use super::schema::{tokens, users};

#[derive(Clone)]
pub struct DieselTokenAuthenticator {
    pool: DbPool,
}

impl DieselTokenAuthenticator {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn unavailable(message: String) -> Error {
    Error::service_unavailable(format!("token store unavailable: {message}"))
}

fn pool_error(error: PoolError) -> Error {
    map_pool_error(error, unavailable)
}

fn lookup_error(error: diesel::result::Error) -> Error {
    map_diesel_error(
        error,
        "token lookup",
        |message| Error::internal(message),
        unavailable,
    )
}

#[async_trait]
impl TokenAuthenticator for DieselTokenAuthenticator {
    async fn authenticate(&self, token: &AccessToken) -> Result<User, Error> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row: Option<UserRow> = tokens::table
            .inner_join(users::table)
            .filter(tokens::token_hash.eq(token.fingerprint()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(lookup_error)?;

        row.map(User::from)
            .ok_or_else(|| Error::unauthorized("invalid bearer token"))
    }
}
