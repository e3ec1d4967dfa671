//! Driving port for resolving bearer tokens to users.
//!
//! Inbound adapters hand over the presented [`AccessToken`] and receive the
//! owning [`User`], or an `unauthorized` error when the token is unknown.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{AccessToken, Error, User, UserId};

#[async_trait]
pub trait TokenAuthenticator: Send + Sync {
    /// Resolve a token to the user it was issued to.
    async fn authenticate(&self, token: &AccessToken) -> Result<User, Error>;
}

/// Stable identifier of the fixture user.
pub const FIXTURE_USER_ID: Uuid = Uuid::from_u128(0x123e4567_e89b_12d3_a456_426614174000);

/// Authenticator used when no database is configured.
///
/// Accepts exactly one configured token and maps it to a fixed fixture user.
/// Without a configured token every request is rejected.
#[derive(Debug, Clone)]
pub struct FixtureTokenAuthenticator {
    token: Option<AccessToken>,
    user: User,
}

impl FixtureTokenAuthenticator {
    pub fn new(token: Option<AccessToken>) -> Self {
        Self {
            token,
            user: User::new(
                UserId::from_uuid(FIXTURE_USER_ID),
                "Fixture Admin",
                "admin",
                "",
            ),
        }
    }
}

#[async_trait]
impl TokenAuthenticator for FixtureTokenAuthenticator {
    async fn authenticate(&self, token: &AccessToken) -> Result<User, Error> {
        match &self.token {
            Some(expected) if expected == token => Ok(self.user.clone()),
            _ => Err(Error::unauthorized("invalid bearer token")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    fn token(raw: &str) -> AccessToken {
        AccessToken::new(raw).expect("valid token")
    }

    #[rstest]
    #[case(Some("dev-token"), "dev-token", true)]
    #[case(Some("dev-token"), "other", false)]
    #[case(None, "dev-token", false)]
    #[tokio::test]
    async fn fixture_authenticator_only_accepts_configured_token(
        #[case] configured: Option<&str>,
        #[case] presented: &str,
        #[case] should_succeed: bool,
    ) {
        let authenticator = FixtureTokenAuthenticator::new(configured.map(token));
        match (should_succeed, authenticator.authenticate(&token(presented)).await) {
            (true, Ok(user)) => assert_eq!(user.id().as_uuid(), &FIXTURE_USER_ID),
            (false, Err(err)) => assert_eq!(err.code(), ErrorCode::Unauthorized),
            (true, Err(err)) => panic!("expected success, got error: {err:?}"),
            (false, Ok(user)) => panic!("expected failure, got user {}", user.id()),
        }
    }
}
