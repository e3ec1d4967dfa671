//! User identity as seen by the acronyms service.
//!
//! Users are owned by the authentication subsystem; this service only reads
//! them. [`User`] deliberately does not implement `Serialize`: the only shape
//! that may leave the process is [`PublicUser`], produced by [`public_user`].

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Wrap an existing UUID.
    #[must_use]
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Full user record, including the credential hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    username: String,
    password_hash: String,
}

impl User {
    /// Build a user from its stored parts.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        username: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Stable user identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Full name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Login handle.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Stored credential hash. Never serialised.
    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

/// Public projection of a [`User`], safe to return to any caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: UserId,
    pub name: String,
    pub username: String,
}

/// Strip credential fields from a user for response serialisation.
///
/// # Examples
/// ```
/// use acronyms_backend::domain::{public_user, User, UserId};
///
/// let user = User::new(UserId::random(), "Ada Lovelace", "ada", "$2b$12$hash");
/// let public = public_user(user);
/// let json = serde_json::to_value(&public).expect("serialise");
/// assert!(json.get("passwordHash").is_none());
/// assert_eq!(json["username"], "ada");
/// ```
#[must_use]
pub fn public_user(user: User) -> PublicUser {
    let User {
        id, name, username, ..
    } = user;
    PublicUser { id, name, username }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn public_projection_keeps_identity_fields() {
        let id = UserId::random();
        let public = public_user(User::new(id, "Grace Hopper", "grace", "secret-hash"));

        assert_eq!(public.id, id);
        assert_eq!(public.name, "Grace Hopper");
        assert_eq!(public.username, "grace");
    }

    #[rstest]
    fn public_projection_never_serialises_credentials() {
        let public = public_user(User::new(UserId::random(), "Grace Hopper", "grace", "secret-hash"));
        let rendered = serde_json::to_string(&public).expect("serialise");

        assert!(!rendered.contains("secret-hash"));
        assert!(!rendered.to_lowercase().contains("password"));
    }
}
