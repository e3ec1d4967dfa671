//! Acronym aggregate.
//!
//! An acronym pairs a short form with its expansion and always belongs to
//! exactly one user. Its identifier is assigned by the persistence layer on
//! insert and never changes afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Stable acronym identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AcronymId(Uuid);

impl AcronymId {
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

impl fmt::Display for AcronymId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Caller-supplied acronym text, shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcronymContent {
    pub short: String,
    pub long: String,
}

/// An acronym that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAcronym {
    pub content: AcronymContent,
    pub user_id: UserId,
}

/// A persisted acronym.
///
/// ## Invariants
/// - `id` is assigned once, by the repository, and is immutable.
/// - `user_id` always references an existing user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Acronym {
    id: AcronymId,
    short: String,
    long: String,
    user_id: UserId,
}

impl Acronym {
    /// Rebuild an acronym from stored parts.
    pub fn new(
        id: AcronymId,
        short: impl Into<String>,
        long: impl Into<String>,
        user_id: UserId,
    ) -> Self {
        Self {
            id,
            short: short.into(),
            long: long.into(),
            user_id,
        }
    }

    /// Attach a repository-assigned identifier to a new acronym.
    #[must_use]
    pub fn from_new(id: AcronymId, new: NewAcronym) -> Self {
        let NewAcronym { content, user_id } = new;
        Self::new(id, content.short, content.long, user_id)
    }

    /// Identifier assigned on insert.
    #[must_use]
    pub fn id(&self) -> AcronymId {
        self.id
    }

    /// Short form, e.g. `LOL`.
    #[must_use]
    pub fn short(&self) -> &str {
        &self.short
    }

    /// Expansion, e.g. `Laugh Out Loud`.
    #[must_use]
    pub fn long(&self) -> &str {
        &self.long
    }

    /// Owning user.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Overwrite text and owner in place; the identifier is untouched.
    pub fn revise(&mut self, content: AcronymContent, owner: UserId) {
        self.short = content.short;
        self.long = content.long;
        self.user_id = owner;
    }

    /// True when `term` equals either the short form or the expansion.
    #[must_use]
    pub fn matches_term(&self, term: &str) -> bool {
        self.short == term || self.long == term
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn content(short: &str, long: &str) -> AcronymContent {
        AcronymContent {
            short: short.to_owned(),
            long: long.to_owned(),
        }
    }

    #[rstest]
    fn revise_replaces_text_and_owner_but_keeps_id() {
        let id = AcronymId::random();
        let original_owner = UserId::random();
        let new_owner = UserId::random();
        let mut acronym = Acronym::new(id, "OMG", "Oh My God", original_owner);

        acronym.revise(content("OMG", "Oh My Gosh"), new_owner);

        assert_eq!(acronym.id(), id);
        assert_eq!(acronym.long(), "Oh My Gosh");
        assert_eq!(acronym.user_id(), new_owner);
    }

    #[rstest]
    #[case("LOL", true)]
    #[case("Laugh Out Loud", true)]
    #[case("lol", false)]
    #[case("Laugh", false)]
    fn matches_term_is_exact(#[case] term: &str, #[case] expected: bool) {
        let acronym = Acronym::new(AcronymId::random(), "LOL", "Laugh Out Loud", UserId::random());
        assert_eq!(acronym.matches_term(term), expected);
    }

    #[rstest]
    fn serialises_with_camel_case_owner() {
        let id = AcronymId::random();
        let owner = UserId::random();
        let acronym = Acronym::from_new(
            id,
            NewAcronym {
                content: content("IKR", "I Know, Right?"),
                user_id: owner,
            },
        );

        let value = serde_json::to_value(&acronym).expect("serialise");
        assert_eq!(
            value,
            json!({
                "id": id.to_string(),
                "short": "IKR",
                "long": "I Know, Right?",
                "userId": owner.to_string(),
            })
        );
    }
}
