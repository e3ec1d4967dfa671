//! Diesel table definitions.
//!
//! Must match `migrations/` exactly; regenerate with `diesel print-schema`
//! after changing a migration.

diesel::table! {
    /// Registered users. Credentials never leave the persistence layer.
    users (id) {
        id -> Uuid,
        name -> Text,
        username -> Text,
        password_hash -> Text,
    }
}

diesel::table! {
    /// Bearer tokens, stored as SHA-256 hex fingerprints.
    tokens (id) {
        id -> Uuid,
        token_hash -> Text,
        user_id -> Uuid,
    }
}

diesel::table! {
    acronyms (id) {
        id -> Uuid,
        short -> Text,
        long -> Text,
        user_id -> Uuid,
    }
}

diesel::table! {
    categories (id) {
        id -> Uuid,
        name -> Text,
    }
}

diesel::table! {
    /// Many-to-many link between acronyms and categories.
    acronym_category_pivot (id) {
        id -> Uuid,
        acronym_id -> Uuid,
        category_id -> Uuid,
    }
}

diesel::joinable!(acronyms -> users (user_id));
diesel::joinable!(tokens -> users (user_id));
diesel::joinable!(acronym_category_pivot -> acronyms (acronym_id));
diesel::joinable!(acronym_category_pivot -> categories (category_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    tokens,
    acronyms,
    categories,
    acronym_category_pivot,
);
