//! Internal Diesel row structs.
//!
//! These never cross into the domain; adapters convert them at the boundary.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{Acronym, AcronymId, Category, CategoryId, User, UserId};

use super::schema::{acronym_category_pivot, acronyms, categories, users};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub password_hash: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(
            UserId::from_uuid(row.id),
            row.name,
            row.username,
            row.password_hash,
        )
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = acronyms)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AcronymRow {
    pub id: Uuid,
    pub short: String,
    pub long: String,
    pub user_id: Uuid,
}

impl From<AcronymRow> for Acronym {
    fn from(row: AcronymRow) -> Self {
        Acronym::new(
            AcronymId::from_uuid(row.id),
            row.short,
            row.long,
            UserId::from_uuid(row.user_id),
        )
    }
}

/// Insert payload; the identifier is generated by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = acronyms)]
pub(crate) struct NewAcronymRow<'a> {
    pub short: &'a str,
    pub long: &'a str,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = acronyms)]
pub(crate) struct AcronymUpdate<'a> {
    pub short: &'a str,
    pub long: &'a str,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryRow {
    pub id: Uuid,
    pub name: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category::new(CategoryId::from_uuid(row.id), row.name)
    }
}

#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = acronym_category_pivot)]
pub(crate) struct NewPivotRow {
    pub acronym_id: Uuid,
    pub category_id: Uuid,
}
