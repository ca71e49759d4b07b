//! Chef account model for PostgreSQL database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;

use crate::schema::chefs;

/// Main chef model representing a registered cook.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = chefs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Chef {
    /// Unique chef identifier, assigned by the database.
    pub id: i32,
    /// Unique login name (1-100 characters).
    pub username: String,
    /// Contact email address.
    pub email: String,
    /// Login password, compared verbatim on authentication.
    pub password: String,
    /// Whether the chef has administrative privileges.
    pub is_admin: bool,
    /// Timestamp when the chef was created.
    pub created_at: Timestamp,
    /// Timestamp when the chef was last updated.
    pub updated_at: Timestamp,
}

impl Chef {
    /// Returns whether the given password matches this chef's password.
    ///
    /// Passwords are opaque strings compared for equality.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

/// Data for creating a new chef.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = chefs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewChef {
    /// Login name, unique across all chefs.
    pub username: String,
    /// Contact email address.
    pub email: String,
    /// Login password.
    pub password: String,
    /// Administrative flag.
    pub is_admin: Option<bool>,
}

/// Data for updating a chef.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = chefs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateChef {
    /// Login name.
    pub username: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Password.
    pub password: Option<String>,
    /// Administrative flag.
    pub is_admin: Option<bool>,
}

impl UpdateChef {
    /// Returns whether the changeset carries no field updates.
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.is_admin.is_none()
    }
}
