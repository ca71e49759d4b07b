//! Ingredient model for PostgreSQL database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;

use crate::schema::ingredients;

/// Main ingredient model.
///
/// Ingredients are standalone entities; recipes reference them through the
/// `recipe_ingredients` join table.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Ingredient {
    /// Unique ingredient identifier, assigned by the database.
    pub id: i32,
    /// Human-readable ingredient name.
    pub name: String,
    /// Timestamp when the ingredient was created.
    pub created_at: Timestamp,
    /// Timestamp when the ingredient was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new ingredient.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewIngredient {
    /// Ingredient name.
    pub name: String,
}

/// Data for updating an ingredient.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateIngredient {
    /// Ingredient name.
    pub name: Option<String>,
}
