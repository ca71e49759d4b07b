//! Recipe model for PostgreSQL database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;

use crate::schema::recipes;

/// Main recipe model.
///
/// A recipe is owned by its author chef via `chef_id`. Repository reads
/// resolve the author to a full [`Chef`] so the lookup cost stays visible
/// at the call site.
///
/// [`Chef`]: crate::model::Chef
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Recipe {
    /// Unique recipe identifier, assigned by the database.
    pub id: i32,
    /// Human-readable recipe name.
    pub name: String,
    /// Preparation instructions.
    pub instructions: String,
    /// Identifier of the authoring chef.
    pub chef_id: i32,
    /// Timestamp when the recipe was created.
    pub created_at: Timestamp,
    /// Timestamp when the recipe was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new recipe.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewRecipe {
    /// Recipe name.
    pub name: String,
    /// Preparation instructions.
    pub instructions: String,
    /// Identifier of the authoring chef.
    pub chef_id: i32,
}

/// Data for updating a recipe.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateRecipe {
    /// Recipe name.
    pub name: Option<String>,
    /// Preparation instructions.
    pub instructions: Option<String>,
    /// Identifier of the authoring chef.
    pub chef_id: Option<i32>,
}
