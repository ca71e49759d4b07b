//! Recipe response types.

use jiff::Timestamp;
use ladle_postgres::model;
use ladle_postgres::query::RecipeWithAuthor;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Chef;

/// Recipe response with its author resolved.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// ID of the recipe.
    pub id: i32,
    /// Name of the recipe.
    pub name: String,
    /// Preparation instructions.
    pub instructions: String,
    /// The authoring chef.
    pub author: Chef,
    /// Timestamp when the recipe was created.
    pub created_at: Timestamp,
    /// Timestamp when the recipe was last updated.
    pub updated_at: Timestamp,
}

impl Recipe {
    /// Creates a new instance of [`Recipe`] from the joined database models.
    pub fn from_model((recipe, author): RecipeWithAuthor) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            instructions: recipe.instructions,
            author: Chef::from_model(author),
            created_at: recipe.created_at.into(),
            updated_at: recipe.updated_at.into(),
        }
    }

    /// Creates a new instance of [`Recipe`] from separate recipe and author models.
    pub fn from_parts(recipe: model::Recipe, author: model::Chef) -> Self {
        Self::from_model((recipe, author))
    }
}
