//! Ingredient response types.

use jiff::Timestamp;
use ladle_postgres::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Ingredient response.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// ID of the ingredient.
    pub id: i32,
    /// Name of the ingredient.
    pub name: String,
    /// Timestamp when the ingredient was created.
    pub created_at: Timestamp,
    /// Timestamp when the ingredient was last updated.
    pub updated_at: Timestamp,
}

impl Ingredient {
    /// Creates a new instance of [`Ingredient`] from the database model.
    pub fn from_model(ingredient: model::Ingredient) -> Self {
        Self {
            id: ingredient.id,
            name: ingredient.name,
            created_at: ingredient.created_at.into(),
            updated_at: ingredient.updated_at.into(),
        }
    }
}
