//! Ingredient request payloads.

use ladle_postgres::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request payload for creating an ingredient.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateIngredient {
    /// Ingredient name.
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub name: String,
}

impl CreateIngredient {
    /// Converts the request into an insertable model.
    pub fn into_model(self) -> model::NewIngredient {
        model::NewIngredient { name: self.name }
    }
}

/// Request payload for updating an ingredient.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIngredient {
    /// Ingredient name.
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub name: Option<String>,
}

impl UpdateIngredient {
    /// Converts the request into a partial-update changeset.
    pub fn into_model(self) -> model::UpdateIngredient {
        model::UpdateIngredient { name: self.name }
    }
}
