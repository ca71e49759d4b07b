//! Recipe request payloads.

use ladle_postgres::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request payload for creating a recipe.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipe {
    /// Recipe name.
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub name: String,
    /// Preparation instructions.
    pub instructions: String,
    /// Identifier of the authoring chef.
    pub chef_id: i32,
}

impl CreateRecipe {
    /// Converts the request into an insertable model.
    pub fn into_model(self) -> model::NewRecipe {
        model::NewRecipe {
            name: self.name,
            instructions: self.instructions,
            chef_id: self.chef_id,
        }
    }
}

/// Request payload for updating a recipe. Only provided fields are updated.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecipe {
    /// Recipe name.
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub name: Option<String>,
    /// Preparation instructions.
    pub instructions: Option<String>,
    /// Identifier of the authoring chef.
    pub chef_id: Option<i32>,
}

impl UpdateRecipe {
    /// Converts the request into a partial-update changeset.
    pub fn into_model(self) -> model::UpdateRecipe {
        model::UpdateRecipe {
            name: self.name,
            instructions: self.instructions,
            chef_id: self.chef_id,
        }
    }
}
