//! Chef request payloads.

use ladle_postgres::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request payload for creating a chef.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateChef {
    /// Username, unique across all chefs.
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub username: String,
    /// Contact email address.
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// Login password.
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
    /// Administrative flag.
    #[serde(default)]
    pub is_admin: bool,
}

impl CreateChef {
    /// Converts the request into an insertable model.
    pub fn into_model(self) -> model::NewChef {
        model::NewChef {
            username: self.username,
            email: self.email,
            password: self.password,
            is_admin: Some(self.is_admin),
        }
    }
}

/// Request payload for updating a chef. Only provided fields are updated.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChef {
    /// Username.
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub username: Option<String>,
    /// Email address.
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    /// Password.
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: Option<String>,
    /// Administrative flag.
    pub is_admin: Option<bool>,
}

impl UpdateChef {
    /// Converts the request into a partial-update changeset.
    pub fn into_model(self) -> model::UpdateChef {
        model::UpdateChef {
            username: self.username,
            email: self.email,
            password: self.password,
            is_admin: self.is_admin,
        }
    }
}
