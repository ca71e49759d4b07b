//! Authentication request payloads.

use ladle_postgres::model::NewChef;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request payload for registration.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterChef {
    /// Desired username, unique across all chefs.
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub username: String,
    /// Contact email address.
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// Login password.
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

impl RegisterChef {
    /// Converts the request into an insertable model.
    ///
    /// Registration never grants the administrator flag.
    pub fn into_model(self) -> NewChef {
        NewChef {
            username: self.username,
            email: self.email,
            password: self.password,
            is_admin: Some(false),
        }
    }
}

/// Request payload for login.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginChef {
    /// Username of the chef.
    #[validate(length(min = 1, message = "must not be empty"))]
    pub username: String,
    /// Password of the chef.
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_rejects_blank_fields() {
        let request = RegisterChef {
            username: String::new(),
            email: "chef1@example.com".to_owned(),
            password: "secret".to_owned(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn register_rejects_malformed_email() {
        let request = RegisterChef {
            username: "chef1".to_owned(),
            email: "not-an-email".to_owned(),
            password: "secret".to_owned(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn registration_never_grants_admin() {
        let request = RegisterChef {
            username: "chef1".to_owned(),
            email: "chef1@example.com".to_owned(),
            password: "secret".to_owned(),
        };
        assert!(request.validate().is_ok());

        let model = request.into_model();
        assert_eq!(model.is_admin, Some(false));
        assert_eq!(model.username, "chef1");
    }
}
