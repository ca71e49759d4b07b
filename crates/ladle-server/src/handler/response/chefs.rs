//! Chef response types.

use jiff::Timestamp;
use ladle_postgres::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Chef response.
///
/// The password never leaves the data layer.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Chef {
    /// ID of the chef.
    pub id: i32,
    /// Username of the chef.
    pub username: String,
    /// Email address of the chef.
    pub email: String,
    /// Whether the chef has administrative privileges.
    pub is_admin: bool,
    /// Timestamp when the chef was created.
    pub created_at: Timestamp,
    /// Timestamp when the chef was last updated.
    pub updated_at: Timestamp,
}

impl Chef {
    /// Creates a new instance of [`Chef`] from the database model.
    pub fn from_model(chef: model::Chef) -> Self {
        Self {
            id: chef.id,
            username: chef.username,
            email: chef.email,
            is_admin: chef.is_admin,
            created_at: chef.created_at.into(),
            updated_at: chef.updated_at.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_not_serialized() {
        let epoch = jiff_diesel::Timestamp::from(Timestamp::UNIX_EPOCH);
        let model = model::Chef {
            id: 1,
            username: "chef1".to_owned(),
            email: "chef1@example.com".to_owned(),
            password: "secret".to_owned(),
            is_admin: false,
            created_at: epoch,
            updated_at: epoch,
        };

        let json = serde_json::to_string(&Chef::from_model(model)).expect("serializes");
        assert!(!json.contains("secret"));
        assert!(!json.contains("password"));
        assert!(json.contains(r#""isAdmin":false"#));
    }
}
