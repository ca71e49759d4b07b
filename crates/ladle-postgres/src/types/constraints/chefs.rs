//! Chefs table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// Chefs table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum ChefConstraints {
    // Chef validation constraints
    #[strum(serialize = "chefs_username_not_empty")]
    UsernameNotEmpty,
    #[strum(serialize = "chefs_email_not_empty")]
    EmailNotEmpty,
    #[strum(serialize = "chefs_password_not_empty")]
    PasswordNotEmpty,

    // Chef unique constraints
    #[strum(serialize = "chefs_username_unique")]
    UsernameUnique,
}

impl ChefConstraints {
    /// Creates a new [`ChefConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            ChefConstraints::UsernameNotEmpty
            | ChefConstraints::EmailNotEmpty
            | ChefConstraints::PasswordNotEmpty => ConstraintCategory::Validation,

            ChefConstraints::UsernameUnique => ConstraintCategory::Uniqueness,
        }
    }
}

impl From<ChefConstraints> for String {
    #[inline]
    fn from(val: ChefConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for ChefConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
