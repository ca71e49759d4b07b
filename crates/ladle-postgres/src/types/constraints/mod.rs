//! Database constraint violations organized by table.
//!
//! Constraint names declared in the migrations are mirrored here as enums,
//! so query errors can be matched structurally instead of by string
//! comparison at every call site.

pub mod chefs;
pub mod ingredients;
pub mod recipe_ingredients;
pub mod recipes;

use std::fmt;

pub use chefs::ChefConstraints;
pub use ingredients::IngredientConstraints;
pub use recipe_ingredients::RecipeIngredientConstraints;
pub use recipes::RecipeConstraints;
use serde::{Deserialize, Serialize};

/// Unified constraint violation enum that can represent any database constraint.
///
/// This enum wraps all specific constraint types, providing a single interface
/// for handling any constraint violation while maintaining type safety.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ConstraintViolation {
    /// Constraints on the `chefs` table.
    Chef(ChefConstraints),
    /// Constraints on the `ingredients` table.
    Ingredient(IngredientConstraints),
    /// Constraints on the `recipes` table.
    Recipe(RecipeConstraints),
    /// Constraints on the `recipe_ingredients` join table.
    RecipeIngredient(RecipeIngredientConstraints),
}

/// Categories of database constraint violations.
///
/// This enum helps classify constraint violations by their purpose and type,
/// making it easier to handle different categories of errors appropriately.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintCategory {
    /// Data validation constraints (format, length, range checks).
    Validation,
    /// Uniqueness constraints (primary keys, unique indexes).
    Uniqueness,
    /// Referential integrity constraints (foreign keys).
    Referential,
}

impl ConstraintViolation {
    /// Creates a new [`ConstraintViolation`] from the constraint name.
    ///
    /// Returns `None` if the constraint name is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use ladle_postgres::types::ConstraintViolation;
    ///
    /// let violation = ConstraintViolation::new("chefs_username_unique");
    /// assert!(violation.is_some());
    ///
    /// let unknown = ConstraintViolation::new("unknown_constraint");
    /// assert!(unknown.is_none());
    /// ```
    pub fn new(constraint: &str) -> Option<Self> {
        // Route based on constraint name prefix; `recipe_ingredients_` must
        // be tested before `recipes_` never matches it, but the prefixes do
        // not overlap so order is free.
        if constraint.starts_with("chefs_") {
            if let Some(c) = ChefConstraints::new(constraint) {
                return Some(ConstraintViolation::Chef(c));
            }
        } else if constraint.starts_with("ingredients_") {
            if let Some(c) = IngredientConstraints::new(constraint) {
                return Some(ConstraintViolation::Ingredient(c));
            }
        } else if constraint.starts_with("recipe_ingredients_") {
            if let Some(c) = RecipeIngredientConstraints::new(constraint) {
                return Some(ConstraintViolation::RecipeIngredient(c));
            }
        } else if constraint.starts_with("recipes_") {
            if let Some(c) = RecipeConstraints::new(constraint) {
                return Some(ConstraintViolation::Recipe(c));
            }
        }

        None
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            ConstraintViolation::Chef(c) => c.categorize(),
            ConstraintViolation::Ingredient(c) => c.categorize(),
            ConstraintViolation::Recipe(c) => c.categorize(),
            ConstraintViolation::RecipeIngredient(c) => c.categorize(),
        }
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintViolation::Chef(c) => c.fmt(f),
            ConstraintViolation::Ingredient(c) => c.fmt(f),
            ConstraintViolation::Recipe(c) => c.fmt(f),
            ConstraintViolation::RecipeIngredient(c) => c.fmt(f),
        }
    }
}

impl From<ConstraintViolation> for String {
    #[inline]
    fn from(val: ConstraintViolation) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for ConstraintViolation {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value).ok_or(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_declared_constraints() {
        assert_eq!(
            ConstraintViolation::new("chefs_username_unique"),
            Some(ConstraintViolation::Chef(ChefConstraints::UsernameUnique))
        );
        assert_eq!(
            ConstraintViolation::new("recipes_chef_id_fkey"),
            Some(ConstraintViolation::Recipe(RecipeConstraints::ChefFk))
        );
        assert_eq!(
            ConstraintViolation::new("recipe_ingredients_ingredient_id_fkey"),
            Some(ConstraintViolation::RecipeIngredient(
                RecipeIngredientConstraints::IngredientFk
            ))
        );
    }

    #[test]
    fn rejects_unknown_constraints() {
        assert!(ConstraintViolation::new("unknown_constraint").is_none());
        assert!(ConstraintViolation::new("chefs_unknown").is_none());
        assert!(ConstraintViolation::new("").is_none());
    }

    #[test]
    fn constraint_names_round_trip() {
        let violation = ConstraintViolation::new("chefs_username_unique").unwrap();
        assert_eq!(violation.to_string(), "chefs_username_unique");

        let violation = ConstraintViolation::new("ingredients_name_not_empty").unwrap();
        assert_eq!(violation.to_string(), "ingredients_name_not_empty");
    }

    #[test]
    fn categorizes_by_purpose() {
        assert_eq!(
            ConstraintViolation::new("chefs_username_unique").unwrap().categorize(),
            ConstraintCategory::Uniqueness
        );
        assert_eq!(
            ConstraintViolation::new("chefs_username_not_empty").unwrap().categorize(),
            ConstraintCategory::Validation
        );
        assert_eq!(
            ConstraintViolation::new("recipes_chef_id_fkey").unwrap().categorize(),
            ConstraintCategory::Referential
        );
    }
}
