//! Database query repositories for all entities in the system.
//!
//! This module contains repository implementations that provide high-level
//! database operations for all entities, encapsulating common patterns
//! and providing type-safe interfaces.
//!
//! # Search and pagination
//!
//! Every entity exposes the same search surface: an optional free-text term
//! matched case-insensitively against one designated column, ordering only
//! through the allow-listed sort enums in [`types`], and LIMIT/OFFSET
//! pushed down to the database with the result wrapped in a [`Page`].
//!
//! [`types`]: crate::types
//! [`Page`]: crate::types::Page

pub mod chef;
pub mod ingredient;
pub mod recipe;
pub mod recipe_ingredient;

pub use chef::ChefRepository;
pub use ingredient::IngredientRepository;
pub use recipe::{RecipeRepository, RecipeWithAuthor};
pub use recipe_ingredient::RecipeIngredientRepository;

/// Builds the `ILIKE` pattern for a substring search term.
///
/// An absent or empty term produces `%%`, which matches every row of a
/// non-null column, so unfiltered listing and searching share one query.
fn like_pattern(term: Option<&str>) -> String {
    format!("%{}%", term.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_wraps_term() {
        assert_eq!(like_pattern(Some("flour")), "%flour%");
    }

    #[test]
    fn like_pattern_matches_all_when_absent() {
        assert_eq!(like_pattern(None), "%%");
        assert_eq!(like_pattern(Some("")), "%%");
    }
}
