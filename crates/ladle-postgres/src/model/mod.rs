//! Database models for all entities in the system.
//!
//! This module contains Diesel model definitions for all database tables,
//! including structs for querying, inserting, and updating records.

mod chef;
mod ingredient;
mod recipe;
mod recipe_ingredient;

pub use chef::{Chef, NewChef, UpdateChef};
pub use ingredient::{Ingredient, NewIngredient, UpdateIngredient};
pub use recipe::{NewRecipe, Recipe, UpdateRecipe};
pub use recipe_ingredient::{NewRecipeIngredient, RecipeIngredient};
