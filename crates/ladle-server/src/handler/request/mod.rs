//! Request payload and parameter types for all handlers.

mod authentication;
mod chefs;
mod ingredients;
mod paths;
mod recipes;
mod search;

pub use authentication::{LoginChef, RegisterChef};
pub use chefs::{CreateChef, UpdateChef};
pub use ingredients::{CreateIngredient, UpdateIngredient};
pub use paths::{ChefPathParams, IngredientPathParams, RecipeIngredientPathParams, RecipePathParams};
pub use recipes::{CreateRecipe, UpdateRecipe};
pub use search::SearchParams;
