//! Shared query types: pagination, sorting, and constraint violations.

mod constraints;
mod pagination;
mod sorting;

pub use constraints::{
    ChefConstraints, ConstraintCategory, ConstraintViolation, IngredientConstraints,
    RecipeConstraints, RecipeIngredientConstraints,
};
pub use pagination::{MAX_LIMIT, Page, Pagination};
pub use sorting::{
    ChefSortBy, ChefSortField, IngredientSortBy, IngredientSortField, RecipeSortBy,
    RecipeSortField, SortBy, SortOrder,
};
