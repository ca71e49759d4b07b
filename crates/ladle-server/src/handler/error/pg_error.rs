//! Database error to HTTP error conversion.
//!
//! Constraint violations are mapped onto specific client errors; everything
//! else is logged and surfaced as an internal server error, never silently
//! discarded.

use ladle_postgres::PgError;
use ladle_postgres::types::{
    ChefConstraints, ConstraintViolation, IngredientConstraints, RecipeConstraints,
    RecipeIngredientConstraints,
};

use crate::handler::{Error, ErrorKind};

/// Tracing target for database error conversions.
const TRACING_TARGET: &str = "ladle_server::postgres_errors";

impl From<ConstraintViolation> for Error<'static> {
    fn from(constraint: ConstraintViolation) -> Self {
        match constraint {
            ConstraintViolation::Chef(c) => c.into(),
            ConstraintViolation::Ingredient(c) => c.into(),
            ConstraintViolation::Recipe(c) => c.into(),
            ConstraintViolation::RecipeIngredient(c) => c.into(),
        }
    }
}

impl From<ChefConstraints> for Error<'static> {
    fn from(constraint: ChefConstraints) -> Self {
        match constraint {
            ChefConstraints::UsernameUnique => ErrorKind::Conflict
                .with_message("Username already exists")
                .with_resource("chef"),
            ChefConstraints::UsernameNotEmpty => ErrorKind::BadRequest
                .with_message("Username must not be empty")
                .with_resource("chef"),
            ChefConstraints::EmailNotEmpty => ErrorKind::BadRequest
                .with_message("Email must not be empty")
                .with_resource("chef"),
            ChefConstraints::PasswordNotEmpty => ErrorKind::BadRequest
                .with_message("Password must not be empty")
                .with_resource("chef"),
        }
    }
}

impl From<IngredientConstraints> for Error<'static> {
    fn from(constraint: IngredientConstraints) -> Self {
        match constraint {
            IngredientConstraints::NameNotEmpty => ErrorKind::BadRequest
                .with_message("Ingredient name must not be empty")
                .with_resource("ingredient"),
        }
    }
}

impl From<RecipeConstraints> for Error<'static> {
    fn from(constraint: RecipeConstraints) -> Self {
        match constraint {
            RecipeConstraints::NameNotEmpty => ErrorKind::BadRequest
                .with_message("Recipe name must not be empty")
                .with_resource("recipe"),
            RecipeConstraints::ChefFk => ErrorKind::NotFound
                .with_message("Author chef does not exist")
                .with_resource("chef"),
        }
    }
}

impl From<RecipeIngredientConstraints> for Error<'static> {
    fn from(constraint: RecipeIngredientConstraints) -> Self {
        match constraint {
            RecipeIngredientConstraints::Pkey => ErrorKind::Conflict
                .with_message("Ingredient is already linked to this recipe")
                .with_resource("recipe_ingredient"),
            RecipeIngredientConstraints::RecipeFk => ErrorKind::NotFound
                .with_message("Recipe does not exist")
                .with_resource("recipe"),
            RecipeIngredientConstraints::IngredientFk => ErrorKind::NotFound
                .with_message("Ingredient does not exist")
                .with_resource("ingredient"),
        }
    }
}

impl From<PgError> for Error<'static> {
    fn from(error: PgError) -> Self {
        match error {
            PgError::Config(config_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %config_error,
                    "database configuration error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Timeout(timeout) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    timeout = ?timeout,
                    "database timeout",
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Connection(connection_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %connection_error,
                    "database connection error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Migration(migration_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %migration_error,
                    "database migration error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Query(ref query_error) => {
                // Try to extract constraint violation
                if let Some(constraint_name) = error.constraint()
                    && let Some(constraint) = ConstraintViolation::new(constraint_name)
                {
                    tracing::warn!(
                        target: TRACING_TARGET,
                        constraint = constraint_name,
                        error = %query_error,
                        "query error (constraint violation)"
                    );
                    return constraint.into();
                }

                // Generic query error without constraint
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %query_error,
                    "query error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Unexpected(unexpected_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %unexpected_error,
                    "unexpected database error"
                );
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_username_maps_to_conflict() {
        let violation = ConstraintViolation::new("chefs_username_unique").unwrap();
        let error: Error = violation.into();
        assert_eq!(error.kind(), ErrorKind::Conflict);
        assert_eq!(error.resource(), Some("chef"));
    }

    #[test]
    fn missing_author_maps_to_not_found() {
        let violation = ConstraintViolation::new("recipes_chef_id_fkey").unwrap();
        let error: Error = violation.into();
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn validation_constraints_map_to_bad_request() {
        for name in [
            "chefs_username_not_empty",
            "ingredients_name_not_empty",
            "recipes_name_not_empty",
        ] {
            let violation = ConstraintViolation::new(name).unwrap();
            let error: Error = violation.into();
            assert_eq!(error.kind(), ErrorKind::BadRequest, "constraint {name}");
        }
    }

    #[test]
    fn unknown_query_errors_are_internal() {
        let error: Error = PgError::Unexpected("boom".into()).into();
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
    }
}
