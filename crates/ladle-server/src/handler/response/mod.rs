//! Response types for all handlers.

mod authentication;
mod chefs;
mod error_response;
mod ingredients;
mod listing;
mod monitors;
mod recipes;

pub use authentication::{LoginReply, LoginResponse, LogoutResponse};
pub use chefs::Chef;
pub use error_response::ErrorResponse;
pub use ingredients::Ingredient;
pub use listing::Listing;
pub use monitors::HealthStatus;
pub use recipes::Recipe;
