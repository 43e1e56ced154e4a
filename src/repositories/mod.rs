//! Database repositories
//!
//! Provides the data access layer. Queries return `sqlx::Error` directly
//! so callers can tell row-not-found, duplicate-key, and connection
//! failures apart.

pub mod recipe;
pub mod user;

pub use recipe::{CreateRecipe, RecipeRecord, RecipeRepository, UpdateRecipeFields};
pub use user::{UserRecord, UserRepository};
