//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the auth layer.

pub mod recipe;
pub mod user;

pub use recipe::RecipeService;
pub use user::UserService;
