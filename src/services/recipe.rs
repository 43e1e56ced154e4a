//! Recipe service - ownership-checked CRUD on recipe records
//!
//! Reads are open to any authenticated user; mutation and deletion
//! require the requester to own the record.

use crate::error::ApiError;
use crate::repositories::{CreateRecipe, RecipeRecord, RecipeRepository, UpdateRecipeFields};
use sqlx::PgPool;
use uuid::Uuid;

/// The single authorization predicate for recipe mutations.
///
/// Update and delete both go through here, so the ownership rule
/// cannot drift between them.
fn ensure_owner(recipe: &RecipeRecord, user_id: Uuid) -> Result<(), ApiError> {
    if recipe.owner_id != user_id {
        return Err(ApiError::Forbidden("User not authorized".to_string()));
    }
    Ok(())
}

/// Recipe service
pub struct RecipeService;

impl RecipeService {
    /// Create a recipe owned by the authenticated user
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        name: &str,
        ingredients: &str,
        garnish: &str,
    ) -> Result<RecipeRecord, ApiError> {
        if name.trim().is_empty() {
            return Err(ApiError::BadRequest("Name text is required".to_string()));
        }
        if ingredients.trim().is_empty() {
            return Err(ApiError::BadRequest(
                "Ingredients text is required".to_string(),
            ));
        }
        if garnish.trim().is_empty() {
            return Err(ApiError::BadRequest("Garnish text is required".to_string()));
        }

        let recipe = RecipeRepository::create(
            pool,
            CreateRecipe {
                owner_id: user_id,
                name: name.to_string(),
                ingredients: ingredients.to_string(),
                garnish: garnish.to_string(),
            },
        )
        .await?;

        Ok(recipe)
    }

    /// List all recipes, newest first
    ///
    /// Reads are not ownership-scoped; every authenticated user sees
    /// the full list.
    pub async fn list(pool: &PgPool) -> Result<Vec<RecipeRecord>, ApiError> {
        Ok(RecipeRepository::list_all(pool).await?)
    }

    /// Get a single recipe by ID
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<RecipeRecord, ApiError> {
        RecipeRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Recipe not found".to_string()))
    }

    /// Update a recipe, merging only provided non-empty fields
    pub async fn update(
        pool: &PgPool,
        user_id: Uuid,
        id: Uuid,
        fields: UpdateRecipeFields,
    ) -> Result<RecipeRecord, ApiError> {
        let recipe = Self::get(pool, id).await?;
        ensure_owner(&recipe, user_id)?;

        let updated = RecipeRepository::update(pool, id, fields).await?;
        Ok(updated)
    }

    /// Delete a recipe permanently
    pub async fn delete(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), ApiError> {
        let recipe = Self::get(pool, id).await?;
        ensure_owner(&recipe, user_id)?;

        if !RecipeRepository::delete(pool, id).await? {
            // Deleted out from under us between the lookup and the delete
            return Err(ApiError::NotFound("Recipe not found".to_string()));
        }
        Ok(())
    }
}
