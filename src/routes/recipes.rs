//! Recipe API routes
//!
//! All endpoints require authentication. Reads return any user's
//! recipes; writes and deletes are ownership-checked in the service.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::repositories::{RecipeRecord, UpdateRecipeFields};
use crate::services::RecipeService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Create recipe routes
pub fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_recipes).post(create_recipe))
        .route(
            "/:id",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
}

/// Request body for creating a recipe
#[derive(Debug, Deserialize)]
pub struct CreateRecipeRequest {
    pub name: String,
    pub ingredients: String,
    pub garnish: String,
}

/// Request body for updating a recipe
///
/// Absent or empty fields keep their stored values.
#[derive(Debug, Deserialize, Default)]
pub struct UpdateRecipeRequest {
    pub name: Option<String>,
    pub ingredients: Option<String>,
    pub garnish: Option<String>,
}

/// Recipe returned to the client
#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub ingredients: String,
    pub garnish: String,
    pub created_at: DateTime<Utc>,
}

impl From<RecipeRecord> for RecipeResponse {
    fn from(r: RecipeRecord) -> Self {
        Self {
            id: r.id,
            owner_id: r.owner_id,
            name: r.name,
            ingredients: r.ingredients,
            garnish: r.garnish,
            created_at: r.created_at,
        }
    }
}

/// Response for a successful delete
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub msg: String,
}

/// Create a recipe owned by the requester
///
/// POST /api/recipes
async fn create_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateRecipeRequest>,
) -> ApiResult<Json<RecipeResponse>> {
    let recipe = RecipeService::create(
        state.db(),
        auth.user_id,
        &req.name,
        &req.ingredients,
        &req.garnish,
    )
    .await?;
    Ok(Json(recipe.into()))
}

/// List all recipes, newest first
///
/// GET /api/recipes
async fn list_recipes(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<RecipeResponse>>> {
    let recipes = RecipeService::list(state.db()).await?;
    Ok(Json(recipes.into_iter().map(Into::into).collect()))
}

/// Get a single recipe
///
/// GET /api/recipes/:id
async fn get_recipe(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<RecipeResponse>> {
    let recipe = RecipeService::get(state.db(), id).await?;
    Ok(Json(recipe.into()))
}

/// Update a recipe (owner only)
///
/// PUT /api/recipes/:id
async fn update_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateRecipeRequest>,
) -> ApiResult<Json<RecipeResponse>> {
    let fields = UpdateRecipeFields {
        name: req.name,
        ingredients: req.ingredients,
        garnish: req.garnish,
    };
    let recipe = RecipeService::update(state.db(), auth.user_id, id, fields).await?;
    Ok(Json(recipe.into()))
}

/// Delete a recipe (owner only)
///
/// DELETE /api/recipes/:id
async fn delete_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<DeleteResponse>> {
    RecipeService::delete(state.db(), auth.user_id, id).await?;
    Ok(Json(DeleteResponse {
        msg: "Recipe removed".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_response_from_record() {
        let record = RecipeRecord {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            name: "Margarita".to_string(),
            ingredients: "Tequila, lime, triple sec".to_string(),
            garnish: "Salt rim".to_string(),
            created_at: Utc::now(),
        };
        let response = RecipeResponse::from(record.clone());
        assert_eq!(response.id, record.id);
        assert_eq!(response.owner_id, record.owner_id);
        assert_eq!(response.name, "Margarita");
    }

    #[test]
    fn test_update_request_allows_partial_body() {
        let req: UpdateRecipeRequest = serde_json::from_str(r#"{"name":"New Name"}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some("New Name"));
        assert!(req.ingredients.is_none());
        assert!(req.garnish.is_none());
    }
}
