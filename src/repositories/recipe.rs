//! Recipe repository - database operations for recipe records

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Recipe record from the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RecipeRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub ingredients: String,
    pub garnish: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new recipe
#[derive(Debug, Clone)]
pub struct CreateRecipe {
    pub owner_id: Uuid,
    pub name: String,
    pub ingredients: String,
    pub garnish: String,
}

/// Input for updating a recipe
///
/// `None` (and empty strings) leave the stored field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateRecipeFields {
    pub name: Option<String>,
    pub ingredients: Option<String>,
    pub garnish: Option<String>,
}

/// Recipe repository
pub struct RecipeRepository;

impl RecipeRepository {
    /// Create a new recipe
    pub async fn create(pool: &PgPool, input: CreateRecipe) -> Result<RecipeRecord, sqlx::Error> {
        let recipe = sqlx::query_as::<_, RecipeRecord>(
            r#"
            INSERT INTO recipes (owner_id, name, ingredients, garnish)
            VALUES ($1, $2, $3, $4)
            RETURNING id, owner_id, name, ingredients, garnish, created_at
            "#,
        )
        .bind(input.owner_id)
        .bind(&input.name)
        .bind(&input.ingredients)
        .bind(&input.garnish)
        .fetch_one(pool)
        .await?;

        Ok(recipe)
    }

    /// Find recipe by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<RecipeRecord>, sqlx::Error> {
        let recipe = sqlx::query_as::<_, RecipeRecord>(
            r#"
            SELECT id, owner_id, name, ingredients, garnish, created_at
            FROM recipes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(recipe)
    }

    /// Get all recipes, newest first
    pub async fn list_all(pool: &PgPool) -> Result<Vec<RecipeRecord>, sqlx::Error> {
        let recipes = sqlx::query_as::<_, RecipeRecord>(
            r#"
            SELECT id, owner_id, name, ingredients, garnish, created_at
            FROM recipes
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(recipes)
    }

    /// Update a recipe, keeping existing values for absent or empty fields
    ///
    /// Last write wins: there is no version column, so two concurrent
    /// owner updates simply overwrite each other.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        fields: UpdateRecipeFields,
    ) -> Result<RecipeRecord, sqlx::Error> {
        let recipe = sqlx::query_as::<_, RecipeRecord>(
            r#"
            UPDATE recipes SET
                name = COALESCE(NULLIF($2, ''), name),
                ingredients = COALESCE(NULLIF($3, ''), ingredients),
                garnish = COALESCE(NULLIF($4, ''), garnish)
            WHERE id = $1
            RETURNING id, owner_id, name, ingredients, garnish, created_at
            "#,
        )
        .bind(id)
        .bind(fields.name.unwrap_or_default())
        .bind(fields.ingredients.unwrap_or_default())
        .bind(fields.garnish.unwrap_or_default())
        .fetch_one(pool)
        .await?;

        Ok(recipe)
    }

    /// Delete a recipe permanently
    ///
    /// Returns whether a row was actually removed.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM recipes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
