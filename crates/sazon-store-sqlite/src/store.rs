//! [`SqliteStore`] — the SQLite implementation of [`RecipeStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use sazon_core::{
  recipe::{AuthorType, Recipe},
  store::RecipeStore,
};

use crate::{
  Error, Result,
  encode::{
    RawRecipe, encode_author_type, encode_dt, encode_string_list, encode_uuid,
  },
  schema::SCHEMA,
};

/// Map a `recipes` row (selected in schema column order) to [`RawRecipe`].
fn read_row(row: &rusqlite::Row) -> rusqlite::Result<RawRecipe> {
  Ok(RawRecipe {
    recipe_id:         row.get(0)?,
    created_at:        row.get(1)?,
    title:             row.get(2)?,
    ingredients:       row.get(3)?,
    preparation_steps: row.get(4)?,
    author_type:       row.get(5)?,
    author_name:       row.get(6)?,
    season:            row.get(7)?,
  })
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A recipe store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run a query returning whole `recipes` rows and decode them.
  async fn select_recipes(
    &self,
    sql: &'static str,
    param: Option<String>,
  ) -> Result<Vec<Recipe>> {
    let raws: Vec<RawRecipe> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(sql)?;
        let rows = if let Some(p) = param {
          stmt
            .query_map(rusqlite::params![p], read_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        } else {
          stmt
            .query_map([], read_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        };
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRecipe::into_recipe).collect()
  }
}

// ─── RecipeStore impl ────────────────────────────────────────────────────────

impl RecipeStore for SqliteStore {
  type Error = Error;

  async fn save(&self, recipe: Recipe) -> Result<Recipe> {
    let id_str      = encode_uuid(recipe.recipe_id);
    let at_str      = encode_dt(recipe.created_at);
    let title       = recipe.title.clone();
    let ingredients = encode_string_list(&recipe.ingredients)?;
    let steps       = encode_string_list(&recipe.preparation_steps)?;
    let author      = encode_author_type(recipe.author_type);
    let name        = recipe.author_name.clone();
    let season      = i64::from(recipe.season);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO recipes (
             recipe_id, created_at, title, ingredients,
             preparation_steps, author_type, author_name, season
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
           ON CONFLICT(recipe_id) DO UPDATE SET
             title             = excluded.title,
             ingredients       = excluded.ingredients,
             preparation_steps = excluded.preparation_steps,
             author_type       = excluded.author_type,
             author_name       = excluded.author_name,
             season            = excluded.season",
          rusqlite::params![
            id_str,
            at_str,
            title,
            ingredients,
            steps,
            author,
            name,
            season,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(recipe)
  }

  async fn all(&self) -> Result<Vec<Recipe>> {
    self
      .select_recipes(
        "SELECT recipe_id, created_at, title, ingredients,
                preparation_steps, author_type, author_name, season
         FROM recipes",
        None,
      )
      .await
  }

  async fn get(&self, id: Uuid) -> Result<Option<Recipe>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawRecipe> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT recipe_id, created_at, title, ingredients,
                      preparation_steps, author_type, author_name, season
               FROM recipes WHERE recipe_id = ?1",
              rusqlite::params![id_str],
              read_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawRecipe::into_recipe).transpose()
  }

  async fn find_by_title(&self, title: &str) -> Result<Option<Recipe>> {
    let title = title.to_owned();

    let raw: Option<RawRecipe> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT recipe_id, created_at, title, ingredients,
                      preparation_steps, author_type, author_name, season
               FROM recipes WHERE title = ?1",
              rusqlite::params![title],
              read_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawRecipe::into_recipe).transpose()
  }

  async fn title_exists(&self, title: &str) -> Result<bool> {
    let title = title.to_owned();

    let exists: bool = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT 1 FROM recipes WHERE title = ?1",
              rusqlite::params![title],
              |_| Ok(true),
            )
            .optional()?
            .unwrap_or(false),
        )
      })
      .await?;

    Ok(exists)
  }

  async fn find_by_author_type(
    &self,
    author_type: AuthorType,
  ) -> Result<Vec<Recipe>> {
    self
      .select_recipes(
        "SELECT recipe_id, created_at, title, ingredients,
                preparation_steps, author_type, author_name, season
         FROM recipes WHERE author_type = ?1",
        Some(encode_author_type(author_type)),
      )
      .await
  }

  async fn find_by_season(&self, season: u32) -> Result<Vec<Recipe>> {
    let season = i64::from(season);

    let raws: Vec<RawRecipe> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT recipe_id, created_at, title, ingredients,
                  preparation_steps, author_type, author_name, season
           FROM recipes WHERE season = ?1",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![season], read_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRecipe::into_recipe).collect()
  }

  async fn find_by_ingredient(&self, fragment: &str) -> Result<Vec<Recipe>> {
    // LIKE over each entry of the JSON array; SQLite's LIKE is
    // case-insensitive for ASCII.
    self
      .select_recipes(
        "SELECT r.recipe_id, r.created_at, r.title, r.ingredients,
                r.preparation_steps, r.author_type, r.author_name, r.season
         FROM recipes r
         WHERE EXISTS (
           SELECT 1 FROM json_each(r.ingredients)
           WHERE json_each.value LIKE ?1
         )",
        Some(format!("%{fragment}%")),
      )
      .await
  }

  async fn delete(&self, id: Uuid) -> Result<()> {
    let id_str = encode_uuid(id);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "DELETE FROM recipes WHERE recipe_id = ?1",
          rusqlite::params![id_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(())
  }
}
