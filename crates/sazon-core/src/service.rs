//! Recipe service — the business rules layered over a [`RecipeStore`].
//!
//! Enforces title uniqueness and the participant/season rule, and translates
//! between the external JSON shapes ([`RecipeDraft`], [`RecipeView`]) and the
//! stored [`Recipe`] record.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  error::{Error, Result},
  recipe::{AuthorType, Recipe},
  store::RecipeStore,
};

// ─── External shapes ─────────────────────────────────────────────────────────

/// A recipe as submitted by a client — the body of both create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
  pub title:             String,
  pub ingredients:       Vec<String>,
  pub preparation_steps: Vec<String>,
  pub author_name:       Option<String>,
  pub author_type:       AuthorType,
  /// Competition season. Required and positive for participants; whatever a
  /// non-participant sends here is discarded at registration.
  pub season:            Option<i64>,
}

/// A recipe as returned to clients. Field-for-field the stored record, minus
/// the store metadata (`recipe_id`, `created_at`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeView {
  pub title:             String,
  pub ingredients:       Vec<String>,
  pub preparation_steps: Vec<String>,
  pub author_name:       Option<String>,
  pub author_type:       AuthorType,
  pub season:            u32,
}

impl From<Recipe> for RecipeView {
  fn from(recipe: Recipe) -> Self {
    Self {
      title:             recipe.title,
      ingredients:       recipe.ingredients,
      preparation_steps: recipe.preparation_steps,
      author_name:       recipe.author_name,
      author_type:       recipe.author_type,
      season:            recipe.season,
    }
  }
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// Structural checks on a draft, independent of store state.
fn validate_draft(draft: &RecipeDraft) -> Result<()> {
  if draft.title.trim().is_empty() {
    return Err(Error::InvalidInput("title must not be empty".into()));
  }
  if draft.ingredients.is_empty() {
    return Err(Error::InvalidInput(
      "at least one ingredient is required".into(),
    ));
  }
  if draft.ingredients.iter().any(|i| i.trim().is_empty()) {
    return Err(Error::InvalidInput(
      "ingredients must not contain empty entries".into(),
    ));
  }
  if draft.preparation_steps.is_empty() {
    return Err(Error::InvalidInput(
      "at least one preparation step is required".into(),
    ));
  }
  if draft.preparation_steps.iter().any(|s| s.trim().is_empty()) {
    return Err(Error::InvalidInput(
      "preparation steps must not contain empty entries".into(),
    ));
  }
  Ok(())
}

/// The season that actually gets stored at registration: participants keep
/// theirs (must be positive), every other author type is pinned to 0 no
/// matter what the draft says. The draft itself is never mutated.
fn stored_season(draft: &RecipeDraft) -> Result<u32> {
  match draft.author_type {
    AuthorType::Participant => match draft.season {
      Some(n) if n > 0 => u32::try_from(n)
        .map_err(|_| Error::InvalidInput(format!("season {n} is out of range"))),
      _ => Err(Error::InvalidInput(
        "season is required for PARTICIPANT recipes".into(),
      )),
    },
    _ => Ok(0),
  }
}

// ─── Service ─────────────────────────────────────────────────────────────────

/// Business rules over any [`RecipeStore`] backend.
///
/// Cloning is cheap — the store handle is reference-counted.
#[derive(Clone)]
pub struct RecipeService<S> {
  store: Arc<S>,
}

impl<S> RecipeService<S>
where
  S: RecipeStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  fn store_err(e: S::Error) -> Error { Error::Store(Box::new(e)) }

  /// Register a new recipe.
  ///
  /// Fails with [`Error::DuplicateTitle`] if the title is already taken, and
  /// with [`Error::InvalidInput`] on structural problems or a participant
  /// draft without a positive season.
  pub async fn register(&self, draft: RecipeDraft) -> Result<RecipeView> {
    if self
      .store
      .title_exists(&draft.title)
      .await
      .map_err(Self::store_err)?
    {
      return Err(Error::DuplicateTitle(draft.title));
    }

    validate_draft(&draft)?;
    let season = stored_season(&draft)?;

    let recipe = Recipe {
      recipe_id:         Uuid::new_v4(),
      created_at:        Utc::now(),
      title:             draft.title,
      ingredients:       draft.ingredients,
      preparation_steps: draft.preparation_steps,
      author_type:       draft.author_type,
      author_name:       draft.author_name,
      season,
    };

    let stored = self.store.save(recipe).await.map_err(Self::store_err)?;
    Ok(stored.into())
  }

  /// Every recipe, in store iteration order.
  pub async fn list_all(&self) -> Result<Vec<RecipeView>> {
    let recipes = self.store.all().await.map_err(Self::store_err)?;
    Ok(recipes.into_iter().map(Into::into).collect())
  }

  /// The recipe with exactly this title, or [`Error::TitleNotFound`].
  pub async fn get_by_title(&self, title: &str) -> Result<RecipeView> {
    let recipe = self
      .store
      .find_by_title(title)
      .await
      .map_err(Self::store_err)?
      .ok_or_else(|| Error::TitleNotFound(title.to_owned()))?;
    Ok(recipe.into())
  }

  /// All recipes submitted by the given author type; possibly empty.
  pub async fn list_by_author_type(
    &self,
    author_type: AuthorType,
  ) -> Result<Vec<RecipeView>> {
    let recipes = self
      .store
      .find_by_author_type(author_type)
      .await
      .map_err(Self::store_err)?;
    Ok(recipes.into_iter().map(Into::into).collect())
  }

  /// All recipes from the given season; possibly empty.
  pub async fn list_by_season(&self, season: u32) -> Result<Vec<RecipeView>> {
    let recipes = self
      .store
      .find_by_season(season)
      .await
      .map_err(Self::store_err)?;
    Ok(recipes.into_iter().map(Into::into).collect())
  }

  /// All recipes where some ingredient contains `fragment`,
  /// case-insensitively; possibly empty.
  pub async fn search_by_ingredient(
    &self,
    fragment: &str,
  ) -> Result<Vec<RecipeView>> {
    let recipes = self
      .store
      .find_by_ingredient(fragment)
      .await
      .map_err(Self::store_err)?;
    Ok(recipes.into_iter().map(Into::into).collect())
  }

  /// Update the recipe currently titled `title`, replacing every field with
  /// the draft's.
  ///
  /// Fails with [`Error::TitleNotFound`] if no such recipe exists, and with
  /// [`Error::DuplicateTitle`] when renaming to a title another recipe
  /// already owns. Renaming to the recipe's own current title is fine.
  ///
  /// The participant/season rule is NOT re-checked here: the draft's season
  /// is stored as given (absent or negative stores as 0), for any author
  /// type. See DESIGN.md.
  pub async fn update(
    &self,
    title: &str,
    draft: RecipeDraft,
  ) -> Result<RecipeView> {
    let existing = self
      .store
      .find_by_title(title)
      .await
      .map_err(Self::store_err)?
      .ok_or_else(|| Error::TitleNotFound(title.to_owned()))?;

    if existing.title != draft.title
      && self
        .store
        .title_exists(&draft.title)
        .await
        .map_err(Self::store_err)?
    {
      return Err(Error::DuplicateTitle(draft.title));
    }

    let updated = Recipe {
      recipe_id:         existing.recipe_id,
      created_at:        existing.created_at,
      title:             draft.title,
      ingredients:       draft.ingredients,
      preparation_steps: draft.preparation_steps,
      author_type:       draft.author_type,
      author_name:       draft.author_name,
      season:            draft
        .season
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0),
    };

    let stored = self.store.save(updated).await.map_err(Self::store_err)?;
    Ok(stored.into())
  }

  /// Remove the recipe with exactly this title, or [`Error::TitleNotFound`].
  pub async fn delete(&self, title: &str) -> Result<()> {
    let existing = self
      .store
      .find_by_title(title)
      .await
      .map_err(Self::store_err)?
      .ok_or_else(|| Error::TitleNotFound(title.to_owned()))?;

    self
      .store
      .delete(existing.recipe_id)
      .await
      .map_err(Self::store_err)
  }
}
