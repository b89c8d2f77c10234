//! The `RecipeStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `sazon-store-sqlite`).
//! Higher layers (`sazon-api`, the service in this crate) depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::recipe::{AuthorType, Recipe};

/// Abstraction over a recipe store backend.
///
/// Reads return a possibly-empty `Vec`/`Option` with no ordering guarantee
/// beyond store iteration order. The only failure mode is the backend being
/// unavailable, surfaced as [`Self::Error`] and propagated unmodified.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait RecipeStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert a recipe, or replace the existing record with the same
  /// `recipe_id`. `created_at` is preserved on replacement.
  fn save(
    &self,
    recipe: Recipe,
  ) -> impl Future<Output = Result<Recipe, Self::Error>> + Send + '_;

  /// All records, in store iteration order.
  fn all(
    &self,
  ) -> impl Future<Output = Result<Vec<Recipe>, Self::Error>> + Send + '_;

  /// Retrieve a recipe by identifier. Returns `None` if not found.
  fn get(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Recipe>, Self::Error>> + Send + '_;

  /// Retrieve the recipe with exactly this title — at most one exists.
  fn find_by_title<'a>(
    &'a self,
    title: &'a str,
  ) -> impl Future<Output = Result<Option<Recipe>, Self::Error>> + Send + 'a;

  /// Existence check by exact title.
  fn title_exists<'a>(
    &'a self,
    title: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// All recipes submitted by the given author type.
  fn find_by_author_type(
    &self,
    author_type: AuthorType,
  ) -> impl Future<Output = Result<Vec<Recipe>, Self::Error>> + Send + '_;

  /// All recipes from the given season.
  fn find_by_season(
    &self,
    season: u32,
  ) -> impl Future<Output = Result<Vec<Recipe>, Self::Error>> + Send + '_;

  /// All recipes where some ingredient entry contains `fragment`,
  /// case-insensitively.
  fn find_by_ingredient<'a>(
    &'a self,
    fragment: &'a str,
  ) -> impl Future<Output = Result<Vec<Recipe>, Self::Error>> + Send + 'a;

  /// Remove one recipe by identity. Removing an absent id is not an error.
  fn delete(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
