//! JSON REST API for Sazón.
//!
//! Exposes an axum [`Router`] backed by any [`sazon_core::store::RecipeStore`].
//! TLS and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", sazon_api::recipe_router(service.clone()))
//! ```

pub mod error;
pub mod recipes;

use axum::{Router, routing::get};
use sazon_core::{service::RecipeService, store::RecipeStore};

pub use error::ApiError;

/// Build a fully-materialised recipe router for `service`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn recipe_router<S>(service: RecipeService<S>) -> Router<()>
where
  S: RecipeStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route(
      "/recipes",
      get(recipes::list::<S>).post(recipes::create::<S>),
    )
    .route(
      "/recipes/{title}",
      get(recipes::get_one::<S>)
        .put(recipes::update_one::<S>)
        .delete(recipes::delete_one::<S>),
    )
    .route(
      "/recipes/type/{author_type}",
      get(recipes::list_by_author_type::<S>),
    )
    .route("/recipes/season/{season}", get(recipes::list_by_season::<S>))
    .route(
      "/recipes/ingredient/{fragment}",
      get(recipes::search_by_ingredient::<S>),
    )
    .with_state(service)
}

#[cfg(test)]
mod tests;
