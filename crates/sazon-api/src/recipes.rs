//! Handlers for `/recipes` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/recipes` | 201 + created recipe |
//! | `GET`    | `/recipes` | Every recipe |
//! | `GET`    | `/recipes/{title}` | 404 if not found |
//! | `GET`    | `/recipes/type/{author_type}` | 400 on unknown type |
//! | `GET`    | `/recipes/season/{season}` | 400 on non-numeric season |
//! | `GET`    | `/recipes/ingredient/{fragment}` | Case-insensitive substring |
//! | `PUT`    | `/recipes/{title}` | 400 on duplicate rename, 404 if missing |
//! | `DELETE` | `/recipes/{title}` | 204, 404 if missing |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use sazon_core::{
  recipe::AuthorType,
  service::{RecipeDraft, RecipeService, RecipeView},
  store::RecipeStore,
};

use crate::error::ApiError;

// ─── Create ──────────────────────────────────────────────────────────────────

/// `POST /recipes`
pub async fn create<S>(
  State(service): State<RecipeService<S>>,
  Json(draft): Json<RecipeDraft>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecipeStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let view = service.register(draft).await?;
  Ok((StatusCode::CREATED, Json(view)))
}

// ─── List / get ──────────────────────────────────────────────────────────────

/// `GET /recipes`
pub async fn list<S>(
  State(service): State<RecipeService<S>>,
) -> Result<Json<Vec<RecipeView>>, ApiError>
where
  S: RecipeStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Ok(Json(service.list_all().await?))
}

/// `GET /recipes/{title}`
pub async fn get_one<S>(
  State(service): State<RecipeService<S>>,
  Path(title): Path<String>,
) -> Result<Json<RecipeView>, ApiError>
where
  S: RecipeStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Ok(Json(service.get_by_title(&title).await?))
}

// ─── Filtered lists ──────────────────────────────────────────────────────────

/// `GET /recipes/type/{author_type}`
///
/// The path segment is parsed explicitly; anything other than `VIEWER`,
/// `PARTICIPANT` or `JUDGE` is a 400.
pub async fn list_by_author_type<S>(
  State(service): State<RecipeService<S>>,
  Path(raw): Path<String>,
) -> Result<Json<Vec<RecipeView>>, ApiError>
where
  S: RecipeStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let author_type: AuthorType = raw
    .parse()
    .map_err(|_| ApiError::BadRequest(format!("unknown author type: {raw:?}")))?;
  Ok(Json(service.list_by_author_type(author_type).await?))
}

/// `GET /recipes/season/{season}`
///
/// The season segment must parse as a non-negative integer; anything else is
/// a 400.
pub async fn list_by_season<S>(
  State(service): State<RecipeService<S>>,
  Path(raw): Path<String>,
) -> Result<Json<Vec<RecipeView>>, ApiError>
where
  S: RecipeStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let season: u32 = raw
    .parse()
    .map_err(|_| ApiError::BadRequest(format!("invalid season: {raw:?}")))?;
  Ok(Json(service.list_by_season(season).await?))
}

/// `GET /recipes/ingredient/{fragment}`
pub async fn search_by_ingredient<S>(
  State(service): State<RecipeService<S>>,
  Path(fragment): Path<String>,
) -> Result<Json<Vec<RecipeView>>, ApiError>
where
  S: RecipeStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Ok(Json(service.search_by_ingredient(&fragment).await?))
}

// ─── Update / delete ─────────────────────────────────────────────────────────

/// `PUT /recipes/{title}`
pub async fn update_one<S>(
  State(service): State<RecipeService<S>>,
  Path(title): Path<String>,
  Json(draft): Json<RecipeDraft>,
) -> Result<Json<RecipeView>, ApiError>
where
  S: RecipeStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Ok(Json(service.update(&title, draft).await?))
}

/// `DELETE /recipes/{title}`
pub async fn delete_one<S>(
  State(service): State<RecipeService<S>>,
  Path(title): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecipeStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  service.delete(&title).await?;
  Ok(StatusCode::NO_CONTENT)
}
