//! Recipe — the single entity of the store.
//!
//! A recipe is identified internally by a UUID and externally by its title,
//! which is unique across the whole collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Who submitted a recipe to the competition.
///
/// The symbolic names (`VIEWER`, `PARTICIPANT`, `JUDGE`) are the wire
/// representation, both in JSON bodies and in the `/recipes/type/{t}` path
/// segment.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorType {
  Viewer,
  Participant,
  Judge,
}

/// A stored recipe.
///
/// `recipe_id` and `created_at` are store metadata: assigned at registration,
/// immutable afterwards, and never exposed in API responses. Everything else
/// is replaced wholesale on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
  pub recipe_id:         Uuid,
  pub created_at:        DateTime<Utc>,
  pub title:             String,
  pub ingredients:       Vec<String>,
  pub preparation_steps: Vec<String>,
  pub author_type:       AuthorType,
  pub author_name:       Option<String>,
  /// Competition season. Meaningful only for [`AuthorType::Participant`]
  /// recipes; pinned to 0 for every other author type.
  pub season:            u32,
}
