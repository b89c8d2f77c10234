//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, string lists as compact JSON
//! arrays, author types by their symbolic name, UUIDs as hyphenated lowercase
//! strings.

use chrono::{DateTime, Utc};
use sazon_core::recipe::{AuthorType, Recipe};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::Decode(format!("bad timestamp {s:?}: {e}")))
}

// ─── AuthorType ──────────────────────────────────────────────────────────────

pub fn encode_author_type(t: AuthorType) -> String { t.to_string() }

pub fn decode_author_type(s: &str) -> Result<AuthorType> {
  s.parse()
    .map_err(|_| Error::Decode(format!("unknown author type: {s:?}")))
}

// ─── String lists ────────────────────────────────────────────────────────────

pub fn encode_string_list(items: &[String]) -> Result<String> {
  Ok(serde_json::to_string(items)?)
}

pub fn decode_string_list(s: &str) -> Result<Vec<String>> {
  Ok(serde_json::from_str(s)?)
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw values read directly from a `recipes` row.
pub struct RawRecipe {
  pub recipe_id:         String,
  pub created_at:        String,
  pub title:             String,
  pub ingredients:       String,
  pub preparation_steps: String,
  pub author_type:       String,
  pub author_name:       Option<String>,
  pub season:            i64,
}

impl RawRecipe {
  pub fn into_recipe(self) -> Result<Recipe> {
    Ok(Recipe {
      recipe_id:         decode_uuid(&self.recipe_id)?,
      created_at:        decode_dt(&self.created_at)?,
      title:             self.title,
      ingredients:       decode_string_list(&self.ingredients)?,
      preparation_steps: decode_string_list(&self.preparation_steps)?,
      author_type:       decode_author_type(&self.author_type)?,
      author_name:       self.author_name,
      season:            u32::try_from(self.season)
        .map_err(|_| Error::Decode(format!("bad season: {}", self.season)))?,
    })
  }
}
