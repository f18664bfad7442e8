//! Request types for the incident API.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Query parameters for the incident list endpoint. `geohash` may repeat;
/// `start`/`end` are RFC3339 instants.
#[derive(Debug, Default, Deserialize)]
pub struct IncidentListQuery {
  #[serde(default)]
  pub geohash: Vec<String>,
  pub start: Option<DateTime<Utc>>,
  pub end: Option<DateTime<Utc>>,
}
