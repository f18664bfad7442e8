//! Core types: the persisted record shape, identified incidents, weather
//! observations, and the request-scoped filter.

use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Persisted record (JSON contract — what the repository stores)
// ---------------------------------------------------------------------------

/// Body-only incident record as persisted. The storage key is not part of the
/// body; the repository attaches it after parsing via
/// [`IncidentRecord::with_id`]. Unknown fields are silently ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct IncidentRecord {
  pub description: Description,
  pub address: Address,
}

impl IncidentRecord {
  /// Attach the externally assigned id, producing the identified incident.
  pub fn with_id(self, id: impl Into<String>) -> Incident {
    Incident {
      id: id.into(),
      description: self.description,
      address: self.address,
    }
  }
}

/// Event description block. `event_opened <= event_closed` is assumed, not
/// enforced.
#[derive(Debug, Clone, Deserialize)]
pub struct Description {
  pub event_opened: DateTime<FixedOffset>,
  pub event_closed: DateTime<FixedOffset>,
  #[serde(default)]
  pub comments: Option<String>,
}

/// Location block. The geohash is most-significant-first, so prefix tests
/// answer coarse containment.
#[derive(Debug, Clone, Deserialize)]
pub struct Address {
  #[serde(default)]
  pub geohash: Option<String>,
  #[serde(default)]
  pub latitude: Option<f64>,
  #[serde(default)]
  pub longitude: Option<f64>,
  #[serde(default)]
  pub address_line1: Option<String>,
  #[serde(default)]
  pub city: Option<String>,
}

// ---------------------------------------------------------------------------
// Identified incident
// ---------------------------------------------------------------------------

/// An incident with its id attached. Identity is the id; constructed once per
/// fetch, never mutated.
#[derive(Debug, Clone)]
pub struct Incident {
  pub id: String,
  pub description: Description,
  pub address: Address,
}

// ---------------------------------------------------------------------------
// Weather observation
// ---------------------------------------------------------------------------

/// One weather observation. No identity; scoped to a single detail response.
#[derive(Debug, Clone, PartialEq)]
pub struct Weather {
  pub temperature: Option<f64>,
  pub dew_point: Option<f64>,
  pub time: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Filter criteria
// ---------------------------------------------------------------------------

/// Request-scoped filter parameters. Not an entity — a parameter object.
#[derive(Debug, Clone, Default)]
pub struct IncidentFilter {
  /// Geohash prefixes; empty means no geo filtering.
  pub geohash_prefixes: Vec<String>,
  /// Inclusive lower bound on the event window; `None` means unbounded.
  pub start: Option<DateTime<Utc>>,
  /// Inclusive upper bound on the event window; `None` means unbounded.
  pub end: Option<DateTime<Utc>>,
}
