//! Response projections: the summary and detail shapes.
//!
//! Absent optional fields are omitted from serialized output rather than
//! emitted as null; that is a presentation contract, not a domain rule.

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

use crate::types::{Incident, Weather};

/// List-level projection. Omits comments and the geohash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentSummary {
  pub id: String,
  pub event_opened: DateTime<FixedOffset>,
  pub event_closed: DateTime<FixedOffset>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub latitude: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub longitude: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub address_line1: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub city: Option<String>,
}

/// Detail-level projection: summary fields plus comments and the weather
/// observations fetched for the incident's event window.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentDetail {
  #[serde(flatten)]
  pub summary: IncidentSummary,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comments: Option<String>,
  pub weather: Vec<WeatherView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherView {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub temperature: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub dew_point: Option<f64>,
  pub time: DateTime<Utc>,
}

/// Project an incident to its summary shape.
pub fn summarize(incident: &Incident) -> IncidentSummary {
  IncidentSummary {
    id: incident.id.clone(),
    event_opened: incident.description.event_opened,
    event_closed: incident.description.event_closed,
    latitude: incident.address.latitude,
    longitude: incident.address.longitude,
    address_line1: incident.address.address_line1.clone(),
    city: incident.address.city.clone(),
  }
}

/// Project an incident plus its observations to the detail shape.
pub fn detail(incident: &Incident, observations: &[Weather]) -> IncidentDetail {
  IncidentDetail {
    summary: summarize(incident),
    comments: incident.description.comments.clone(),
    weather: observations
      .iter()
      .map(|w| WeatherView {
        temperature: w.temperature,
        dew_point: w.dew_point,
        time: w.time,
      })
      .collect(),
  }
}
