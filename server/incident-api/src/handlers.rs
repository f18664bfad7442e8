//! HTTP handlers for the incident API.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::Query;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use incident_core::views::{self, IncidentDetail, IncidentSummary};
use incident_core::{EngineError, IncidentFilter};

use crate::state::AppState;
use crate::types::IncidentListQuery;

pub async fn health() -> &'static str {
  "ok"
}

/// List incidents matching the supplied geohash prefixes and time window.
/// No matches is an empty array, not an error.
pub async fn find_incidents(
  State(state): State<Arc<AppState>>,
  Query(params): Query<IncidentListQuery>,
) -> Result<Json<Vec<IncidentSummary>>, (StatusCode, String)> {
  let now = Utc::now();
  reject_future("start", params.start, now)?;
  reject_future("end", params.end, now)?;

  let filter = IncidentFilter {
    geohash_prefixes: params.geohash,
    start: params.start,
    end: params.end,
  };

  let incidents = state
    .engine
    .find_many(&filter)
    .await
    .map_err(internal_error)?;
  Ok(Json(incidents.iter().map(views::summarize).collect()))
}

/// Fetch one incident by id, enriched with weather observations. Weather
/// degradation never changes the status; only an unknown id is a 404.
pub async fn find_incident(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<Json<IncidentDetail>, StatusCode> {
  match state.engine.find_one_with_weather(&id).await {
    Ok(Some((incident, observations))) => Ok(Json(views::detail(&incident, &observations))),
    Ok(None) => Err(StatusCode::NOT_FOUND),
    Err(e) => {
      tracing::error!(incident_id = %id, error = %e, "incident detail lookup failed");
      Err(StatusCode::INTERNAL_SERVER_ERROR)
    }
  }
}

fn reject_future(
  name: &str,
  value: Option<DateTime<Utc>>,
  now: DateTime<Utc>,
) -> Result<(), (StatusCode, String)> {
  match value {
    Some(v) if v > now => Err((
      StatusCode::BAD_REQUEST,
      format!("{name} must not be in the future"),
    )),
    _ => Ok(()),
  }
}

fn internal_error(e: EngineError) -> (StatusCode, String) {
  tracing::error!(error = %e, "incident query failed");
  (StatusCode::INTERNAL_SERVER_ERROR, String::new())
}
