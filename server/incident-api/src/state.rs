//! Shared application state.

use incident_core::QueryEngine;

pub struct AppState {
  pub engine: QueryEngine,
}
