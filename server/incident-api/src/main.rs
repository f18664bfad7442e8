//! Binary entrypoint for the incident API.

use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tower_http::validate_request::ValidateRequestHeaderLayer;
use tracing_subscriber::EnvFilter;

use incident_api::{AppState, JsonFileRepository, MeteostatClient};
use incident_core::QueryEngine;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
      "incident_api=info,incident_core=info,tower_http=info".into()
    }))
    .init();

  let port: u16 = std::env::var("PORT")
    .unwrap_or_else(|_| "5010".into())
    .parse()
    .expect("PORT must be a valid u16");
  let incidents_dir =
    std::env::var("INCIDENTS_DIR").unwrap_or_else(|_| "data/incidents".into());
  let meteostat_url = std::env::var("METEOSTAT_URL")
    .unwrap_or_else(|_| "https://api.meteostat.net/v2/point/hourly".into());
  let meteostat_api_key =
    std::env::var("METEOSTAT_API_KEY").expect("METEOSTAT_API_KEY must be set");
  let api_username = std::env::var("API_USERNAME").unwrap_or_else(|_| "incidents".into());
  let api_password = std::env::var("API_PASSWORD").expect("API_PASSWORD must be set");

  let repository = Arc::new(JsonFileRepository::new(&incidents_dir));
  let weather = Arc::new(MeteostatClient::new(meteostat_url, meteostat_api_key));
  let state = Arc::new(AppState {
    engine: QueryEngine::new(repository, weather),
  });

  // Basic auth covers the incident routes; /health stays open for probes.
  let app = Router::new()
    .route("/incidents", get(incident_api::find_incidents))
    .route("/incidents/:id", get(incident_api::find_incident))
    .layer(ValidateRequestHeaderLayer::basic(&api_username, &api_password))
    .route("/health", get(incident_api::health))
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(state);

  let addr = SocketAddr::from(([127, 0, 0, 1], port));
  tracing::info!("incident-api listening on http://{} (incidents from {})", addr, incidents_dir);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
