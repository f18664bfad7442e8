//! Incident Query API
//!
//! HTTP service answering read-only incident queries: list with geohash and
//! time-window filters, detail with historical weather enrichment.
//! Binds to 127.0.0.1 by default (internal only).

mod handlers;
mod meteostat;
mod repository;
mod state;
mod types;

pub use handlers::{find_incident, find_incidents, health};
pub use meteostat::MeteostatClient;
pub use repository::JsonFileRepository;
pub use state::AppState;
