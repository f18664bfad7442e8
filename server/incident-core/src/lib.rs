//! Incident Query Core — read-only filter + enrichment engine.
//!
//! Answers geohash-prefix/time-window queries over incident records and, for
//! a single incident, enriches the result with historical weather
//! observations. Provider failures are isolated at the enrichment boundary so
//! they never fail the incident request.
//!
//! Storage and the weather wire protocol live behind the
//! [`IncidentRepository`] and [`WeatherProvider`] seams; this crate is pure
//! composition over them.

pub mod engine;
pub mod error;
pub mod filter;
pub mod repository;
pub mod types;
pub mod views;
pub mod weather;

pub use engine::QueryEngine;
pub use error::{EngineError, RepositoryError, WeatherError};
pub use repository::IncidentRepository;
pub use types::{Incident, IncidentFilter, IncidentRecord, Weather};
pub use weather::WeatherProvider;
