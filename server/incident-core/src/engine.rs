//! Query engine: composes the repository, the filter predicate, and the
//! weather enrichment.

use std::sync::Arc;

use crate::error::EngineError;
use crate::filter;
use crate::repository::IncidentRepository;
use crate::types::{Incident, IncidentFilter, Weather};
use crate::weather::{self, WeatherProvider};

/// Read-only incident queries. Stateless across requests; collaborators are
/// injected once at construction.
pub struct QueryEngine {
  repository: Arc<dyn IncidentRepository>,
  weather: Arc<dyn WeatherProvider>,
}

impl QueryEngine {
  pub fn new(repository: Arc<dyn IncidentRepository>, weather: Arc<dyn WeatherProvider>) -> Self {
    Self { repository, weather }
  }

  /// All incidents matching the filter, in repository iteration order.
  pub async fn find_many(&self, filter: &IncidentFilter) -> Result<Vec<Incident>, EngineError> {
    let incidents = self.repository.find_all().await?;
    Ok(
      incidents
        .into_iter()
        .filter(|incident| filter::matches(incident, filter))
        .collect(),
    )
  }

  /// One incident by id; `None` when the id is unknown.
  pub async fn find_one(&self, id: &str) -> Result<Option<Incident>, EngineError> {
    Ok(self.repository.find_by_id(id).await?)
  }

  /// One incident by id, enriched with weather observations for its own event
  /// window. A missing incident short-circuits; the weather capability is
  /// never invoked for it.
  pub async fn find_one_with_weather(
    &self,
    id: &str,
  ) -> Result<Option<(Incident, Vec<Weather>)>, EngineError> {
    let incident = match self.repository.find_by_id(id).await? {
      Some(incident) => incident,
      None => return Ok(None),
    };
    let observations = weather::observations_for(self.weather.as_ref(), &incident).await;
    Ok(Some((incident, observations)))
  }
}
