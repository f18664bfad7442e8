//! Weather capability seam and the enrichment boundary around it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::WeatherError;
use crate::types::{Incident, Weather};

/// Historical weather capability, keyed by location and time window. The
/// provider may legitimately return observations outside the requested window
/// (its granularity is coarser than per-minute); callers get them unchanged.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
  async fn observations(
    &self,
    latitude: f64,
    longitude: f64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
  ) -> Result<Vec<Weather>, WeatherError>;
}

/// Fetch observations covering the incident's own event window.
///
/// Provider failures stay inside this boundary: any error is logged with the
/// incident id and degrades to an empty list, so a detail request never fails
/// on the weather dependency alone. An incident without coordinates cannot be
/// enriched and degrades the same way. Observation order is the provider's;
/// nothing is re-sorted or trimmed to the window.
pub async fn observations_for(
  provider: &dyn WeatherProvider,
  incident: &Incident,
) -> Vec<Weather> {
  let (latitude, longitude) = match (incident.address.latitude, incident.address.longitude) {
    (Some(lat), Some(lon)) => (lat, lon),
    _ => {
      tracing::warn!(
        incident_id = %incident.id,
        "incident has no coordinates, skipping weather fetch"
      );
      return Vec::new();
    }
  };

  let start = incident.description.event_opened.with_timezone(&Utc);
  let end = incident.description.event_closed.with_timezone(&Utc);

  match provider.observations(latitude, longitude, start, end).await {
    Ok(observations) => observations,
    Err(e) => {
      tracing::warn!(
        incident_id = %incident.id,
        error = %e,
        "weather fetch failed, continuing without weather data"
      );
      Vec::new()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::{Address, Description};
  use std::sync::atomic::{AtomicUsize, Ordering};

  fn incident(latitude: Option<f64>, longitude: Option<f64>) -> Incident {
    Incident {
      id: "F01705150050".into(),
      description: Description {
        event_opened: "2017-05-15T17:19:12Z".parse().unwrap(),
        event_closed: "2017-05-15T18:46:46Z".parse().unwrap(),
        comments: None,
      },
      address: Address {
        geohash: Some("dq8vtqek".into()),
        latitude,
        longitude,
        address_line1: None,
        city: None,
      },
    }
  }

  fn observation(time: &str, temperature: f64) -> Weather {
    Weather {
      temperature: Some(temperature),
      dew_point: Some(11.5),
      time: time.parse().unwrap(),
    }
  }

  /// Returns a fixed observation list and records the windows it was asked for.
  #[derive(Default)]
  struct RecordingProvider {
    calls: AtomicUsize,
  }

  #[async_trait]
  impl WeatherProvider for RecordingProvider {
    async fn observations(
      &self,
      _latitude: f64,
      _longitude: f64,
      start: DateTime<Utc>,
      end: DateTime<Utc>,
    ) -> Result<Vec<Weather>, WeatherError> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      assert_eq!(start, "2017-05-15T17:19:12Z".parse::<DateTime<Utc>>().unwrap());
      assert_eq!(end, "2017-05-15T18:46:46Z".parse::<DateTime<Utc>>().unwrap());
      // Out of window on purpose; the enricher must not trim.
      Ok(vec![
        observation("2017-05-15T00:00:00Z", 24.1),
        observation("2017-05-15T01:00:00Z", 21.2),
      ])
    }
  }

  struct FailingProvider;

  #[async_trait]
  impl WeatherProvider for FailingProvider {
    async fn observations(
      &self,
      _latitude: f64,
      _longitude: f64,
      _start: DateTime<Utc>,
      _end: DateTime<Utc>,
    ) -> Result<Vec<Weather>, WeatherError> {
      Err(WeatherError::request("connection refused"))
    }
  }

  #[tokio::test]
  async fn window_comes_from_the_incident_and_order_is_preserved() {
    let provider = RecordingProvider::default();
    let observations = observations_for(&provider, &incident(Some(37.541885), Some(-77.440624))).await;
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    assert_eq!(observations.len(), 2);
    assert_eq!(observations[0].temperature, Some(24.1));
    assert_eq!(observations[1].temperature, Some(21.2));
  }

  #[tokio::test]
  async fn provider_failure_degrades_to_empty() {
    let observations = observations_for(&FailingProvider, &incident(Some(37.5), Some(-77.4))).await;
    assert!(observations.is_empty());
  }

  #[tokio::test]
  async fn missing_coordinates_skip_the_provider() {
    let provider = RecordingProvider::default();
    let observations = observations_for(&provider, &incident(None, Some(-77.4))).await;
    assert!(observations.is_empty());
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
  }
}
