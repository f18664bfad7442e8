//! Meteostat historical-weather client.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use incident_core::{Weather, WeatherError, WeatherProvider};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Client for the Meteostat point-hourly endpoint. Requests are keyed by
/// coordinates plus UTC calendar dates; the credential travels in an
/// `x-api-key` header. The provider returns whole days of hourly data, so
/// observations outside the requested window are expected and passed through.
#[derive(Debug, Clone)]
pub struct MeteostatClient {
  base_url: String,
  api_key: String,
  http: Client,
}

impl MeteostatClient {
  pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into(),
      api_key: api_key.into(),
      http: Client::new(),
    }
  }
}

#[async_trait]
impl WeatherProvider for MeteostatClient {
  async fn observations(
    &self,
    latitude: f64,
    longitude: f64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
  ) -> Result<Vec<Weather>, WeatherError> {
    let res = self
      .http
      .get(&self.base_url)
      .header("x-api-key", &self.api_key)
      .query(&[
        ("lat", latitude.to_string()),
        ("lon", longitude.to_string()),
        ("start", start.format(DATE_FORMAT).to_string()),
        ("end", end.format(DATE_FORMAT).to_string()),
      ])
      .send()
      .await
      .map_err(|e| WeatherError::request(e.to_string()))?;

    let status = res.status();
    if !status.is_success() {
      return Err(WeatherError::Status(status.as_u16()));
    }

    let body = res
      .text()
      .await
      .map_err(|e| WeatherError::request(e.to_string()))?;
    let parsed: MeteostatResponse =
      serde_json::from_str(&body).map_err(|e| WeatherError::malformed(e.to_string()))?;

    parsed
      .data
      .into_iter()
      .map(Observation::into_weather)
      .collect()
  }
}

// Wire shapes; unknown fields ignored.

#[derive(Debug, Deserialize)]
struct MeteostatResponse {
  data: Vec<Observation>,
}

#[derive(Debug, Deserialize)]
struct Observation {
  #[serde(default)]
  temp: Option<f64>,
  #[serde(default)]
  dwpt: Option<f64>,
  time: String,
}

impl Observation {
  /// Observation times come as naive "YYYY-MM-DD HH:MM:SS" strings in UTC.
  fn into_weather(self) -> Result<Weather, WeatherError> {
    let time = NaiveDateTime::parse_from_str(&self.time, TIME_FORMAT)
      .map_err(|e| WeatherError::malformed(format!("time {:?}: {}", self.time, e)))?
      .and_utc();
    Ok(Weather {
      temperature: self.temp,
      dew_point: self.dwpt,
      time,
    })
  }
}
