//! JSON-file incident repository: one `<id>.json` per incident.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use incident_core::{Incident, IncidentRecord, IncidentRepository, RepositoryError};

/// Reads incidents from a directory of JSON files. The file stem is the
/// incident id; the record body never contains it. Every scan rereads and
/// reparses each file; a lookup reads exactly one.
pub struct JsonFileRepository {
  dir: PathBuf,
}

impl JsonFileRepository {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  fn parse(id: &str, contents: &str) -> Result<Incident, RepositoryError> {
    let record: IncidentRecord = serde_json::from_str(contents)
      .map_err(|e| RepositoryError::malformed(id, e.to_string()))?;
    Ok(record.with_id(id))
  }
}

#[async_trait]
impl IncidentRepository for JsonFileRepository {
  async fn find_all(&self) -> Result<Vec<Incident>, RepositoryError> {
    let mut paths: Vec<PathBuf> = Vec::new();
    let mut entries = tokio::fs::read_dir(&self.dir).await?;
    while let Some(entry) = entries.next_entry().await? {
      let path = entry.path();
      if path.extension().and_then(|e| e.to_str()) == Some("json") {
        paths.push(path);
      }
    }
    // Directory iteration order is platform-dependent; sort for a stable scan.
    paths.sort();

    let mut incidents = Vec::with_capacity(paths.len());
    for path in paths {
      let id = file_stem(&path);
      let contents = tokio::fs::read_to_string(&path).await?;
      incidents.push(Self::parse(&id, &contents)?);
    }
    Ok(incidents)
  }

  async fn find_by_id(&self, id: &str) -> Result<Option<Incident>, RepositoryError> {
    // Ids come straight from the URL path; keep lookups inside the data dir.
    if id.contains(['/', '\\']) || id == ".." {
      return Ok(None);
    }

    let path = self.dir.join(format!("{id}.json"));
    let contents = match tokio::fs::read_to_string(&path).await {
      Ok(contents) => contents,
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
      Err(e) => return Err(e.into()),
    };
    Ok(Some(Self::parse(id, &contents)?))
  }
}

fn file_stem(path: &Path) -> String {
  path
    .file_stem()
    .and_then(|s| s.to_str())
    .unwrap_or_default()
    .to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  const RECORD: &str = r#"{
    "description": {
      "event_opened": "2017-05-15T17:19:12Z",
      "event_closed": "2017-05-15T18:46:46Z"
    },
    "address": {
      "geohash": "dq8vtqek",
      "latitude": 37.541885,
      "longitude": -77.440624
    }
  }"#;

  fn data_dir(files: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, contents) in files {
      std::fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
  }

  #[tokio::test]
  async fn find_all_derives_ids_from_file_stems_in_sorted_order() {
    let dir = data_dir(&[
      ("F02.json", RECORD),
      ("F01.json", RECORD),
      ("notes.txt", "not an incident"),
    ]);
    let repo = JsonFileRepository::new(dir.path());

    let incidents = repo.find_all().await.unwrap();
    let ids: Vec<&str> = incidents.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["F01", "F02"]);
  }

  #[tokio::test]
  async fn find_by_id_reads_one_file_and_misses_cleanly() {
    let dir = data_dir(&[("F01.json", RECORD)]);
    let repo = JsonFileRepository::new(dir.path());

    let found = repo.find_by_id("F01").await.unwrap().unwrap();
    assert_eq!(found.id, "F01");
    assert_eq!(found.address.geohash.as_deref(), Some("dq8vtqek"));

    assert!(repo.find_by_id("F99").await.unwrap().is_none());
  }

  #[tokio::test]
  async fn path_like_ids_do_not_escape_the_data_dir() {
    let dir = data_dir(&[("F01.json", RECORD)]);
    let repo = JsonFileRepository::new(dir.path().join("incidents"));
    std::fs::create_dir(dir.path().join("incidents")).unwrap();

    assert!(repo.find_by_id("../F01").await.unwrap().is_none());
    assert!(repo.find_by_id("..").await.unwrap().is_none());
  }

  #[tokio::test]
  async fn malformed_record_is_a_repository_error() {
    let dir = data_dir(&[("F01.json", "{ not json")]);
    let repo = JsonFileRepository::new(dir.path());

    let err = repo.find_all().await.unwrap_err();
    assert!(err.to_string().contains("F01"));
  }

  #[tokio::test]
  async fn missing_directory_is_a_repository_error() {
    let repo = JsonFileRepository::new("/nonexistent/incidents");
    assert!(repo.find_all().await.is_err());
  }
}
