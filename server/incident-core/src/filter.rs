//! Interval-overlap + geohash-prefix filter predicate.

use chrono::{DateTime, Utc};

use crate::types::{Incident, IncidentFilter};

/// Whether an incident matches the filter.
///
/// The incident's `[event_opened, event_closed]` window must overlap the
/// requested `[start, end]` window, inclusive on both sides; a missing bound
/// is unbounded. When geohash prefixes are supplied, the incident geohash
/// must start with at least one of them (case-sensitive byte prefix).
///
/// An empty prefix list matches everything, and so does an explicitly
/// supplied empty-string prefix (every geohash starts with ""). An incident
/// without a geohash is treated as having the empty geohash.
pub fn matches(incident: &Incident, filter: &IncidentFilter) -> bool {
  let start = filter.start.unwrap_or(DateTime::<Utc>::MIN_UTC);
  let end = filter.end.unwrap_or(DateTime::<Utc>::MAX_UTC);

  let opened = incident.description.event_opened.with_timezone(&Utc);
  let closed = incident.description.event_closed.with_timezone(&Utc);
  let in_window = closed >= start && opened <= end;

  let geohash = incident.address.geohash.as_deref().unwrap_or("");
  let in_area = filter.geohash_prefixes.is_empty()
    || filter
      .geohash_prefixes
      .iter()
      .any(|prefix| geohash.starts_with(prefix.as_str()));

  in_window && in_area
}
