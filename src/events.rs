use std::collections::HashSet;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use log::warn;
use serde::Deserialize;

use crate::error::CatalogError;

const EMBEDDED_CATALOG: &str = include_str!("../assets/events.json");

// `%.f` also matches when there is no fractional part.
const LOCAL_DATE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
}

#[derive(Deserialize)]
struct EventRecord {
    id: u32,
    title: String,
    #[serde(default)]
    description: String,
    date: String,
    #[serde(default)]
    location: String,
}

impl TryFrom<EventRecord> for Event {
    type Error = CatalogError;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        let date = parse_event_date(&record.date).ok_or_else(|| CatalogError::InvalidDate {
            id: record.id,
            date: record.date.clone(),
        })?;
        Ok(Event {
            id: record.id,
            title: record.title,
            description: record.description,
            date,
            location: record.location,
        })
    }
}

/// Read an RFC 3339 timestamp, a bare local date-time, or a date alone.
/// A date alone means midnight UTC, as browsers read it.
pub fn parse_event_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|midnight| Utc.from_utc_datetime(&midnight));
    }
    LOCAL_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|local| local.with_timezone(&Utc))
}

/// Ordered, read-only list of events. Built once at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Parse a JSON array of events. Entries with unreadable dates are
    /// dropped so they can never be selected; a repeated id keeps only its
    /// first entry.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<EventRecord> = serde_json::from_str(json)?;
        let mut seen = HashSet::new();
        let events = records
            .into_iter()
            .filter_map(|record| {
                if !seen.insert(record.id) {
                    warn!("Skipping event: {}", CatalogError::DuplicateId(record.id));
                    return None;
                }
                match Event::try_from(record) {
                    Ok(event) => Some(event),
                    Err(e) => {
                        warn!("Skipping event: {}", e);
                        None
                    }
                }
            })
            .collect();
        Ok(Self { events })
    }

    /// The catalog compiled into the binary. Falls back to empty.
    pub fn embedded() -> Self {
        match Self::from_json(EMBEDDED_CATALOG) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("Event catalog unavailable: {}", e);
                Self::default()
            }
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc3339() {
        let date = parse_event_date("2026-10-15T09:00:00Z").unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2026, 10, 15, 9, 0, 0).unwrap());

        let offset = parse_event_date("2026-10-15T09:00:00+02:00").unwrap();
        assert_eq!(offset, Utc.with_ymd_and_hms(2026, 10, 15, 7, 0, 0).unwrap());

        let millis = parse_event_date("2026-10-15T09:00:00.000Z").unwrap();
        assert_eq!(millis, date);
    }

    #[test]
    fn test_parse_date_only_is_utc_midnight() {
        assert_eq!(
            parse_event_date("2026-10-15"),
            Some(Utc.with_ymd_and_hms(2026, 10, 15, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_event_date("2026-02-30"), None);
    }

    #[test]
    fn test_parse_local_date() {
        let naive =
            NaiveDateTime::parse_from_str("2026-10-20T14:00:00", "%Y-%m-%dT%H:%M:%S").unwrap();
        let expected = Local
            .from_local_datetime(&naive)
            .earliest()
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(parse_event_date("2026-10-20T14:00:00"), Some(expected));
        assert_eq!(parse_event_date("2026-10-20T14:00"), Some(expected));
        assert_eq!(parse_event_date("2026-10-20T14:00:00.000"), Some(expected));
        assert_eq!(
            parse_event_date("2026-10-20T14:00:00.250"),
            Some(expected + chrono::Duration::milliseconds(250))
        );
    }

    #[test]
    fn test_parse_garbage_date() {
        assert_eq!(parse_event_date("next tuesday"), None);
        assert_eq!(parse_event_date(""), None);
        assert_eq!(parse_event_date("2026-13-40T25:00:00"), None);
    }

    #[test]
    fn test_from_json_skips_bad_dates() {
        let json = r#"[
            {"id": 1, "title": "Sports Day", "description": "", "date": "2026-10-15T09:00:00Z", "location": "Grounds"},
            {"id": 2, "title": "Broken", "description": "", "date": "soon", "location": "Hall"},
            {"id": 3, "title": "Art Exhibition", "date": "2026-10-20T14:00:00Z"}
        ]"#;
        let catalog = EventCatalog::from_json(json).unwrap();
        let ids: Vec<u32> = catalog.events().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(catalog.events()[1].location, "");
    }

    #[test]
    fn test_from_json_keeps_first_of_repeated_id() {
        let json = r#"[
            {"id": 4, "title": "Concert", "date": "2026-11-01T18:00:00Z"},
            {"id": 4, "title": "Concert (copy)", "date": "2026-11-02T18:00:00Z"},
            {"id": 5, "title": "Open Day", "date": "2026-11-03"}
        ]"#;
        let catalog = EventCatalog::from_json(json).unwrap();
        let titles: Vec<&str> = catalog.events().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Concert", "Open Day"]);
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(matches!(
            EventCatalog::from_json("{\"id\": 1}"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = EventCatalog::embedded();
        assert_eq!(catalog.events().len(), 2);
        assert_eq!(catalog.events()[0].title, "🏆 Annual Sports Day");
        assert_eq!(catalog.events()[1].location, "Main Hall");
    }
}
