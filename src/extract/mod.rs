//! Event Extractor
//!
//! Turns parsed CSV rows into events grouped by metric name.
//!
//! Per-row problems never stop extraction: the offending row is skipped and
//! its error collected, so callers always get whatever could be extracted
//! together with the list of rows that could not.
//!
//! Rows are handled as follows:
//! - empty rows and the header row are skipped silently
//! - rows for metrics outside the allow-list (when one is set) are ignored
//! - everything else must be `metric,type,start,end,value,opt`

mod config;
mod error;

use std::io::Read;

use tracing::{debug, trace};

use crate::records::{parse_records, read_records, Record, RECORD_FIELDS};
use crate::types::{Event, EventMap};

pub use config::ExtractConfig;
pub use error::{ExtractError, ExtractResult, RecordError, RecordErrorKind};

/// Output of an extraction: partial results plus per-row errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Events by metric, in source row order
    pub events: EventMap,
    /// Skipped rows, in source row order
    pub errors: Vec<RecordError>,
}

impl Extraction {
    /// True when no row was rejected
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Events for one metric, if it is present in the map
    pub fn metric(&self, name: &str) -> Option<&[Event]> {
        self.events.get(name).map(Vec::as_slice)
    }

    /// Human-readable error messages, one per rejected row
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Total number of extracted events across all metrics
    pub fn event_count(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    /// Split into the event map and the error list
    pub fn into_parts(self) -> (EventMap, Vec<RecordError>) {
        (self.events, self.errors)
    }
}

/// Stateless event extractor
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractConfig,
}

impl Extractor {
    /// Create an extractor with default config
    pub fn new() -> Self {
        Self::with_config(ExtractConfig::default())
    }

    /// Create an extractor with custom config
    pub fn with_config(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Extract events from already-parsed rows
    pub fn extract(&self, rows: &[Record]) -> Extraction {
        let requested = self.config.metrics.as_deref();
        let mut events = EventMap::new();

        // Requested metrics are present even when no row matches.
        for metric in requested.unwrap_or_default() {
            events.insert(metric.clone(), Vec::new());
        }

        let mut errors = Vec::new();
        for (row, fields) in rows.iter().enumerate() {
            if fields.is_empty() || self.is_header(fields) {
                trace!(row, "skipping header or empty record");
                continue;
            }

            let metric = &fields[0];
            if requested.is_some() && !events.contains_key(metric) {
                continue;
            }

            match event_from_record(fields) {
                Ok(event) => events.entry(metric.clone()).or_default().push(event),
                Err(kind) => {
                    debug!(row, error = %kind, "skipping malformed record");
                    errors.push(RecordError::new(row, kind));
                }
            }
        }

        let extraction = Extraction { events, errors };
        debug!(
            rows = rows.len(),
            metrics = extraction.events.len(),
            events = extraction.event_count(),
            errors = extraction.errors.len(),
            "extracted events"
        );
        extraction
    }

    /// Parse CSV text and extract events from its rows
    ///
    /// Fails only when the text cannot be parsed at all.
    pub fn extract_csv(&self, input: &str) -> ExtractResult<Extraction> {
        let rows = parse_records(input)?;
        Ok(self.extract(&rows))
    }

    /// Read CSV from any source and extract events from its rows
    pub fn extract_reader<R: Read>(&self, source: R) -> ExtractResult<Extraction> {
        let rows = read_records(source)?;
        Ok(self.extract(&rows))
    }

    fn is_header(&self, fields: &[String]) -> bool {
        fields.join(",") == self.config.header
    }
}

/// Extract events from parsed rows
///
/// With `metrics` set, only those metrics are extracted and each of them is a
/// key of the result even without matching rows. With `None`, every metric
/// in the data is extracted.
pub fn extract_events(rows: &[Record], metrics: Option<&[&str]>) -> Extraction {
    Extractor::with_config(ExtractConfig::from_metric_filter(metrics)).extract(rows)
}

/// Extract events from CSV text
pub fn extract_events_from_csv(
    input: &str,
    metrics: Option<&[&str]>,
) -> ExtractResult<Extraction> {
    Extractor::with_config(ExtractConfig::from_metric_filter(metrics)).extract_csv(input)
}

/// Convert one record into an event
///
/// Expects exactly `metric,type,start,end,value,opt`; the metric name is not
/// part of the event.
pub fn event_from_record(fields: &[String]) -> Result<Event, RecordErrorKind> {
    if fields.len() != RECORD_FIELDS {
        return Err(RecordErrorKind::FieldCount {
            fields: fields.to_vec(),
            len: fields.len(),
        });
    }

    let start = parse_time("start", &fields[2])?;
    let end = parse_time("end", &fields[3])?;

    Ok(Event::new(
        fields[1].as_str(),
        start,
        end,
        fields[4].as_str(),
        fields[5].as_str(),
    ))
}

fn parse_time(field: &'static str, value: &str) -> Result<i64, RecordErrorKind> {
    value
        .parse::<i64>()
        .map_err(|source| RecordErrorKind::InvalidTime {
            field,
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::FILE_HEADER;

    fn row(fields: &[&str]) -> Record {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_event_from_record_maps_fields_positionally() {
        let fields = row(&["screen", "on", "100", "200", "bright", "x"]);
        let event = event_from_record(&fields).unwrap();
        assert_eq!(event, Event::new("on", 100, 200, "bright", "x"));
        assert!(event.app_name.is_empty());
    }

    #[test]
    fn test_event_from_record_accepts_signed_times() {
        let event = event_from_record(&row(&["m", "t", "-5", "+7", "", ""])).unwrap();
        assert_eq!(event.start, -5);
        assert_eq!(event.end, 7);
    }

    #[test]
    fn test_event_from_record_rejects_wrong_arity() {
        for len in [1usize, 5, 7] {
            let fields: Record = (0..len).map(|i| i.to_string()).collect();
            match event_from_record(&fields) {
                Err(RecordErrorKind::FieldCount { len: got, .. }) => assert_eq!(got, len),
                other => panic!("expected field count error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_event_from_record_rejects_bad_times() {
        let err = event_from_record(&row(&["m", "t", "1.5", "2", "", ""])).unwrap_err();
        assert!(matches!(err, RecordErrorKind::InvalidTime { field: "start", .. }));

        let err = event_from_record(&row(&["m", "t", "1", " 2", "", ""])).unwrap_err();
        assert!(matches!(err, RecordErrorKind::InvalidTime { field: "end", .. }));

        let err = event_from_record(&row(&["m", "t", "1", "99999999999999999999", "", ""]))
            .unwrap_err();
        assert!(matches!(err, RecordErrorKind::InvalidTime { field: "end", .. }));
    }

    #[test]
    fn test_extract_all_metrics_preserves_row_order() {
        let rows = vec![
            row(&["screen", "on", "100", "200", "", ""]),
            row(&["wakelock", "held", "120", "180", "mail", ""]),
            row(&["screen", "on", "150", "300", "", ""]),
        ];

        let extraction = extract_events(&rows, None);
        assert!(extraction.is_clean());
        assert_eq!(extraction.events.len(), 2);

        let screen = extraction.metric("screen").unwrap();
        assert_eq!(screen.len(), 2);
        assert_eq!(screen[0].start, 100);
        assert_eq!(screen[1].start, 150);
    }

    #[test]
    fn test_extract_prepopulates_requested_metrics() {
        let rows = vec![row(&["foo", "t", "1", "2", "", ""])];

        let extraction = extract_events(&rows, Some(&["foo", "bar"]));
        assert_eq!(extraction.events.len(), 2);
        assert_eq!(extraction.metric("foo").unwrap().len(), 1);
        assert_eq!(extraction.metric("bar"), Some(&[][..]));
    }

    #[test]
    fn test_extract_ignores_unrequested_metrics() {
        let rows = vec![
            row(&["foo", "t", "1", "2", "", ""]),
            row(&["baz", "t", "1", "2", "", ""]),
            row(&["baz", "malformed"]),
        ];

        let extraction = extract_events(&rows, Some(&["foo"]));
        assert!(extraction.is_clean());
        assert!(extraction.metric("baz").is_none());
    }

    #[test]
    fn test_extract_skips_header_and_empty_rows() {
        let header: Record = FILE_HEADER.split(',').map(str::to_string).collect();
        let rows = vec![
            header.clone(),
            Vec::new(),
            row(&["screen", "on", "1", "2", "", ""]),
            header,
        ];

        let extraction = extract_events(&rows, None);
        assert!(extraction.is_clean());
        assert_eq!(extraction.events.len(), 1);
        assert!(extraction.metric("metric").is_none());

        let filtered = extract_events(&rows, Some(&["metric"]));
        assert!(filtered.is_clean());
        assert_eq!(filtered.metric("metric"), Some(&[][..]));
    }

    #[test]
    fn test_extract_collects_errors_and_continues() {
        let rows = vec![
            row(&["screen", "on", "1", "2", "", ""]),
            row(&["screen", "on", "x", "2", "", ""]),
            row(&["screen", "on", "3"]),
            row(&["screen", "off", "4", "5", "", ""]),
        ];

        let extraction = extract_events(&rows, None);
        assert_eq!(extraction.metric("screen").unwrap().len(), 2);
        assert_eq!(extraction.errors.len(), 2);
        assert_eq!(extraction.errors[0].row, 1);
        assert_eq!(extraction.errors[1].row, 2);

        let messages = extraction.error_messages();
        assert!(messages[0].starts_with("record 1: "));
        assert!(messages[1].contains("len was 3"));
    }

    #[test]
    fn test_failed_row_does_not_create_metric_key() {
        let rows = vec![row(&["broken", "t", "a", "b", "", ""])];
        let extraction = extract_events(&rows, None);
        assert!(extraction.events.is_empty());
        assert_eq!(extraction.errors.len(), 1);
    }

    #[test]
    fn test_custom_header() {
        let config = ExtractConfig::new().with_header("desc,type,start,end,value,opt");
        let rows = vec![
            row(&["desc", "type", "start", "end", "value", "opt"]),
            row(&["screen", "on", "1", "2", "", ""]),
        ];

        let extraction = Extractor::with_config(config).extract(&rows);
        assert!(extraction.is_clean());
        assert_eq!(extraction.event_count(), 1);
    }

    #[test]
    fn test_extract_from_csv_text() {
        let input = format!(
            "{}\nscreen,on,100,200,,\nscreen,on,150,300,,\n",
            FILE_HEADER
        );

        let extraction = extract_events_from_csv(&input, None).unwrap();
        assert!(extraction.is_clean());
        assert_eq!(extraction.metric("screen").unwrap().len(), 2);
    }

    #[test]
    fn test_extract_from_unreadable_source_fails() {
        struct BrokenSource;

        impl Read for BrokenSource {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk gone"))
            }
        }

        let result = Extractor::new().extract_reader(BrokenSource);
        assert!(matches!(result, Err(ExtractError::Parse(_))));
    }

    #[test]
    fn test_extract_non_utf8_value_keeps_other_rows() {
        let bytes: &[u8] = b"screen,on,1,2,,\nwakelock,held,3,4,caf\xe9,\nscreen,on,5,6,,\n";
        let extraction = Extractor::new().extract_reader(bytes).unwrap();

        assert!(extraction.is_clean());
        let screen = extraction.metric("screen").unwrap();
        let starts: Vec<i64> = screen.iter().map(|e| e.start).collect();
        assert_eq!(starts, vec![1, 5]);
        assert_eq!(extraction.metric("wakelock").unwrap()[0].value, "caf\u{fffd}");
    }

    #[test]
    fn test_extract_from_empty_csv_is_not_a_failure() {
        let extraction = extract_events_from_csv("", Some(&["screen"])).unwrap();
        assert!(extraction.is_clean());
        assert_eq!(extraction.metric("screen"), Some(&[][..]));
    }
}
