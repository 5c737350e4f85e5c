//! Events to CSV text

use std::io::Write;

use crate::types::EventMap;

use super::{RecordResult, FILE_HEADER};

/// Write events as CSV rows, preceded by the header row
///
/// Metrics are written in name order; events keep their order within a
/// metric. The output reads back through `parse_records` and the extractor
/// into the same map, minus metrics with no events.
pub fn write_events<W: Write>(sink: W, events: &EventMap) -> RecordResult<()> {
    let mut writer = csv::Writer::from_writer(sink);

    writer.write_record(FILE_HEADER.split(','))?;

    for (metric, metric_events) in events {
        for event in metric_events {
            let start = event.start.to_string();
            let end = event.end.to_string();
            writer.write_record([
                metric.as_str(),
                event.event_type.as_str(),
                start.as_str(),
                end.as_str(),
                event.value.as_str(),
                event.opt.as_str(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}
