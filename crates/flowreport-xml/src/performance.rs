//! Performance metrics encoder.

use std::io::Write;

use flowreport_core::PerformanceData;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Writer;

use crate::constants::{attributes, tags};
use crate::error::SerializeResult;

/// Writes one `PerformanceEntry` per measured metric, in catalogue order.
/// Metrics at or below zero are skipped. Returns the number of entries.
pub fn write_performance_entries<W: Write>(
    writer: &mut Writer<W>,
    performance_data: &PerformanceData,
) -> SerializeResult<usize> {
    let mut written = 0;
    for (metric, value) in performance_data.measured() {
        let mut entry = BytesStart::new(tags::PERFORMANCE_ENTRY);
        entry.push_attribute((attributes::NAME, metric.token()));
        entry.push_attribute((attributes::VALUE, value.to_string().as_str()));
        writer.write_event(Event::Empty(entry))?;
        written += 1;
    }
    Ok(written)
}
