//! Document lifecycle events are visible at info level.

mod common;

use std::sync::{Arc, Mutex};

use common::*;
use flowreport_core::AnalysisResult;
use flowreport_xml::ResultsSerializer;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn start_and_finish_logged_at_info() {
    let captured = Captured::default();
    let sink = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(move || sink.clone())
        .finish();

    let mut result = AnalysisResult::new();
    result.add_result(plain_sink("s1"), plain_source("s0"));
    tracing::subscriber::with_default(subscriber, || {
        ResultsSerializer::new(compact_config())
            .serialize_to_string(&result)
            .unwrap();
    });

    let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(logs.contains("serializing data flow results"), "{logs}");
    assert!(logs.contains("finished data flow results document"), "{logs}");
    assert!(!logs.contains("writing result"), "per-sink events stay at debug");
}
