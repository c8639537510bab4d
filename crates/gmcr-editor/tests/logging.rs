//! Global subscriber installation. Kept to a single test: the subscriber can
//! only be installed once per process.

use std::io;
use std::sync::{Arc, Mutex};

use gmcr_editor::logging::{LogConfig, LogFormat, init_logging_with_writer};
use gmcr_editor::{DmSelector, EditorError, EditorSettings};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

mod common;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn json_logging_captures_list_mutations() {
    let capture = Capture::default();
    let config = LogConfig::from_verbosity(1)
        .with_level(Level::DEBUG)
        .with_format(LogFormat::Json);
    init_logging_with_writer(&config, capture.clone()).unwrap();

    let mut conflict = common::FakeConflict::default();
    let mut selector = DmSelector::new(&EditorSettings::default().labels);
    selector.add(&mut conflict, &mut common::sink());

    let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
    let line = output
        .lines()
        .find(|line| line.contains("added decision maker"))
        .expect("mutation should be logged");
    let record: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(record["level"], "DEBUG");

    let second = init_logging_with_writer(&config, capture);
    assert!(matches!(second, Err(EditorError::Logging(_))));
}
