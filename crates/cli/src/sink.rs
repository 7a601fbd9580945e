//! Terminal rendition of the success banner.

use intake_controller::{NotificationSink, STATUS_SUCCESS};

use crate::output::OutputFormat;

/// Prints the banner once when shown. In JSON mode it goes to stderr so
/// stdout stays machine-readable.
pub struct TerminalSink {
    format: OutputFormat,
}

impl TerminalSink {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl NotificationSink for TerminalSink {
    fn show(&self) {
        match self.format {
            OutputFormat::Table => println!("{STATUS_SUCCESS}"),
            OutputFormat::Json => eprintln!("{STATUS_SUCCESS}"),
        }
    }

    fn hide(&self) {
        tracing::debug!("Success banner dismissed");
    }
}
