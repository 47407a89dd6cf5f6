use log::*;

/// Fire-and-forget destination for decision rationales.
pub trait EventSink {
    fn emit(&mut self, message: &str);
}

/// Writes every message to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&mut self, message: &str) {
        info!("{}", message);
    }
}
