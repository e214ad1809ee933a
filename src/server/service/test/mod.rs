use std::{
    io,
    sync::{Arc, Mutex},
};

use tracing::subscriber::DefaultGuard;

use crate::server::service::mail::MailService;


/// Mail service that keeps every sent message for later inspection.
#[derive(Default)]
pub struct RecordingMailService {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingMailService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

impl MailService for RecordingMailService {
    fn send(&self, subject: &str, message: &str) {
        self.sent
            .lock()
            .unwrap()
            .push((subject.to_string(), message.to_string()));
    }
}

/// Formatted tracing output captured for assertions.
#[derive(Clone, Default)]
pub struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes `info` and above on the current thread into this buffer until the
    /// returned guard is dropped.
    pub fn install(&self) -> DefaultGuard {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();

        tracing::subscriber::set_default(subscriber)
    }

    /// Counts captured lines containing `needle`.
    pub fn lines_containing(&self, needle: &str) -> usize {
        let buffer = self.buffer.lock().unwrap();

        String::from_utf8_lossy(&buffer)
            .lines()
            .filter(|line| line.contains(needle))
            .count()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
