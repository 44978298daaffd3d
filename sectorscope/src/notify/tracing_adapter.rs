//! Notifier that writes to the `tracing` log.

use super::Notifier;

/// Logs notifications at error level.
///
/// Suitable for headless use, where the log is the only place a user will
/// look.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn fatal_error(&self, message: &str) {
        tracing::error!(target: "sectorscope::notify", "{}", message);
    }
}
