//! Silent notifier.

use super::Notifier;

/// A notifier that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpNotifier;

impl Notifier for NoOpNotifier {
    #[inline]
    fn fatal_error(&self, _message: &str) {}
}
