//! Notifier trait definition.

/// Receives user-facing notifications about failures the process survived.
///
/// Implementations must be `Send + Sync` so the database can hold one behind
/// an `Arc` and call it from the load pipeline.
pub trait Notifier: Send + Sync {
    /// An operation failed in a way the user needs to know about. The
    /// program keeps running in its last good state.
    fn fatal_error(&self, message: &str);
}
