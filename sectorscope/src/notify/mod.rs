//! End-user notification seam.
//!
//! Document-fatal failures (most importantly a parser that panicked) must be
//! surfaced to the person running the program, not just written to the log.
//! The database talks to a [`Notifier`]; the host application decides how
//! that notification is shown.
//!
//! - [`TracingNotifier`]: logs notifications at error level (default)
//! - [`NoOpNotifier`]: discards notifications, for tests and batch tools
//!
//! ```
//! use sectorscope::notify::{Notifier, NoOpNotifier};
//! use std::sync::Arc;
//!
//! let notifier: Arc<dyn Notifier> = Arc::new(NoOpNotifier);
//! notifier.fatal_error("the sector file could not be parsed");
//! ```

mod noop;
mod tracing_adapter;
mod r#trait;

pub use noop::NoOpNotifier;
pub use r#trait::Notifier;
pub use tracing_adapter::TracingNotifier;
