//! Panic capture for failure-contained work.
//!
//! The sector file parser is third-party code fed with user-supplied input,
//! so a panic inside it must not take the process down. This module provides:
//!
//! - a process-wide panic hook ([`init`]) that records where the panic
//!   happened and a backtrace, per thread, then chains to the previous hook
//! - [`catch`], which runs a closure under `catch_unwind` and turns a panic
//!   into a [`PanicReport`]
//!
//! Without the hook installed, reports still carry the panic message but no
//! location or backtrace.

use std::any::Any;
use std::backtrace::Backtrace;
use std::cell::RefCell;
use std::fmt;
use std::panic::{self, AssertUnwindSafe, PanicHookInfo};
use std::sync::Once;

static INSTALL_HOOK: Once = Once::new();

thread_local! {
    /// Most recent panic observed on this thread by the hook.
    static LAST_PANIC: RefCell<Option<PanicReport>> = const { RefCell::new(None) };
}

/// What is known about a caught panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanicReport {
    /// The panic payload rendered as text.
    pub message: String,
    /// `file:line:column` of the panic, when the hook saw it.
    pub location: Option<String>,
    /// Backtrace captured at the panic site, when the hook saw it.
    pub backtrace: Option<String>,
}

impl PanicReport {
    /// Build a report from a bare panic payload.
    pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
        Self {
            message: payload_message(payload),
            location: None,
            backtrace: None,
        }
    }
}

impl fmt::Display for PanicReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{} at {}", self.message, location),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Install the recording panic hook.
///
/// Safe to call more than once; only the first call installs the hook. The
/// previously installed hook still runs after the panic is recorded.
pub fn init() {
    INSTALL_HOOK.call_once(|| {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info: &PanicHookInfo<'_>| {
            record_panic(info);
            original_hook(info);
        }));
    });
}

/// Run `f`, converting a panic into a [`PanicReport`].
///
/// The closure is treated as unwind safe; callers must not reuse state
/// that `f` may have left half-updated.
pub fn catch<F, R>(f: F) -> Result<R, PanicReport>
where
    F: FnOnce() -> R,
{
    clear_last_report();
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => {
            Err(take_last_report().unwrap_or_else(|| PanicReport::from_payload(payload.as_ref())))
        }
    }
}

/// Take the last panic recorded on the current thread, if any.
pub fn take_last_report() -> Option<PanicReport> {
    LAST_PANIC
        .try_with(|slot| slot.borrow_mut().take())
        .ok()
        .flatten()
}

/// Render a panic payload as text.
pub fn payload_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

fn clear_last_report() {
    let _ = LAST_PANIC.try_with(|slot| slot.borrow_mut().take());
}

fn record_panic(info: &PanicHookInfo<'_>) {
    let report = PanicReport {
        message: payload_message(info.payload()),
        location: info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column())),
        backtrace: Some(Backtrace::force_capture().to_string()),
    };
    let _ = LAST_PANIC.try_with(|slot| {
        if let Ok(mut guard) = slot.try_borrow_mut() {
            *guard = Some(report);
        }
    });
}
