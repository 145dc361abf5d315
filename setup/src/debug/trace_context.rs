//! Trace ID system for correlating the log lines of one user action
//!
//! Every button press runs under a fresh trace ID. The ID is kept in a
//! thread-local and recorded on a `tracing` span, so all events emitted while
//! the action runs (including those from the router library) carry it.

use std::cell::RefCell;
use uuid::Uuid;

thread_local! {
    static TRACE_ID: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Generate a new trace ID and set it for the current thread
fn new_trace_id() -> String {
    let trace_id = Uuid::new_v4().to_string();
    set_trace_id(Some(trace_id.clone()));
    trace_id
}

/// Set the trace ID for the current thread
fn set_trace_id(id: Option<String>) {
    TRACE_ID.with(|cell| {
        *cell.borrow_mut() = id;
    });
}

/// Get the current trace ID, if one is set
pub fn get_trace_id() -> Option<String> {
    TRACE_ID.with(|cell| cell.borrow().clone())
}

/// Puts the previous trace ID back when dropped, including on unwind.
struct TraceGuard {
    previous: Option<String>,
}

impl Drop for TraceGuard {
    fn drop(&mut self) {
        set_trace_id(self.previous.take());
    }
}

/// Run `f` under a new trace ID and an `activation` span carrying it.
///
/// The previous trace ID (if any) is restored afterwards, even if `f` panics.
pub fn with_trace_id<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = TraceGuard {
        previous: get_trace_id(),
    };
    let trace_id = new_trace_id();

    let span = tracing::info_span!("activation", trace_id = %trace_id);
    let result = span.in_scope(f);

    tracing::debug!(trace_id = %trace_id, "Trace context completed");
    result
}
