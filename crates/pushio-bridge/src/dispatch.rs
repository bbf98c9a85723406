//! The native dispatch boundary
//!
//! A single trait, [`NativeDispatch`], is the only crossing point between
//! the facade and the native layer: an operation name, an ordered JSON
//! argument list, and a completion handler. The host (Cordova webview,
//! test harness, desktop stub) supplies the implementation; the bridge
//! treats it as opaque and never blocks on it.

use crate::errors::DispatchFailure;
use serde_json::Value;

/// Result carried to a completion handler: the native success payload, or
/// the native failure reason passed through verbatim.
pub type DispatchResult = Result<Value, DispatchFailure>;

/// Optional completion handler for one bridge call.
///
/// Calls are single-shot: the handler fires at most once, with whatever the
/// native layer produced. Callers that do not care about the outcome pass
/// `()`, which converts into a no-op handler, so forwarding never fails for
/// lack of a callback.
pub struct Completion(Option<Box<dyn FnOnce(DispatchResult) + Send + 'static>>);

impl Completion {
    /// Wrap a handler to be invoked with the dispatch outcome
    pub fn new(handler: impl FnOnce(DispatchResult) + Send + 'static) -> Self {
        Completion(Some(Box::new(handler)))
    }

    /// A completion that discards the outcome
    pub fn none() -> Self {
        Completion(None)
    }

    /// Deliver the outcome, consuming the handler
    pub fn complete(self, result: DispatchResult) {
        if let Some(handler) = self.0 {
            handler(result);
        }
    }
}

impl Default for Completion {
    fn default() -> Self {
        Completion::none()
    }
}

impl From<()> for Completion {
    fn from(_: ()) -> Self {
        Completion::none()
    }
}

/// Host-provided primitive dispatching one operation into the native layer.
///
/// Implementations are expected to return promptly; delivery of the result
/// through `completion` may happen later, on any thread. The bridge retains
/// no pending-call state and imposes no ordering between concurrent calls.
pub trait NativeDispatch: Send + Sync {
    /// Dispatch `operation` with `args` in declared order.
    fn dispatch(&self, operation: &str, args: Vec<Value>, completion: Completion);
}

/// Dispatch stub for hosts without a native runtime (desktop, CI).
///
/// Logs the call and completes immediately with `Null`.
pub struct StubDispatch;

impl NativeDispatch for StubDispatch {
    fn dispatch(&self, operation: &str, args: Vec<Value>, completion: Completion) {
        tracing::debug!(operation, argc = args.len(), "stub dispatch");
        completion.complete(Ok(Value::Null));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_completion_delivers_once() {
        let fired = Arc::new(AtomicBool::new(false));
        let fired_clone = Arc::clone(&fired);

        let completion = Completion::new(move |result| {
            assert_eq!(result, Ok(Value::from("payload")));
            fired_clone.store(true, Ordering::SeqCst);
        });
        completion.complete(Ok(Value::from("payload")));

        assert!(fired.load(Ordering::SeqCst));
    }

    #[test]
    fn test_unit_converts_to_noop() {
        let completion: Completion = ().into();
        // Completing a no-op handler must not panic or error
        completion.complete(Err(DispatchFailure::RuntimeUnavailable(
            "no runtime".to_string(),
        )));
    }

    #[test]
    fn test_stub_completes_with_null() {
        let fired = Arc::new(AtomicBool::new(false));
        let fired_clone = Arc::clone(&fired);

        StubDispatch.dispatch(
            "getDeviceID",
            Vec::new(),
            Completion::new(move |result| {
                assert_eq!(result, Ok(Value::Null));
                fired_clone.store(true, Ordering::SeqCst);
            }),
        );

        assert!(fired.load(Ordering::SeqCst));
    }
}
