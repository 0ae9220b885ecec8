//! Request the current position and reflect it into form sinks.
//!
//! DESIGN
//! ======
//! The platform's success/error callback pair is folded into one
//! `LocationOutcome` handled by `apply_outcome`. Output targets are passed in
//! as `OutputSink`s instead of being looked up by element id, so the whole
//! flow runs in native tests against recording sinks and scripted providers.
//!
//! ORDERING
//! ========
//! The error sink is cleared synchronously before the request is issued, so
//! a stale message disappears even while the request is still pending.

#[cfg(test)]
#[path = "capture_test.rs"]
mod capture_test;

use leptos::prelude::*;

/// Platform code for a request the user (or browser policy) refused.
pub const PERMISSION_DENIED: u16 = 1;
/// Platform code for a request no location source could satisfy.
pub const POSITION_UNAVAILABLE: u16 = 2;
/// Platform code for a request that hit the platform's internal timeout.
pub const TIMEOUT: u16 = 3;

/// A geographic position as reported by the platform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

/// Failed position request. `Display` is the exact text shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{code} | {message}")]
pub struct LocationError {
    pub code: u16,
    pub message: String,
}

impl LocationError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn kind(&self) -> LocationErrorKind {
        match self.code {
            PERMISSION_DENIED => LocationErrorKind::PermissionDenied,
            POSITION_UNAVAILABLE => LocationErrorKind::PositionUnavailable,
            TIMEOUT => LocationErrorKind::Timeout,
            _ => LocationErrorKind::Unknown,
        }
    }
}

/// Platform-defined failure causes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationErrorKind {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Unknown,
}

/// Single completion of a position request.
pub type LocationOutcome = Result<Coordinates, LocationError>;

/// Options forwarded to the platform with each request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestOptions {
    pub enable_high_accuracy: bool,
}

/// Options used by `capture_position`: precision over latency and power.
pub const CAPTURE_OPTIONS: RequestOptions = RequestOptions { enable_high_accuracy: true };

/// Source of the current position.
///
/// Implementations must call `on_complete` at most once. No caller-side
/// timeout or cancellation exists; platform timeouts arrive as errors.
pub trait PositionProvider {
    fn current_position(&self, options: RequestOptions, on_complete: Box<dyn FnOnce(LocationOutcome)>);
}

/// Destination for one piece of captured text (an input value or a message).
pub trait OutputSink {
    fn write(&self, text: &str);
}

impl OutputSink for RwSignal<String> {
    fn write(&self, text: &str) {
        self.set(text.to_owned());
    }
}

/// The three outputs a capture writes to.
#[derive(Clone, Debug)]
pub struct CaptureTargets<S> {
    pub longitude: S,
    pub latitude: S,
    pub error: S,
}

/// Clear the error sink, then request the position and apply the outcome
/// whenever the provider completes.
pub fn capture_position<P, S>(provider: &P, targets: CaptureTargets<S>)
where
    P: PositionProvider + ?Sized,
    S: OutputSink + 'static,
{
    targets.error.write("");
    provider.current_position(CAPTURE_OPTIONS, Box::new(move |outcome| apply_outcome(outcome, &targets)));
}

/// Write a completed request into its sinks.
///
/// Success touches only the coordinate sinks; failure touches only the
/// error sink.
pub fn apply_outcome<S: OutputSink>(outcome: LocationOutcome, targets: &CaptureTargets<S>) {
    match outcome {
        Ok(coords) => {
            targets.longitude.write(&coords.longitude.to_string());
            targets.latitude.write(&coords.latitude.to_string());
        }
        Err(err) => targets.error.write(&err.to_string()),
    }
}
