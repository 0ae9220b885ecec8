//! Browser geolocation capture for the trip settings form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `capture` holds the platform-independent routine: clear the error sink,
//! ask a `PositionProvider` for the current position, and route the single
//! completion into the coordinate or error sinks. `browser` supplies the
//! `navigator.geolocation` provider and only exists in the `hydrate` build.

pub mod capture;

#[cfg(feature = "hydrate")]
pub mod browser;

pub use capture::{
    CaptureTargets, Coordinates, LocationError, LocationErrorKind, LocationOutcome, OutputSink, PositionProvider,
    RequestOptions, apply_outcome, capture_position,
};
