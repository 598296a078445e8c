//! One-shot device position lookup.
//!
//! Results stay local to the view that asked; nothing here touches the
//! cities state.

mod tracker;

pub use tracker::{GeolocationError, GeolocationState, GeolocationTracker, PositionSensor};
