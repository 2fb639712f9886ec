//! Simulation Systems
//!
//! The drift engine, cross-agent consolidation, the discrete clock,
//! and the templated response surface.

pub mod clock;
pub mod consolidation;
pub mod drift;
pub mod response;

pub use clock::SimulationClock;
pub use consolidation::consolidate;
pub use drift::{restart, step_drift, DriftOutcome};
pub use response::{classify, respond, MessageKind};
