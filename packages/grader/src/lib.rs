#![deny(clippy::all)]

//! Exercise grading flow.
//!
//! Wraps the structural validator with the pieces a tutorial host needs: an
//! exercise catalog loaded from JSON, per-session attempt/solved bookkeeping
//! with try-gated hints, and a controller that runs a submission through the
//! template match and any path-query rules. The validator stays stateless;
//! all mutable state lives in the session object owned by the caller.

pub mod exercise;
pub mod grading;
pub mod render;
pub mod session;

pub use exercise::{ErrorHint, Exercise, ExerciseCatalog, ExerciseGroup};
pub use grading::{grade, GradeReport};
pub use render::{DiagnosticRenderer, PlainTextRenderer};
pub use session::{ExerciseId, GradingSession};
