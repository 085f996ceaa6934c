//! Diagnostic rendering contract.
//!
//! The host application owns the actual presentation (a result panel, a DOM
//! node, whatever); this module only fixes the boundary: a pass and a failure
//! each render to one user-facing message. `PlainTextRenderer` is the
//! reference implementation used by tests and simple hosts.

use markup_validator::{MatchResult, Mismatch};

pub trait DiagnosticRenderer {
    fn render_pass(&self) -> String;
    fn render_failure(&self, mismatch: &Mismatch) -> String;

    fn render(&self, result: &MatchResult) -> String {
        match result {
            MatchResult::Pass => self.render_pass(),
            MatchResult::Fail(mismatch) => self.render_failure(mismatch),
        }
    }
}

/// Renders the classic pass/fail lines.
#[derive(Debug, Default)]
pub struct PlainTextRenderer;

impl DiagnosticRenderer for PlainTextRenderer {
    fn render_pass(&self) -> String {
        "✅ Output matches".to_string()
    }

    fn render_failure(&self, mismatch: &Mismatch) -> String {
        format!("❌ {}", mismatch.message)
    }
}
