//! Diagnostics for the Tern front end.
//!
//! The core only produces structured values: an `ErrorCode`, a message, and
//! labeled spans. Rendering against source text belongs to whoever consumes
//! the queue.

mod diagnostic;
mod error_code;
pub mod queue;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
