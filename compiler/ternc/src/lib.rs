//! Tern compiler driver.
//!
//! [`compile`] runs one translation unit through the lexer, the parser, and
//! elaboration, and hands back every artifact of the run in a
//! [`Compilation`]. Enable logging with `RUST_LOG=tern_elab=debug` or
//! `RUST_LOG=tern_parse=trace` after calling [`init_tracing`].

mod compile;

pub use compile::{compile, Compilation, CompileError};
pub use tern_elab::ElabOptions;
pub use tern_parse::{ParseMode, ParseOptions};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Installs nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
